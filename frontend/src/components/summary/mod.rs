//! Summary page: average score and pass status per student, with the class
//! PDF and one report PDF per student.
//!
//! Each per-student export only locks its own button; several can run at
//! once and a failure never touches the others.

use std::collections::HashSet;

use common::api::{ApiError, GradeApi};
use common::model::assignment::{AssignmentId, StudentId};
use common::model::summary::AssignmentSummary;
use common::report::{report_label_for, summary_label, ExportError};
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::Page;
use crate::exporter::{export_class_summary, export_student_report};
use crate::helpers::show_toast;

mod view;

#[derive(Properties, PartialEq, Clone)]
pub struct SummaryProps {
    pub api: ApiClient,
    pub assignment_id: AssignmentId,
    pub on_navigate: Callback<Page>,
}

pub enum Msg {
    Loaded(Result<AssignmentSummary, ApiError>),
    ExportClass,
    ClassExported(Result<String, ExportError>),
    ExportStudent(StudentId),
    StudentExported {
        student_id: StudentId,
        result: Result<String, ExportError>,
    },
    Back,
}

pub struct SummaryPage {
    pub summary: Option<AssignmentSummary>,
    pub load_error: Option<String>,
    pub exporting_class: bool,
    /// Students whose report PDF is being produced.
    pub exporting_students: HashSet<StudentId>,
}

impl Component for SummaryPage {
    type Message = Msg;
    type Properties = SummaryProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let assignment_id = ctx.props().assignment_id;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(api.summary(assignment_id).await));
        });
        Self {
            summary: None,
            load_error: None,
            exporting_class: false,
            exporting_students: HashSet::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(summary)) => {
                self.summary = Some(summary);
                self.load_error = None;
                true
            }
            Msg::Loaded(Err(ApiError::SessionEnded)) => false,
            Msg::Loaded(Err(e)) => {
                error!("Loading summary failed:", e.to_string());
                self.load_error = Some(
                    e.user_message()
                        .unwrap_or_else(|| "Gagal memuat rekap nilai.".to_string()),
                );
                true
            }
            Msg::ExportClass => {
                let Some(summary) = self.summary.clone() else {
                    return false;
                };
                if self.exporting_class {
                    return false;
                }
                self.exporting_class = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = export_class_summary(&summary).await;
                    link.send_message(Msg::ClassExported(result));
                });
                true
            }
            Msg::ClassExported(result) => {
                self.exporting_class = false;
                let subject = self
                    .summary
                    .as_ref()
                    .map(summary_label)
                    .unwrap_or_default();
                report_export(&subject, result);
                true
            }
            Msg::ExportStudent(student_id) => {
                if !self.exporting_students.insert(student_id) {
                    return false;
                }
                let api = ctx.props().api.clone();
                let assignment_id = ctx.props().assignment_id;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = export_student_report(&api, assignment_id, student_id).await;
                    link.send_message(Msg::StudentExported { student_id, result });
                });
                true
            }
            Msg::StudentExported { student_id, result } => {
                self.exporting_students.remove(&student_id);
                let subject = self
                    .summary
                    .as_ref()
                    .and_then(|s| s.student_summaries.iter().find(|e| e.student_id == student_id))
                    .map(|entry| report_label_for(&entry.full_name, &entry.nis))
                    .unwrap_or_else(|| format!("siswa {}", student_id));
                report_export(&subject, result);
                true
            }
            Msg::Back => {
                ctx.props().on_navigate.emit(Page::Dashboard);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

fn report_export(subject: &str, result: Result<String, ExportError>) {
    match result {
        Ok(file_name) => {
            log!("Downloaded", file_name.clone());
            show_toast(&format!("{} berhasil diunduh.", file_name));
        }
        Err(e) => {
            error!(format!("Export for {} failed:", subject), e.to_string());
            if let Some(message) = e.user_message(subject) {
                show_toast(&message);
            }
        }
    }
}
