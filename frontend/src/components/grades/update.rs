//! Elm-style update for the grade input page: mutates the state for `msg` and
//! returns whether the view must re-render.

use common::api::ApiError;
use common::editor::{create_assessment, delete_assessment, submit_grades, Confirmation, EditorError};
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::Page;
use crate::helpers::{confirm_leave, set_window_dirty_flag, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::GradeInputPage;

const UNSAVED_CHANGES: &str = "Ada perubahan nilai yang belum disimpan. Tinggalkan halaman ini?";

pub fn update(page: &mut GradeInputPage, ctx: &Context<GradeInputPage>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(Ok(data)) => {
            page.data = Some(data);
            page.load_error = None;
            sync_dirty_flag(page);
            true
        }
        Msg::Loaded(Err(ApiError::SessionEnded)) => false,
        Msg::Loaded(Err(e)) => {
            error!("Loading assignment failed:", e.to_string());
            page.load_error = Some(
                e.user_message()
                    .unwrap_or_else(|| "Gagal memuat data.".to_string()),
            );
            true
        }
        Msg::ScoreInput {
            student_id,
            assessment_id,
            raw,
        } => {
            if page.saving {
                return true;
            }
            if let Some(data) = &mut page.data {
                data.grades.set_score(student_id, assessment_id, &raw);
            }
            sync_dirty_flag(page);
            // Re-render either way: ignored input snaps back to the stored value.
            true
        }
        Msg::SetNewAssessmentName(name) => {
            page.new_assessment_name = name;
            page.assessment_name_error.take().is_some()
        }
        Msg::CreateAssessment => {
            if page.creating {
                return false;
            }
            page.creating = true;
            let api = ctx.props().api.clone();
            let assignment_id = ctx.props().assignment_id;
            let name = page.new_assessment_name.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = create_assessment(&api, assignment_id, &name).await;
                link.send_message(Msg::AssessmentCreated(result));
            });
            true
        }
        Msg::AssessmentCreated(result) => {
            page.creating = false;
            match result {
                Ok(data) => {
                    page.data = Some(data);
                    page.new_assessment_name.clear();
                    page.assessment_name_error = None;
                    show_toast("Penilaian berhasil dibuat.");
                }
                Err(EditorError::Validation(message)) => {
                    page.assessment_name_error = Some(message);
                }
                Err(e) => report_editor_error("Gagal membuat penilaian", e),
            }
            sync_dirty_flag(page);
            true
        }
        Msg::RequestDelete(assessment_id) => {
            page.pending_delete = Some(assessment_id);
            open_top_sheet(page.confirm_sheet_ref.clone());
            true
        }
        Msg::ResolveDelete(confirmation) => {
            close_top_sheet(page.confirm_sheet_ref.clone());
            let Some(assessment_id) = page.pending_delete.take() else {
                return true;
            };
            page.deleting = confirmation == Confirmation::Confirmed;
            let api = ctx.props().api.clone();
            let assignment_id = ctx.props().assignment_id;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = delete_assessment(&api, assignment_id, assessment_id, confirmation).await;
                link.send_message(Msg::AssessmentDeleted(result));
            });
            true
        }
        Msg::AssessmentDeleted(result) => {
            page.deleting = false;
            match result {
                Ok(Some(data)) => {
                    page.data = Some(data);
                    show_toast("Penilaian berhasil dihapus.");
                }
                Ok(None) => {}
                Err(e) => report_editor_error("Gagal menghapus penilaian", e),
            }
            sync_dirty_flag(page);
            true
        }
        Msg::Save => {
            if page.saving {
                return false;
            }
            let Some(data) = &page.data else {
                return false;
            };
            let update = match data.grades.prepare_save() {
                Ok(update) => update,
                Err(_) => {
                    show_toast("Tidak ada perubahan untuk disimpan.");
                    return false;
                }
            };
            log!("Saving grade changes:", update.grades.len());
            page.saving = true;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = submit_grades(&api, &update).await;
                link.send_message(Msg::Saved(result));
            });
            true
        }
        Msg::Saved(result) => {
            page.saving = false;
            match result {
                Ok(()) => {
                    if let Some(data) = &mut page.data {
                        data.grades.commit();
                    }
                    show_toast("Nilai berhasil disimpan!");
                }
                Err(ApiError::SessionEnded) => {}
                Err(e) => {
                    error!("Saving grades failed:", e.to_string());
                    if let Some(message) = e.user_message() {
                        show_toast(&format!("Gagal menyimpan nilai: {}", message));
                    }
                }
            }
            sync_dirty_flag(page);
            true
        }
        Msg::Back => {
            if page.has_pending_changes() && !confirm_leave(UNSAVED_CHANGES) {
                return false;
            }
            ctx.props().on_navigate.emit(Page::Dashboard);
            false
        }
    }
}

fn sync_dirty_flag(page: &GradeInputPage) {
    set_window_dirty_flag(page.has_pending_changes());
}

fn report_editor_error(action: &str, e: EditorError) {
    match e {
        EditorError::Validation(message) => show_toast(&message),
        EditorError::Api(ApiError::SessionEnded) => {}
        EditorError::Api(e) => {
            error!(format!("{}:", action), e.to_string());
            if let Some(message) = e.user_message() {
                show_toast(&format!("{}: {}", action, message));
            }
        }
    }
}
