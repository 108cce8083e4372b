//! Grade grid: one row per enrolled student, one numeric input per assessment.

use common::editor::LoadedAssignment;
use common::model::assignment::{Assessment, Student};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::tops_sheet::confirm_sheet::ConfirmSheet;

use super::messages::Msg;
use super::state::GradeInputPage;

/// Raw text goes to the reconciler, which clamps it or ignores it.
const SCORE_RANGE: &str = "0-100";

pub fn view(page: &GradeInputPage, ctx: &Context<GradeInputPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="grade-input-page">
            <button class="btn-link" onclick={link.callback(|_| Msg::Back)}>{"← Kembali ke Dashboard"}</button>
            {
                match (&page.data, &page.load_error) {
                    (_, Some(message)) => html! {
                        <div class="alert alert-danger">{ message.clone() }</div>
                    },
                    (None, None) => html! { <p>{"Memuat data ..."}</p> },
                    (Some(data), None) => html! {
                        <>
                            { build_header(data) }
                            { build_new_assessment_form(page, link) }
                            { build_grid(page, data, link) }
                            { build_save_bar(page, data, link) }
                        </>
                    },
                }
            }
            { build_confirm_sheet(page, link) }
        </div>
    }
}

fn build_header(data: &LoadedAssignment) -> Html {
    let assignment = &data.assignment;
    html! {
        <header class="page-header">
            <h2>{ format!("Input Nilai: {}", assignment.subject.name) }</h2>
            <p>{ format!("Kelas {}", assignment.class.name) }</p>
        </header>
    }
}

fn build_new_assessment_form(page: &GradeInputPage, link: &Scope<GradeInputPage>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::CreateAssessment
    });
    html! {
        <form class="new-assessment" {onsubmit}>
            <input
                type="text"
                placeholder="Nama penilaian baru (mis. UH 1)"
                value={page.new_assessment_name.clone()}
                disabled={page.busy()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetNewAssessmentName(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <button class="btn btn-primary" type="submit" disabled={page.busy()}>
                { if page.creating { "Membuat..." } else { "Tambah Penilaian" } }
            </button>
            if let Some(message) = &page.assessment_name_error {
                <div class="field-error">{ message.clone() }</div>
            }
        </form>
    }
}

fn build_grid(page: &GradeInputPage, data: &LoadedAssignment, link: &Scope<GradeInputPage>) -> Html {
    let assessments = &data.assignment.assessments;
    html! {
        <div class="table-wrapper">
            <table class="grade-table">
                <thead>
                    <tr>
                        <th>{"No"}</th>
                        <th>{"NIS"}</th>
                        <th>{"Nama Siswa"}</th>
                        {
                            if assessments.is_empty() {
                                html! { <th>{"Penilaian"}</th> }
                            } else {
                                assessments
                                    .iter()
                                    .map(|a| assessment_header(page, a, link))
                                    .collect::<Html>()
                            }
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        for data.assignment.students().enumerate().map(|(index, student)| {
                            student_row(page, data, index, student, link)
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}

fn assessment_header(page: &GradeInputPage, assessment: &Assessment, link: &Scope<GradeInputPage>) -> Html {
    let id = assessment.id;
    html! {
        <th key={id.to_string()}>
            <span>{ assessment.name.clone() }</span>
            <button
                class="icon-btn"
                title="Hapus penilaian"
                disabled={page.busy()}
                onclick={link.callback(move |_| Msg::RequestDelete(id))}
            >
                <i class="material-icons">{"delete"}</i>
            </button>
        </th>
    }
}

fn student_row(
    page: &GradeInputPage,
    data: &LoadedAssignment,
    index: usize,
    student: &Student,
    link: &Scope<GradeInputPage>,
) -> Html {
    let assessments = &data.assignment.assessments;
    let student_id = student.id;
    html! {
        <tr key={student_id.to_string()}>
            <td>{ index + 1 }</td>
            <td>{ student.nis.clone() }</td>
            <td>{ student.full_name.clone() }</td>
            {
                if assessments.is_empty() {
                    html! { <td class="placeholder-cell">{"Buat penilaian terlebih dahulu"}</td> }
                } else {
                    assessments.iter().map(|assessment| {
                        let assessment_id = assessment.id;
                        html! {
                            <td key={assessment_id.to_string()}>
                                <input
                                    type="text"
                                    inputmode="decimal"
                                    class="score-input"
                                    placeholder={SCORE_RANGE}
                                    disabled={page.saving}
                                    value={data.grades.input_value(student_id, assessment_id)}
                                    onchange={link.callback(move |e: Event| Msg::ScoreInput {
                                        student_id,
                                        assessment_id,
                                        raw: e.target_unchecked_into::<HtmlInputElement>().value(),
                                    })}
                                />
                            </td>
                        }
                    }).collect::<Html>()
                }
            }
        </tr>
    }
}

fn build_save_bar(page: &GradeInputPage, data: &LoadedAssignment, link: &Scope<GradeInputPage>) -> Html {
    let pending = data.grades.pending_count();
    html! {
        <div class="save-bar">
            <button
                class="btn btn-success"
                style="position: relative;"
                disabled={page.busy() || pending == 0}
                onclick={link.callback(|_| Msg::Save)}
            >
                { if page.saving { "Menyimpan..." } else { "Simpan Nilai" } }
                if pending > 0 {
                    <span class="dirty-marker" title="Perubahan belum disimpan">{ pending }</span>
                }
            </button>
        </div>
    }
}

fn build_confirm_sheet(page: &GradeInputPage, link: &Scope<GradeInputPage>) -> Html {
    let message = match page.pending_delete_name() {
        Some(name) => format!(
            "Hapus penilaian \"{}\"? Semua nilai pada penilaian ini akan ikut terhapus.",
            name
        ),
        None => "Hapus penilaian ini? Semua nilai pada penilaian ini akan ikut terhapus.".to_string(),
    };
    html! {
        <ConfirmSheet
            node_ref={page.confirm_sheet_ref.clone()}
            message={message}
            on_answer={link.callback(Msg::ResolveDelete)}
        />
    }
}
