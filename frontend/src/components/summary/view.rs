use common::report::{format_kkm, summary_rows, PassStatus, SummaryRow, SUMMARY_COLUMNS};
use yew::html::Scope;
use yew::prelude::*;

use super::{Msg, SummaryPage};

pub fn view(page: &SummaryPage, ctx: &Context<SummaryPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="summary-page">
            <button class="btn-link" onclick={link.callback(|_| Msg::Back)}>{"← Kembali ke Dashboard"}</button>
            {
                match (&page.summary, &page.load_error) {
                    (_, Some(message)) => html! {
                        <div class="alert alert-danger">{ message.clone() }</div>
                    },
                    (None, None) => html! { <p>{"Memuat data ..."}</p> },
                    (Some(summary), None) => {
                        let header = &summary.assignment;
                        html! {
                            <>
                                <header class="page-header">
                                    <div>
                                        <h2>{ format!("Rekap Nilai: {}", header.subject.name) }</h2>
                                        <p>{ format!("Kelas {} | KKM {}", header.class.name, format_kkm(header.kkm)) }</p>
                                    </div>
                                    <button
                                        class="btn btn-primary"
                                        disabled={page.exporting_class}
                                        onclick={link.callback(|_| Msg::ExportClass)}
                                    >
                                        { if page.exporting_class { "Membuat PDF..." } else { "Unduh PDF" } }
                                    </button>
                                </header>
                                <div class="table-wrapper">
                                    <table class="summary-table">
                                        <thead>
                                            <tr>
                                                { for SUMMARY_COLUMNS.iter().map(|c| html! { <th>{ *c }</th> }) }
                                                <th>{"Aksi"}</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            { for summary_rows(summary).into_iter().map(|row| summary_row(page, row, link)) }
                                        </tbody>
                                    </table>
                                </div>
                            </>
                        }
                    }
                }
            }
        </div>
    }
}

fn summary_row(page: &SummaryPage, row: SummaryRow, link: &Scope<SummaryPage>) -> Html {
    let student_id = row.student_id;
    let exporting = page.exporting_students.contains(&student_id);
    let status_class = match row.status {
        PassStatus::Passed => "status passed",
        PassStatus::NotPassed => "status not-passed",
    };
    html! {
        <tr key={student_id.to_string()}>
            <td>{ row.number }</td>
            <td>{ row.nis }</td>
            <td>{ row.full_name }</td>
            <td>{ row.average }</td>
            <td><span class={status_class}>{ row.status.label() }</span></td>
            <td>
                <button
                    class="btn btn-outline"
                    disabled={exporting}
                    onclick={link.callback(move |_| Msg::ExportStudent(student_id))}
                >
                    { if exporting { "..." } else { "Rapor" } }
                </button>
            </td>
        </tr>
    }
}
