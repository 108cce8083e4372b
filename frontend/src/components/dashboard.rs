//! Class list: every teaching assignment of the signed-in user with links to
//! grade input and the summary.

use common::api::{ApiError, GradeApi};
use common::model::assignment::Assignment;
use common::model::user::User;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub api: ApiClient,
    pub user: User,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
}

pub enum Msg {
    Loaded(Result<Vec<Assignment>, ApiError>),
}

pub enum Dashboard {
    Loading,
    Loaded(Vec<Assignment>),
    Failed(String),
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(api.my_classes().await));
        });
        Dashboard::Loading
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(assignments)) => *self = Dashboard::Loaded(assignments),
            Msg::Loaded(Err(ApiError::SessionEnded)) => return false,
            Msg::Loaded(Err(e)) => {
                error!("Loading classes failed:", e.to_string());
                *self = Dashboard::Failed(
                    e.user_message()
                        .unwrap_or_else(|| "Gagal memuat data kelas.".to_string()),
                );
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_logout = props.on_logout.reform(|_: MouseEvent| ());

        html! {
            <div class="dashboard">
                <header class="page-header">
                    <div>
                        <h2>{ format!("Halo, {}", props.user.full_name) }</h2>
                        <span class="role">{ props.user.role.clone() }</span>
                    </div>
                    <button class="btn btn-secondary" onclick={on_logout}>{"Logout"}</button>
                </header>
                <h3>{"Kelas yang Anda ajar"}</h3>
                {
                    match self {
                        Dashboard::Loading => html! { <p>{"Memuat data kelas..."}</p> },
                        Dashboard::Failed(message) => html! {
                            <div class="alert alert-danger">{ message.clone() }</div>
                        },
                        Dashboard::Loaded(assignments) if assignments.is_empty() => html! {
                            <p>{"Belum ada kelas yang ditugaskan."}</p>
                        },
                        Dashboard::Loaded(assignments) => html! {
                            <div class="class-list">
                                { for assignments.iter().map(|a| assignment_card(a, &props.on_navigate)) }
                            </div>
                        },
                    }
                }
            </div>
        }
    }
}

fn assignment_card(assignment: &Assignment, on_navigate: &Callback<Page>) -> Html {
    let id = assignment.id;
    let to_grades = on_navigate.reform(move |_: MouseEvent| Page::Grades(id));
    let to_summary = on_navigate.reform(move |_: MouseEvent| Page::Summary(id));
    let level = assignment
        .class
        .level
        .as_ref()
        .map(|l| format!("Kelas {}", l))
        .unwrap_or_default();

    html! {
        <div class="class-card" key={id.to_string()}>
            <h4>{ assignment.class.name.clone() }</h4>
            <p class="level">{ level }</p>
            <p class="subject">{ assignment.subject.name.clone() }</p>
            <div class="card-actions">
                <button class="btn btn-primary" onclick={to_grades}>{"Input Nilai"}</button>
                <button class="btn btn-outline" onclick={to_summary}>{"Lihat Rekap"}</button>
            </div>
        </div>
    }
}
