//! Root component: restores the session, loads the client configuration from
//! the local backend and switches between the four pages.

use std::rc::Rc;

use common::model::assignment::AssignmentId;
use common::model::config::ClientConfig;
use common::model::user::User;
use common::session::{Session, SessionStore};
use gloo_console::{error, log};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api::{ApiClient, SharedSession};
use crate::components::dashboard::Dashboard;
use crate::components::grades::GradeInputPage;
use crate::components::login::LoginPage;
use crate::components::summary::SummaryPage;
use crate::helpers::{set_window_dirty_flag, show_toast};
use crate::session::BrowserStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    Grades(AssignmentId),
    Summary(AssignmentId),
}

pub enum Msg {
    ConfigLoaded(ClientConfig),
    LoggedIn(Session),
    Logout,
    SessionExpired,
    Navigate(Page),
}

pub struct App {
    session: SharedSession,
    user: Option<User>,
    api: Option<ApiClient>,
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let session: SharedSession = Rc::new(SessionStore::new(BrowserStorage::open()));
        let user = session.load().map(|s| s.user);
        let page = if user.is_some() {
            Page::Dashboard
        } else {
            Page::Login
        };

        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(fetch_client_config().await));
        });

        Self {
            session,
            user,
            api: None,
            page,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                let on_unauthorized = ctx.link().callback(|_| Msg::SessionExpired);
                self.api = Some(ApiClient::new(
                    &config.api_base_url,
                    self.session.clone(),
                    on_unauthorized,
                ));
                true
            }
            Msg::LoggedIn(session) => {
                if let Err(e) = self.session.save(&session) {
                    error!("Could not store the session:", e.to_string());
                }
                log!("Logged in as", session.user.full_name.clone());
                self.user = Some(session.user);
                self.page = Page::Dashboard;
                true
            }
            Msg::Logout => {
                self.end_session();
                true
            }
            Msg::SessionExpired => {
                if self.user.is_some() {
                    show_toast("Sesi berakhir. Silakan login kembali.");
                }
                self.end_session();
                true
            }
            Msg::Navigate(page) => {
                if self.user.is_none() {
                    self.page = Page::Login;
                } else {
                    self.page = page;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(api) = self.api.clone() else {
            return html! { <div class="loading">{"Memuat data ..."}</div> };
        };
        let on_navigate = ctx.link().callback(Msg::Navigate);

        let content = match (self.page, &self.user) {
            (Page::Login, _) | (_, None) => html! {
                <LoginPage api={api} on_login={ctx.link().callback(Msg::LoggedIn)} />
            },
            (Page::Dashboard, Some(user)) => html! {
                <Dashboard
                    api={api}
                    user={user.clone()}
                    on_navigate={on_navigate}
                    on_logout={ctx.link().callback(|_| Msg::Logout)}
                />
            },
            (Page::Grades(id), Some(_)) => html! {
                <GradeInputPage key={format!("grades-{}", id)} api={api} assignment_id={id} on_navigate={on_navigate} />
            },
            (Page::Summary(id), Some(_)) => html! {
                <SummaryPage key={format!("summary-{}", id)} api={api} assignment_id={id} on_navigate={on_navigate} />
            },
        };

        html! { <div class="app-root">{ content }</div> }
    }
}

impl App {
    /// Logout and 401 both land here: the stored session goes, in-flight
    /// responses become stale and the login page is shown.
    fn end_session(&mut self) {
        if self.user.is_some() {
            log!("Session cleared");
        }
        self.session.clear();
        self.user = None;
        self.page = Page::Login;
        set_window_dirty_flag(false);
    }
}

/// `/api/config` from the local backend; the built-in default when the page
/// is served by something else.
async fn fetch_client_config() -> ClientConfig {
    match Request::get("/api/config").send().await {
        Ok(resp) if resp.ok() => match resp.json::<ClientConfig>().await {
            Ok(config) => config,
            Err(e) => {
                error!("Invalid /api/config body:", e.to_string());
                ClientConfig::default()
            }
        },
        Ok(resp) => {
            log!("No client configuration, status", resp.status());
            ClientConfig::default()
        }
        Err(e) => {
            log!("No client configuration:", e.to_string());
            ClientConfig::default()
        }
    }
}
