//! Username/password form. On success the session goes up to `App`, which
//! stores it and shows the dashboard.

use common::api::{ApiError, GradeApi, GENERIC_SERVER_ERROR};
use common::requests::LoginRequest;
use common::session::Session;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;

const LOGIN_FAILED: &str = "Terjadi kesalahan saat Login.";

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub api: ApiClient,
    pub on_login: Callback<Session>,
}

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Failed(String),
}

pub struct LoginPage {
    username: String,
    password: String,
    submitting: bool,
    error: Option<String>,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            submitting: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(value) => {
                self.username = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                self.submitting = true;
                self.error = None;

                let request = LoginRequest {
                    username: self.username.trim().to_string(),
                    password: self.password.clone(),
                };
                let api = ctx.props().api.clone();
                let on_login = ctx.props().on_login.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api.login(&request).await {
                        Ok(response) => on_login.emit(Session::from(response)),
                        Err(ApiError::Http { message, .. }) if message != GENERIC_SERVER_ERROR => {
                            link.send_message(Msg::Failed(message))
                        }
                        Err(_) => link.send_message(Msg::Failed(LOGIN_FAILED.to_string())),
                    }
                });
                true
            }
            Msg::Failed(message) => {
                self.submitting = false;
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="login-page">
                <form class="login-card" {onsubmit}>
                    <h2>{"Login SIAKAD"}</h2>
                    if let Some(error) = &self.error {
                        <div class="alert alert-danger">{ error.clone() }</div>
                    }
                    <label for="username">{"Username"}</label>
                    <input
                        id="username"
                        type="text"
                        required=true
                        disabled={self.submitting}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetUsername(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <label for="password">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        required=true
                        disabled={self.submitting}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button class="btn btn-primary" type="submit" disabled={self.submitting}>
                        { if self.submitting { "Memproses..." } else { "Login" } }
                    </button>
                </form>
            </div>
        }
    }
}
