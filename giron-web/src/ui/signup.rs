use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use giron_client::api::{AuthResponse, NewUser, User};

use crate::{api, routes::Route, ui, util, Session};

#[derive(Clone, PartialEq, Properties)]
pub struct SignUpProps {
    pub on_login: Callback<(Session, User)>,
}

pub struct SignUp {
    hname: String,
    email: String,
    pass: String,
    pass2: String,
    busy: bool,
    error: Option<String>,
}

pub enum SignUpMsg {
    NameChanged(String),
    EmailChanged(String),
    PassChanged(String),
    Pass2Changed(String),
    SubmitClicked,
    Done(Result<AuthResponse, api::ApiError>),
}

impl Component for SignUp {
    type Message = SignUpMsg;
    type Properties = SignUpProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            hname: String::new(),
            email: String::new(),
            pass: String::new(),
            pass2: String::new(),
            busy: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SignUpMsg::NameChanged(n) => self.hname = n,
            SignUpMsg::EmailChanged(e) => self.email = e,
            SignUpMsg::PassChanged(p) => self.pass = p,
            SignUpMsg::Pass2Changed(p) => self.pass2 = p,
            SignUpMsg::SubmitClicked => {
                if self.busy {
                    return false;
                }
                if self.pass != self.pass2 {
                    self.error = Some(String::from("Passwords do not match"));
                    return true;
                }
                self.busy = true;
                self.error = None;
                let user = NewUser {
                    hname: self.hname.clone(),
                    email: self.email.clone(),
                    password: self.pass.clone(),
                };
                let host = util::origin();
                ctx.link().send_future(async move {
                    SignUpMsg::Done(api::register(&host, &user).await)
                });
            }
            SignUpMsg::Done(Ok(resp)) => {
                self.busy = false;
                let session = Session {
                    host: util::origin(),
                    uid: resp.user.uid,
                    token: resp.token,
                };
                ctx.props().on_login.emit((session, resp.user));
                if let Some(nav) = ctx.link().navigator() {
                    nav.push(&Route::Conversations);
                }
            }
            SignUpMsg::Done(Err(e)) => {
                self.busy = false;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! callback_for {
            ($msg:ident) => {
                ctx.link().callback(|e: web_sys::Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    SignUpMsg::$msg(input.value())
                })
            };
        }
        html! {<>
            <div class="text-center my-4">
                <h1>{ "Create an account" }</h1>
            </div>
            <form class="login-form">
                { for self.error.as_ref().map(|e| html! { <ui::ErrorAlert message={e.clone()} /> }) }
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="hname">{ "Name" }</label>
                    <input
                        type="text"
                        class="form-control form-control-lg"
                        id="hname"
                        placeholder="Your name"
                        value={self.hname.clone()}
                        onchange={callback_for!(NameChanged)}
                    />
                </div>
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="email">{ "Email" }</label>
                    <input
                        type="email"
                        class="form-control form-control-lg"
                        id="email"
                        placeholder="you@example.org"
                        value={self.email.clone()}
                        onchange={callback_for!(EmailChanged)}
                    />
                </div>
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="pass">{ "Password" }</label>
                    <input
                        type="password"
                        class="form-control form-control-lg"
                        id="pass"
                        value={self.pass.clone()}
                        onchange={callback_for!(PassChanged)}
                    />
                </div>
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="pass2">{ "Repeat" }</label>
                    <input
                        type="password"
                        class="form-control form-control-lg"
                        id="pass2"
                        value={self.pass2.clone()}
                        onchange={callback_for!(Pass2Changed)}
                    />
                </div>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={self.busy}
                    onclick={ctx.link().callback(|e: MouseEvent| {
                        e.prevent_default();
                        SignUpMsg::SubmitClicked
                    })}
                >
                    { "Create account" }
                </button>
            </form>
        </>}
    }
}
