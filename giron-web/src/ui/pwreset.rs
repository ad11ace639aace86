use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use giron_client::api::{PwReset as PwResetBody, PwResetRequest as PwResetRequestBody};

use crate::{api, routes::Route, ui, util};

pub struct PwResetRequest {
    email: String,
    busy: bool,
    sent: bool,
    error: Option<String>,
}

pub enum PwResetRequestMsg {
    EmailChanged(String),
    SubmitClicked,
    Done(Result<(), api::ApiError>),
}

impl Component for PwResetRequest {
    type Message = PwResetRequestMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            busy: false,
            sent: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PwResetRequestMsg::EmailChanged(e) => self.email = e,
            PwResetRequestMsg::SubmitClicked => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                self.error = None;
                let body = PwResetRequestBody {
                    email: self.email.clone(),
                };
                let host = util::origin();
                ctx.link().send_future(async move {
                    PwResetRequestMsg::Done(api::request_pw_reset(&host, &body).await)
                });
            }
            PwResetRequestMsg::Done(Ok(())) => {
                self.busy = false;
                self.sent = true;
            }
            PwResetRequestMsg::Done(Err(e)) => {
                self.busy = false;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.sent {
            // same wording whether or not the address has an account
            return html! {
                <div class="container my-4">
                    <p>{ "If this address has an account, a reset link is on its way." }</p>
                </div>
            };
        }
        html! {<>
            <div class="text-center my-4">
                <h1>{ "Reset password" }</h1>
            </div>
            <form class="login-form">
                { for self.error.as_ref().map(|e| html! { <ui::ErrorAlert message={e.clone()} /> }) }
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="email">{ "Email" }</label>
                    <input
                        type="email"
                        class="form-control form-control-lg"
                        id="email"
                        placeholder="you@example.org"
                        value={self.email.clone()}
                        onchange={ctx.link().callback(|e: web_sys::Event| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            PwResetRequestMsg::EmailChanged(input.value())
                        })}
                    />
                </div>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={self.busy}
                    onclick={ctx.link().callback(|e: MouseEvent| {
                        e.prevent_default();
                        PwResetRequestMsg::SubmitClicked
                    })}
                >
                    { "Send reset link" }
                </button>
            </form>
        </>}
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct PwResetProps {
    pub token: String,
}

pub struct PwReset {
    pass: String,
    pass2: String,
    busy: bool,
    error: Option<String>,
}

pub enum PwResetMsg {
    PassChanged(String),
    Pass2Changed(String),
    SubmitClicked,
    Done(Result<(), api::ApiError>),
}

impl Component for PwReset {
    type Message = PwResetMsg;
    type Properties = PwResetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            pass: String::new(),
            pass2: String::new(),
            busy: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PwResetMsg::PassChanged(p) => self.pass = p,
            PwResetMsg::Pass2Changed(p) => self.pass2 = p,
            PwResetMsg::SubmitClicked => {
                if self.busy {
                    return false;
                }
                if self.pass != self.pass2 {
                    self.error = Some(String::from("Passwords do not match"));
                    return true;
                }
                self.busy = true;
                self.error = None;
                let body = PwResetBody {
                    pwresettoken: ctx.props().token.clone(),
                    new_password: self.pass.clone(),
                };
                let host = util::origin();
                ctx.link().send_future(async move {
                    PwResetMsg::Done(api::set_password(&host, &body).await)
                });
            }
            PwResetMsg::Done(Ok(())) => {
                self.busy = false;
                if let Some(nav) = ctx.link().navigator() {
                    nav.push(&Route::SignIn);
                }
            }
            PwResetMsg::Done(Err(e)) => {
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
                    PwResetMsg::$msg(input.value())
                })
            };
        }
        html! {<>
            <div class="text-center my-4">
                <h1>{ "Choose a new password" }</h1>
            </div>
            <form class="login-form">
                { for self.error.as_ref().map(|e| html! { <ui::ErrorAlert message={e.clone()} /> }) }
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
                        PwResetMsg::SubmitClicked
                    })}
                >
                    { "Set password" }
                </button>
            </form>
        </>}
    }
}
