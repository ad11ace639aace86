use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use giron_client::api::{AuthResponse, Credentials, User};

use crate::{
    api,
    routes::{Route, SignInQuery},
    ui, util, Session,
};

#[derive(Clone, PartialEq, Properties)]
pub struct SignInProps {
    pub on_login: Callback<(Session, User)>,
}

pub struct SignIn {
    email: String,
    pass: String,
    busy: bool,
    error: Option<String>,
}

pub enum SignInMsg {
    EmailChanged(String),
    PassChanged(String),
    SubmitClicked,
    Done(Result<AuthResponse, api::ApiError>),
}

impl Component for SignIn {
    type Message = SignInMsg;
    type Properties = SignInProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            pass: String::new(),
            busy: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SignInMsg::EmailChanged(e) => self.email = e,
            SignInMsg::PassChanged(p) => self.pass = p,
            SignInMsg::SubmitClicked => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                self.error = None;
                let creds = Credentials {
                    email: self.email.clone(),
                    password: self.pass.clone(),
                };
                let host = util::origin();
                ctx.link().send_future(async move {
                    SignInMsg::Done(api::login(&host, &creds).await)
                });
            }
            SignInMsg::Done(Ok(resp)) => {
                self.busy = false;
                let session = Session {
                    host: util::origin(),
                    uid: resp.user.uid,
                    token: resp.token,
                };
                ctx.props().on_login.emit((session, resp.user));
                // send the visitor back to where the gate stopped them
                let dest = ctx
                    .link()
                    .location()
                    .and_then(|l| l.query::<SignInQuery>().ok())
                    .and_then(|q| q.dest);
                let route = dest
                    .as_deref()
                    .and_then(Route::recognize)
                    .unwrap_or(Route::Conversations);
                if let Some(nav) = ctx.link().navigator() {
                    nav.push(&route);
                }
            }
            SignInMsg::Done(Err(e)) => {
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
                    SignInMsg::$msg(input.value())
                })
            };
        }
        html! {<>
            <div class="text-center my-4">
                <h1>{ "Sign in" }</h1>
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
                        onchange={callback_for!(EmailChanged)}
                    />
                </div>
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="pass">{ "Password" }</label>
                    <input
                        type="password"
                        class="form-control form-control-lg"
                        id="pass"
                        placeholder="pass"
                        value={self.pass.clone()}
                        onchange={callback_for!(PassChanged)}
                    />
                </div>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={self.busy}
                    onclick={ctx.link().callback(|e: MouseEvent| {
                        e.prevent_default();
                        SignInMsg::SubmitClicked
                    })}
                >
                    { "Sign in" }
                </button>
            </form>
            <div class="text-center mt-3">
                <Link<Route> to={Route::SignUp}>{ "Create an account" }</Link<Route>>
                { " · " }
                <Link<Route> to={Route::PwResetRequest}>{ "Forgot password?" }</Link<Route>>
            </div>
        </>}
    }
}
