use yew::prelude::*;
use yew_router::prelude::*;

use giron_client::{
    api::{ConversationId, User},
    gate, Gate,
};

use crate::{api, routes::Route, ui, Session};

pub struct App {
    session: Option<Session>,
    user: Option<User>,
    /// None while a stored session is being revalidated
    validated: Option<bool>,
    auth_rejected: bool,
}

pub enum AppMsg {
    SessionValidated(Result<User, api::ApiError>),
    LoggedIn(Session, User),
    Logout,
    AuthRejected,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let session = Session::load();
        let validated = match &session {
            None => Some(false),
            Some(s) => {
                let s = s.clone();
                ctx.link()
                    .send_future(
                        async move { AppMsg::SessionValidated(api::whoami(&s).await) },
                    );
                None
            }
        };
        App {
            session,
            user: None,
            validated,
            auth_rejected: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::SessionValidated(Ok(user)) => {
                self.user = Some(user);
                self.validated = Some(true);
            }
            AppMsg::SessionValidated(Err(api::ApiError::Unauthorized)) => {
                Session::clear();
                self.session = None;
                self.validated = Some(false);
            }
            AppMsg::SessionValidated(Err(e)) => {
                tracing::error!("failed revalidating stored session: {}", e);
                self.validated = Some(false);
            }
            AppMsg::LoggedIn(session, user) => {
                session.save();
                self.session = Some(session);
                self.user = Some(user);
                self.validated = Some(true);
                self.auth_rejected = false;
            }
            AppMsg::Logout => {
                Session::clear();
                if let Some(s) = self.session.take() {
                    // best-effort server-side deregistration
                    wasm_bindgen_futures::spawn_local(async move { api::logout(&s).await });
                }
                self.user = None;
                self.validated = Some(false);
            }
            AppMsg::AuthRejected => {
                Session::clear();
                self.session = None;
                self.user = None;
                self.validated = Some(false);
                self.auth_rejected = true;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = Page {
            session: self.session.clone(),
            user: self.user.clone(),
            logged_in: self.validated,
            auth_rejected: self.auth_rejected,
            on_login: ctx.link().callback(|(s, u)| AppMsg::LoggedIn(s, u)),
            on_logout: ctx.link().callback(|_| AppMsg::Logout),
            on_auth_rejected: ctx.link().callback(|_| AppMsg::AuthRejected),
        };
        html! {
            <BrowserRouter>
                <Switch<Route> render={move |route| page.clone().render(route)} />
            </BrowserRouter>
        }
    }
}

#[derive(Clone)]
struct Page {
    session: Option<Session>,
    user: Option<User>,
    logged_in: Option<bool>,
    auth_rejected: bool,
    on_login: Callback<(Session, User)>,
    on_logout: Callback<()>,
    on_auth_rejected: Callback<()>,
}

impl Page {
    fn render(self, route: Route) -> Html {
        match route {
            Route::Home => html! { <Redirect<Route> to={Route::Conversations} /> },
            Route::SignIn => html! { <ui::SignIn on_login={self.on_login} /> },
            Route::SignUp => html! { <ui::SignUp on_login={self.on_login} /> },
            Route::PwResetRequest => html! { <ui::PwResetRequest /> },
            Route::PwReset { token } => html! { <ui::PwReset {token} /> },
            Route::Conversations => {
                let on_logout = self.on_logout.clone();
                self.private(move |s, u, on_auth_rejected| {
                    html! {
                        <ui::Conversations
                            session={s}
                            user={u}
                            {on_logout}
                            {on_auth_rejected}
                        />
                    }
                })
            }
            Route::Admin { id } => self.private(move |s, u, on_auth_rejected| {
                html! {
                    <ui::Admin
                        session={s}
                        user={u}
                        id={ConversationId(id)}
                        {on_auth_rejected}
                    />
                }
            }),
            Route::Survey { id } => self.private(move |s, _, on_auth_rejected| {
                html! {
                    <ui::Survey
                        session={s}
                        id={ConversationId(id)}
                        {on_auth_rejected}
                    />
                }
            }),
            Route::NotFound => html! {
                <div class="container my-4">
                    <h1>{ "Page not found" }</h1>
                </div>
            },
        }
    }

    /// Applies the auth gate to a private route
    fn private(self, content: impl FnOnce(Session, User, Callback<()>) -> Html) -> Html {
        match gate(self.logged_in, self.auth_rejected) {
            Gate::Loading => html! { <ui::Loading /> },
            Gate::Unauthorized => html! { <ui::RedirectToSignIn /> },
            Gate::Authorized => match (self.session, self.user) {
                (Some(s), Some(u)) => content(s, u, self.on_auth_rejected),
                // authorized implies both are set; render a placeholder if not
                _ => html! { <ui::Loading /> },
            },
        }
    }
}
