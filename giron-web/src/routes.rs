use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signin")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[at("/pwreset")]
    PwResetRequest,
    #[at("/pwreset/:token")]
    PwReset { token: String },
    #[at("/conversations")]
    Conversations,
    #[at("/m/:id")]
    Admin { id: String },
    #[at("/c/:id")]
    Survey { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string of the sign-in view, carrying the path the visitor was
/// denied so they can be sent back after logging in.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SignInQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,
}
