use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{Route, SignInQuery};
use crate::ui;

/// Rendered by the shell for a private route when the gate decides
/// `Unauthorized`: navigates to the sign-in view, preserving the path the
/// visitor asked for so they can be sent back after logging in.
#[function_component(RedirectToSignIn)]
pub fn redirect_to_sign_in() -> Html {
    let navigator = use_navigator().expect("redirect rendered outside a router");
    let location = use_location().expect("redirect rendered outside a router");
    let dest = location.path().to_string();
    use_effect(move || {
        let query = SignInQuery { dest: Some(dest) };
        if let Err(e) = navigator.push_with_query(&Route::SignIn, &query) {
            tracing::error!("failed navigating to sign-in: {:?}", e);
        }
        || ()
    });
    html! { <ui::Loading /> }
}
