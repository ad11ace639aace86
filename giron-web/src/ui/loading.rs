use yew::prelude::*;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="d-flex align-items-center m-4">
            <div class="spinner-border spinner-border-sm m-2" role="status"></div>
            <div>{ "Loading..." }</div>
        </div>
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct ErrorAlertProps {
    pub message: String,
}

#[function_component(ErrorAlert)]
pub fn error_alert(p: &ErrorAlertProps) -> Html {
    html! {
        <div class="alert alert-danger" role="alert">
            { &p.message }
        </div>
    }
}
