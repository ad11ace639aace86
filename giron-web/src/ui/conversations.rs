use yew::prelude::*;
use yew_router::prelude::*;

use giron_client::{
    api::{Conversation, NewConversation, User},
    ConvoFilter,
};

use crate::{api, routes::Route, ui, Session};

#[derive(Clone, PartialEq, Properties)]
pub struct ConversationsProps {
    pub session: Session,
    pub user: User,
    pub on_logout: Callback<()>,
    pub on_auth_rejected: Callback<()>,
}

pub struct Conversations {
    /// None until the initial fetch completed
    convos: Option<Vec<Conversation>>,
    filter: ConvoFilter,
    error: Option<String>,
    topic: String,
    description: String,
    creating: bool,
}

pub enum ConversationsMsg {
    Received(Result<Vec<Conversation>, api::ApiError>),
    SetFilter(ConvoFilter),
    TopicChanged(String),
    DescriptionChanged(String),
    CreateClicked,
    Created(Result<Conversation, api::ApiError>),
}

impl Component for Conversations {
    type Message = ConversationsMsg;
    type Properties = ConversationsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let session = ctx.props().session.clone();
        ctx.link().send_future(async move {
            ConversationsMsg::Received(api::fetch_conversations(&session).await)
        });
        Self {
            convos: None,
            filter: ConvoFilter::default(),
            error: None,
            topic: String::new(),
            description: String::new(),
            creating: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ConversationsMsg::Received(Ok(convos)) => self.convos = Some(convos),
            ConversationsMsg::Received(Err(api::ApiError::Unauthorized)) => {
                ctx.props().on_auth_rejected.emit(());
            }
            ConversationsMsg::Received(Err(e)) => {
                self.convos = Some(Vec::new());
                self.error = Some(e.to_string());
            }
            ConversationsMsg::SetFilter(f) => self.filter = f,
            ConversationsMsg::TopicChanged(t) => self.topic = t,
            ConversationsMsg::DescriptionChanged(d) => self.description = d,
            ConversationsMsg::CreateClicked => {
                if self.creating || self.topic.trim().is_empty() {
                    return false;
                }
                self.creating = true;
                self.error = None;
                let session = ctx.props().session.clone();
                let convo = NewConversation {
                    topic: self.topic.clone(),
                    description: self.description.clone(),
                    is_active: true,
                    is_draft: false,
                };
                ctx.link().send_future(async move {
                    ConversationsMsg::Created(api::create_conversation(&session, &convo).await)
                });
            }
            ConversationsMsg::Created(Ok(convo)) => {
                self.creating = false;
                self.topic.clear();
                self.description.clear();
                if let Some(convos) = &mut self.convos {
                    convos.insert(0, convo);
                }
            }
            ConversationsMsg::Created(Err(api::ApiError::Unauthorized)) => {
                ctx.props().on_auth_rejected.emit(());
            }
            ConversationsMsg::Created(Err(e)) => {
                self.creating = false;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let convos = match &self.convos {
            None => return html! { <ui::Loading /> },
            Some(convos) => convos,
        };

        let filter_buttons = [ConvoFilter::All, ConvoFilter::Open, ConvoFilter::Closed]
            .into_iter()
            .map(|f| {
                let active = (f == self.filter).then(|| "active");
                html! {
                    <button
                        type="button"
                        class={classes!("btn", "btn-outline-secondary", active)}
                        onclick={ctx.link().callback(move |_| ConversationsMsg::SetFilter(f))}
                    >
                        { f.label() }
                    </button>
                }
            });

        let rows = self.filter.apply(convos).into_iter().map(|c| {
            let id = c.conversation_id.0.clone();
            let badge = match (c.is_active, c.is_draft) {
                (_, true) => Some(("badge bg-secondary", "draft")),
                (false, false) => Some(("badge bg-dark", "closed")),
                (true, false) => None,
            };
            html! {
                <li class="list-group-item">
                    <div class="d-flex align-items-center">
                        <span class="flex-grow-1">
                            <Link<Route> to={Route::Survey { id: id.clone() }}>
                                { &c.topic }
                            </Link<Route>>
                            { for badge.map(|(class, label)| html! {
                                <span class={classes!("ms-2", class)}>{ label }</span>
                            }) }
                        </span>
                        <span class="me-3">
                            { format!("{} participants", c.participant_count) }
                        </span>
                        <Link<Route> classes="btn btn-sm btn-outline-primary" to={Route::Admin { id }}>
                            { "Moderate" }
                        </Link<Route>>
                    </div>
                    <div class="text-muted">{ &c.description }</div>
                    { for c.parent_url.as_ref().map(|url| html! {
                        <div><small>{ "Embedded on " }<a href={url.clone()}>{ url }</a></small></div>
                    }) }
                </li>
            }
        });

        html! {
            <div class="container my-4">
                <div class="d-flex align-items-center mb-4">
                    <h1 class="flex-grow-1">{ "Conversations" }</h1>
                    <span class="me-3">{ &ctx.props().user.hname }</span>
                    <button
                        type="button"
                        class="btn btn-outline-secondary"
                        onclick={ctx.props().on_logout.reform(|_| ())}
                    >
                        { "Sign out" }
                    </button>
                </div>

                { for self.error.as_ref().map(|e| html! { <ui::ErrorAlert message={e.clone()} /> }) }

                <form class="new-conversation-form mb-4">
                    <div class="input-group mb-2">
                        <label class="input-group-text" for="topic">{ "Topic" }</label>
                        <input
                            type="text"
                            class="form-control"
                            id="topic"
                            value={self.topic.clone()}
                            onchange={ctx.link().callback(|e: web_sys::Event| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                ConversationsMsg::TopicChanged(input.value())
                            })}
                        />
                    </div>
                    <div class="input-group mb-2">
                        <label class="input-group-text" for="description">{ "Description" }</label>
                        <textarea
                            class="form-control"
                            id="description"
                            value={self.description.clone()}
                            onchange={ctx.link().callback(|e: web_sys::Event| {
                                let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                                ConversationsMsg::DescriptionChanged(input.value())
                            })}
                        >
                        </textarea>
                    </div>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled={self.creating}
                        onclick={ctx.link().callback(|e: MouseEvent| {
                            e.prevent_default();
                            ConversationsMsg::CreateClicked
                        })}
                    >
                        { "Create conversation" }
                    </button>
                </form>

                <div class="btn-group mb-3" role="group">
                    { for filter_buttons }
                </div>

                <ul class="list-group">
                    { for rows }
                </ul>
            </div>
        }
    }
}
