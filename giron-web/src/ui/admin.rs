use std::sync::Arc;

use yew::prelude::*;

use giron_client::{
    api::{
        Comment, CommentId, CommentsQuery, Conversation, ConversationId, ModComment, ModStats,
        ModStatus, ModVerdict, NewComment, NewCommentResponse, User,
    },
    can_administer, moderation_queue, seed_comments,
};

use crate::{api, ui, Session};

#[derive(Clone, PartialEq, Properties)]
pub struct AdminProps {
    pub session: Session,
    pub user: User,
    pub id: ConversationId,
    pub on_auth_rejected: Callback<()>,
}

pub struct Admin {
    convo: Option<Conversation>,
    denied: bool,
    stats: Option<ModStats>,
    comments: Option<Vec<Arc<Comment>>>,
    seed_text: String,
    seeding: bool,
    error: Option<String>,
}

pub enum AdminMsg {
    ReceivedConvo(Result<Conversation, api::ApiError>),
    ReceivedStats(Result<ModStats, api::ApiError>),
    ReceivedComments(Result<Vec<Comment>, api::ApiError>),
    SeedChanged(String),
    SeedClicked,
    Seeded(String, Result<NewCommentResponse, api::ApiError>),
    Moderate(CommentId, ModVerdict),
    Moderated(CommentId, ModVerdict, Result<(), api::ApiError>),
}

impl Component for Admin {
    type Message = AdminMsg;
    type Properties = AdminProps;

    fn create(ctx: &Context<Self>) -> Self {
        let session = ctx.props().session.clone();
        let id = ctx.props().id.clone();
        ctx.link().send_future(async move {
            AdminMsg::ReceivedConvo(api::fetch_conversation(&session, &id).await)
        });
        Self {
            convo: None,
            denied: false,
            stats: None,
            comments: None,
            seed_text: String::new(),
            seeding: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AdminMsg::ReceivedConvo(Ok(convo)) => {
                // only fetch moderation data once the permission check passed
                match can_administer(&ctx.props().user, &convo) {
                    false => self.denied = true,
                    true => {
                        let session = ctx.props().session.clone();
                        let id = ctx.props().id.clone();
                        ctx.link().send_future(async move {
                            AdminMsg::ReceivedStats(api::fetch_modstats(&session, &id).await)
                        });
                        let session = ctx.props().session.clone();
                        let id = ctx.props().id.clone();
                        ctx.link().send_future(async move {
                            AdminMsg::ReceivedComments(
                                api::fetch_comments(&session, &CommentsQuery::moderation_of(id))
                                    .await,
                            )
                        });
                    }
                }
                self.convo = Some(convo);
            }
            AdminMsg::ReceivedConvo(Err(e)) => self.fetch_failed(ctx, e),
            AdminMsg::ReceivedStats(Ok(stats)) => self.stats = Some(stats),
            AdminMsg::ReceivedStats(Err(e)) => self.fetch_failed(ctx, e),
            AdminMsg::ReceivedComments(Ok(comments)) => {
                self.comments = Some(comments.into_iter().map(Arc::new).collect());
            }
            AdminMsg::ReceivedComments(Err(e)) => self.fetch_failed(ctx, e),
            AdminMsg::SeedChanged(t) => self.seed_text = t,
            AdminMsg::SeedClicked => {
                if self.seeding || self.seed_text.trim().is_empty() {
                    return false;
                }
                self.seeding = true;
                self.error = None;
                let comment = NewComment::new(ctx.props().id.clone(), &self.seed_text, true);
                let txt = comment.txt.clone();
                let session = ctx.props().session.clone();
                ctx.link().send_future(async move {
                    AdminMsg::Seeded(txt, api::submit_comment(&session, &comment).await)
                });
            }
            AdminMsg::Seeded(txt, Ok(resp)) => {
                self.seeding = false;
                self.seed_text.clear();
                if let Some(comments) = &mut self.comments {
                    comments.insert(
                        0,
                        Arc::new(Comment {
                            tid: resp.tid,
                            txt,
                            pid: resp.current_pid,
                            is_seed: true,
                            is_meta: false,
                            // seeds skip moderation
                            moderation: ModStatus::Accepted,
                            created: None,
                            quote_src_url: None,
                            lang: None,
                        }),
                    );
                }
                if let Some(stats) = &mut self.stats {
                    stats.record_seed();
                }
            }
            AdminMsg::Seeded(_, Err(e)) => {
                self.seeding = false;
                self.fetch_failed(ctx, e);
            }
            AdminMsg::Moderate(tid, verdict) => {
                let session = ctx.props().session.clone();
                let m = ModComment {
                    conversation_id: ctx.props().id.clone(),
                    tid,
                    verdict,
                };
                ctx.link().send_future(async move {
                    AdminMsg::Moderated(tid, verdict, api::moderate(&session, &m).await)
                });
            }
            AdminMsg::Moderated(tid, verdict, Ok(())) => {
                if let Some(comments) = &mut self.comments {
                    if let Some(c) = comments.iter_mut().find(|c| c.tid == tid) {
                        Arc::make_mut(c).moderation = match verdict {
                            ModVerdict::Accept => ModStatus::Accepted,
                            ModVerdict::Reject => ModStatus::Rejected,
                        };
                    }
                }
                if let Some(stats) = &mut self.stats {
                    stats.record_verdict(verdict);
                }
            }
            AdminMsg::Moderated(_, _, Err(e)) => self.fetch_failed(ctx, e),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.denied {
            return html! {
                <div class="container my-4">
                    <ui::ErrorAlert
                        message={String::from("Only this conversation's owner can moderate it")}
                    />
                </div>
            };
        }
        let convo = match &self.convo {
            None => return html! { <ui::Loading /> },
            Some(convo) => convo,
        };

        html! {
            <div class="container my-4">
                <h1>{ &convo.topic }</h1>
                <p class="text-muted">{ &convo.description }</p>

                { for self.error.as_ref().map(|e| html! { <ui::ErrorAlert message={e.clone()} /> }) }

                <h2>{ "Statistics" }</h2>
                { self.stats_table() }

                <h2 class="mt-4">{ "Seed comments" }</h2>
                <form class="mb-3">
                    <textarea
                        class="form-control mb-2"
                        placeholder="Seed a statement to get the discussion going"
                        value={self.seed_text.clone()}
                        onchange={ctx.link().callback(|e: web_sys::Event| {
                            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                            AdminMsg::SeedChanged(input.value())
                        })}
                    >
                    </textarea>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled={self.seeding}
                        onclick={ctx.link().callback(|e: MouseEvent| {
                            e.prevent_default();
                            AdminMsg::SeedClicked
                        })}
                    >
                        { "Seed comment" }
                    </button>
                </form>
                { self.seed_list() }

                <h2 class="mt-4">{ "Awaiting moderation" }</h2>
                { self.queue(ctx) }
            </div>
        }
    }
}

impl Admin {
    /// 401/403 flips the gate; anything else is shown inline
    fn fetch_failed(&mut self, ctx: &Context<Self>, e: api::ApiError) {
        match e {
            api::ApiError::Unauthorized => ctx.props().on_auth_rejected.emit(()),
            e => self.error = Some(e.to_string()),
        }
    }

    fn stats_table(&self) -> Html {
        let stats = match &self.stats {
            None => return html! { <ui::Loading /> },
            Some(stats) => stats,
        };
        let row = |label: &str, count: i64| {
            html! {
                <tr>
                    <th scope="row">{ label }</th>
                    <td>{ count }</td>
                </tr>
            }
        };
        html! {
            <table class="table w-auto">
                <tbody>
                    { row("Participants", stats.participant_count) }
                    { row("Accepted comments", stats.comments_accepted) }
                    { row("Rejected comments", stats.comments_rejected) }
                    { row("Awaiting moderation", stats.comments_unmoderated) }
                </tbody>
            </table>
        }
    }

    fn seed_list(&self) -> Html {
        let comments = match &self.comments {
            None => return html! { <ui::Loading /> },
            Some(comments) => comments,
        };
        let seeds = seed_comments(comments);
        if seeds.is_empty() {
            return html! { <p class="text-muted">{ "No seed comments yet" }</p> };
        }
        html! {
            <ul class="list-group">
                { for seeds.iter().map(|c| html! {
                    <li class="list-group-item" key={c.tid.0}>{ &c.txt }</li>
                }) }
            </ul>
        }
    }

    fn queue(&self, ctx: &Context<Self>) -> Html {
        let comments = match &self.comments {
            None => return html! { <ui::Loading /> },
            Some(comments) => comments,
        };
        let queue = moderation_queue(comments);
        if queue.is_empty() {
            return html! { <p class="text-muted">{ "Nothing awaiting moderation" }</p> };
        }
        html! {
            <ul class="list-group">
                { for queue.iter().map(|c| {
                    let tid = c.tid;
                    html! {
                        <li class="list-group-item d-flex align-items-center" key={tid.0}>
                            <span class="flex-grow-1">{ &c.txt }</span>
                            <button
                                type="button"
                                class="btn btn-sm btn-outline-success me-2"
                                onclick={ctx.link().callback(move |_| {
                                    AdminMsg::Moderate(tid, ModVerdict::Accept)
                                })}
                            >
                                { "Accept" }
                            </button>
                            <button
                                type="button"
                                class="btn btn-sm btn-outline-danger"
                                onclick={ctx.link().callback(move |_| {
                                    AdminMsg::Moderate(tid, ModVerdict::Reject)
                                })}
                            >
                                { "Reject" }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        }
    }
}
