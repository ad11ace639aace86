use yew::prelude::*;

use giron_client::{
    api::{Comment, CommentId, CommentsQuery, ConversationId, ModStatus, NewComment,
        NewCommentResponse},
    SurveyDb,
};

use crate::{api, ui, Session};

#[derive(Clone, PartialEq, Properties)]
pub struct SurveyProps {
    pub session: Session,
    pub id: ConversationId,
    pub on_auth_rejected: Callback<()>,
}

pub struct Survey {
    /// None until both initial fetches completed
    db: Option<SurveyDb>,
    error: Option<String>,
    draft: String,
    submitting: bool,
    submit_error: Option<String>,
}

pub enum SurveyMsg {
    Received(Result<(Vec<Comment>, Vec<Comment>), api::ApiError>),
    Voted(CommentId),
    DraftChanged(String),
    SubmitClicked,
    Submitted(String, Result<NewCommentResponse, api::ApiError>),
}

impl Component for Survey {
    type Message = SurveyMsg;
    type Properties = SurveyProps;

    fn create(ctx: &Context<Self>) -> Self {
        let session = ctx.props().session.clone();
        let id = ctx.props().id.clone();
        ctx.link().send_future(async move {
            // the two fetches may complete in any order, but both must be in
            // before partitioning
            let unvoted = api::fetch_comments(&session, &CommentsQuery::unvoted_of(id.clone()));
            let all = api::fetch_comments(&session, &CommentsQuery::all_of(id));
            let (unvoted, all) = futures::join!(unvoted, all);
            SurveyMsg::Received(unvoted.and_then(|unvoted| all.map(|all| (unvoted, all))))
        });
        Self {
            db: None,
            error: None,
            draft: String::new(),
            submitting: false,
            submit_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SurveyMsg::Received(Ok((unvoted, all))) => {
                self.db = Some(SurveyDb::from_fetches(
                    ctx.props().id.clone(),
                    unvoted,
                    all,
                ));
            }
            SurveyMsg::Received(Err(api::ApiError::Unauthorized)) => {
                ctx.props().on_auth_rejected.emit(());
            }
            SurveyMsg::Received(Err(e)) => {
                // both collections stay empty
                self.db = Some(SurveyDb::stub(ctx.props().id.clone()));
                self.error = Some(e.to_string());
            }
            SurveyMsg::Voted(tid) => {
                if let Some(db) = &mut self.db {
                    db.record_vote(tid);
                }
            }
            SurveyMsg::DraftChanged(d) => self.draft = d,
            SurveyMsg::SubmitClicked => {
                if self.submitting || self.draft.trim().is_empty() {
                    return false;
                }
                self.submitting = true;
                self.submit_error = None;
                let comment = NewComment::new(ctx.props().id.clone(), &self.draft, false);
                let txt = comment.txt.clone();
                let session = ctx.props().session.clone();
                ctx.link().send_future(async move {
                    SurveyMsg::Submitted(txt, api::submit_comment(&session, &comment).await)
                });
            }
            SurveyMsg::Submitted(txt, Ok(resp)) => {
                self.submitting = false;
                self.draft.clear();
                if let Some(db) = &mut self.db {
                    db.push_own(Comment {
                        tid: resp.tid,
                        txt,
                        pid: resp.current_pid,
                        is_seed: false,
                        is_meta: false,
                        moderation: ModStatus::Unmoderated,
                        created: None,
                        quote_src_url: None,
                        lang: None,
                    });
                }
            }
            SurveyMsg::Submitted(_, Err(api::ApiError::Unauthorized)) => {
                self.submitting = false;
                ctx.props().on_auth_rejected.emit(());
            }
            SurveyMsg::Submitted(_, Err(e)) => {
                self.submitting = false;
                self.submit_error = Some(e.to_string());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let db = match &self.db {
            None => return html! { <ui::Loading /> },
            Some(db) => db,
        };

        let cards = db.unvoted.iter().map(|c| {
            html! {
                <ui::CommentCard
                    key={c.tid.0}
                    session={ctx.props().session.clone()}
                    conversation_id={ctx.props().id.clone()}
                    comment={c.clone()}
                    on_voted={ctx.link().callback(SurveyMsg::Voted)}
                    on_auth_rejected={ctx.props().on_auth_rejected.clone()}
                />
            }
        });

        let voted = db.voted.iter().map(|c| {
            html! {
                <li class="list-group-item" key={c.tid.0}>
                    { &c.txt }
                    { for c.is_seed.then(|| html! {
                        <span class="badge bg-info ms-2">{ "seed" }</span>
                    }) }
                </li>
            }
        });

        html! {
            <div class="container my-4">
                { for self.error.as_ref().map(|e| html! { <ui::ErrorAlert message={e.clone()} /> }) }

                <h2>{ "Share your view" }</h2>
                <form class="mb-4">
                    { for self.submit_error.as_ref().map(|e| html! {
                        <ui::ErrorAlert message={e.clone()} />
                    }) }
                    <textarea
                        class="form-control mb-2"
                        placeholder="Write a short statement others can vote on"
                        value={self.draft.clone()}
                        onchange={ctx.link().callback(|e: web_sys::Event| {
                            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                            SurveyMsg::DraftChanged(input.value())
                        })}
                    >
                    </textarea>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled={self.submitting}
                        onclick={ctx.link().callback(|e: MouseEvent| {
                            e.prevent_default();
                            SurveyMsg::SubmitClicked
                        })}
                    >
                        { "Submit comment" }
                    </button>
                </form>

                <h2>{ "To vote on" }</h2>
                { for (db.unvoted.is_empty() && self.error.is_none()).then(|| html! {
                    <p class="text-muted">{ "Nothing left to vote on, thanks!" }</p>
                }) }
                { for cards }

                <h2 class="mt-4">{ "Already voted on" }</h2>
                <ul class="list-group">
                    { for voted }
                </ul>
            </div>
        }
    }
}
