use std::sync::Arc;

use yew::prelude::*;

use giron_client::api::{Comment, CommentId, ConversationId, Vote, VoteSign};

use crate::{api, ui, Session};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentCardProps {
    pub session: Session,
    pub conversation_id: ConversationId,
    pub comment: Arc<Comment>,
    pub on_voted: Callback<CommentId>,
    pub on_auth_rejected: Callback<()>,
}

pub struct CommentCard {
    voting: bool,
    error: Option<String>,
}

pub enum CommentCardMsg {
    Cast(VoteSign),
    Done(Result<(), api::ApiError>),
}

impl Component for CommentCard {
    type Message = CommentCardMsg;
    type Properties = CommentCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            voting: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentCardMsg::Cast(sign) => {
                // set before the request is spawned, so a second click on
                // this card cannot submit a second vote
                if self.voting {
                    return false;
                }
                self.voting = true;
                self.error = None;
                let session = ctx.props().session.clone();
                let vote = Vote::new(
                    ctx.props().conversation_id.clone(),
                    ctx.props().comment.tid,
                    sign,
                );
                ctx.link().send_future(async move {
                    CommentCardMsg::Done(api::submit_vote(&session, &vote).await)
                });
            }
            CommentCardMsg::Done(result) => {
                // cleared regardless of outcome
                self.voting = false;
                match result {
                    Ok(()) => ctx.props().on_voted.emit(ctx.props().comment.tid),
                    Err(api::ApiError::Unauthorized) => ctx.props().on_auth_rejected.emit(()),
                    Err(e) => self.error = Some(e.to_string()),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let comment = &ctx.props().comment;
        let buttons = [VoteSign::Agree, VoteSign::Disagree, VoteSign::Pass]
            .into_iter()
            .map(|sign| {
                html! {
                    <button
                        type="button"
                        class="btn btn-outline-primary me-2"
                        disabled={self.voting}
                        onclick={ctx.link().callback(move |_| CommentCardMsg::Cast(sign))}
                    >
                        { sign.label() }
                    </button>
                }
            });
        html! {
            <div class="card mb-3">
                <div class="card-body">
                    <p class="card-text">{ &comment.txt }</p>
                    { for comment.quote_src_url.as_ref().map(|url| html! {
                        <p><small><a href={url.clone()}>{ "source" }</a></small></p>
                    }) }
                    { for self.error.as_ref().map(|e| html! {
                        <ui::ErrorAlert message={e.clone()} />
                    }) }
                    <div>
                        { for buttons }
                    </div>
                </div>
            </div>
        }
    }
}
