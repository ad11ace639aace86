use crate::{ConversationId, Error, ParticipantId, Pid, Time, VoteSign, DEFAULT_AGID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub i64);

/// Moderation state of a comment, as decided server-side.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModStatus {
    #[default]
    Unmoderated,
    Accepted,
    Rejected,
}

/// One statement participants can react to. Immutable once fetched: the
/// survey view only ever moves it between its collections.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub tid: CommentId,
    pub txt: String,

    /// Participant who authored this comment
    pub pid: ParticipantId,

    pub is_seed: bool,
    pub is_meta: bool,

    #[serde(default)]
    pub moderation: ModStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_src_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// Query string of `GET api/v3/comments`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct CommentsQuery {
    pub conversation_id: ConversationId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_voted_by_pid: Option<Pid>,

    /// When true, also return comments a participant would not see
    /// (rejected ones), for the moderation console.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub moderation: bool,

    #[serde(
        rename = "lastServerToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_server_token: Option<String>,
}

impl CommentsQuery {
    pub fn all_of(conversation_id: ConversationId) -> CommentsQuery {
        CommentsQuery {
            conversation_id,
            not_voted_by_pid: None,
            moderation: false,
            last_server_token: None,
        }
    }

    pub fn unvoted_of(conversation_id: ConversationId) -> CommentsQuery {
        CommentsQuery {
            conversation_id,
            not_voted_by_pid: Some(Pid::Mine),
            moderation: false,
            last_server_token: None,
        }
    }

    pub fn moderation_of(conversation_id: ConversationId) -> CommentsQuery {
        CommentsQuery {
            conversation_id,
            not_voted_by_pid: None,
            moderation: true,
            last_server_token: None,
        }
    }
}

/// Body of `POST api/v3/comments`. Submitting a comment also casts the
/// author's implicit agree vote on it.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub conversation_id: ConversationId,
    pub pid: Pid,
    pub txt: String,
    pub vote: VoteSign,
    pub agid: i64,
    pub is_seed: bool,
}

impl NewComment {
    /// Builds a submission body, collapsing newlines so a comment is always
    /// a single line of text.
    pub fn new(conversation_id: ConversationId, txt: &str, is_seed: bool) -> NewComment {
        NewComment {
            conversation_id,
            pid: Pid::Mine,
            txt: txt.replace('\n', " "),
            vote: VoteSign::Agree,
            agid: DEFAULT_AGID,
            is_seed,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.txt)
    }
}

/// Response of `POST api/v3/comments`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct NewCommentResponse {
    pub tid: CommentId,
    #[serde(rename = "currentPid")]
    pub current_pid: ParticipantId,
}

/// Body of `PUT api/v3/comments` (moderation verdict)
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct ModComment {
    pub conversation_id: ConversationId,
    pub tid: CommentId,
    pub verdict: crate::ModVerdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_comment_collapses_newlines() {
        let c = NewComment::new(ConversationId::stub(), "line1\nline2", false);
        assert_eq!(c.txt, "line1 line2");
        let c = NewComment::new(ConversationId::stub(), "a\n\nb", false);
        assert_eq!(c.txt, "a  b");
    }

    #[test]
    fn comments_query_serializes_to_the_documented_params() {
        let q = CommentsQuery {
            conversation_id: ConversationId(String::from("abc")),
            not_voted_by_pid: Some(Pid::Mine),
            moderation: false,
            last_server_token: Some(String::from("tok")),
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["conversation_id"], "abc");
        assert_eq!(json["not_voted_by_pid"], "mypid");
        assert_eq!(json["lastServerToken"], "tok");
        assert!(json.get("moderation").is_none());
    }

    #[test]
    fn moderation_state_defaults_to_unmoderated() {
        let c: Comment = serde_json::from_value(serde_json::json!({
            "tid": 1,
            "txt": "hello",
            "pid": 7,
            "is_seed": false,
            "is_meta": false,
        }))
        .unwrap();
        assert_eq!(c.moderation, ModStatus::Unmoderated);
        assert_eq!(c.created, None);
    }
}
