use chrono::Utc;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

mod auth;
pub use auth::{AuthResponse, AuthToken, Credentials, NewUser, PwReset, PwResetRequest};

mod comment;
pub use comment::{
    Comment, CommentId, CommentsQuery, ModComment, ModStatus, NewComment, NewCommentResponse,
};

mod conversation;
pub use conversation::{Conversation, ConversationId, NewConversation};

mod error;
pub use error::Error;

mod moderation;
pub use moderation::{ModStats, ModVerdict};

mod user;
pub use user::{ParticipantId, Pid, User, UserId};

mod vote;
pub use vote::{Vote, VoteSign, DEFAULT_AGID};

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

/// Checks that user-provided text is safe to submit
pub fn validate_string(s: &str) -> Result<(), Error> {
    match s.contains('\0') {
        true => Err(Error::NullByteInString(s.to_string())),
        false => Ok(()),
    }
}
