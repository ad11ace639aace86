use crate::{Error, Time, UserId};

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ConversationId(pub String);

impl ConversationId {
    pub fn stub() -> ConversationId {
        ConversationId(String::from("0000000000"))
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One discussion/survey instance. Read-only from this front-end's point of
/// view once created.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Conversation {
    pub conversation_id: ConversationId,
    pub topic: String,
    pub description: String,
    pub owner: UserId,

    pub participant_count: i64,

    pub is_active: bool,
    pub is_draft: bool,

    /// Page this conversation is embedded on, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Time>,
}

/// Body of `POST api/v3/conversations`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct NewConversation {
    pub topic: String,
    pub description: String,
    pub is_active: bool,
    pub is_draft: bool,
}

impl NewConversation {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.topic)?;
        crate::validate_string(&self.description)?;
        Ok(())
    }
}
