use giron_client::api::{
    self, AuthResponse, Comment, CommentsQuery, Conversation, ConversationId, Credentials,
    ModComment, ModStats, NewComment, NewCommentResponse, NewConversation, NewUser, PwReset,
    PwResetRequest, User, Vote,
};

use crate::Session;

/// Failures of an API call, split by what the caller must do about them:
/// only `Unauthorized` flips the auth gate.
#[derive(Debug)]
pub enum ApiError {
    /// 401/403: the session is not (or no longer) valid
    Unauthorized,
    /// Structured error returned by the backend
    Api(api::Error),
    /// Transport or decoding failure
    Network(anyhow::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "authentication required"),
            ApiError::Api(e) => write!(f, "{}", e),
            ApiError::Network(e) => write!(f, "network error: {}", e),
        }
    }
}

async fn error_of(resp: reqwest::Response) -> ApiError {
    let status = resp.status();
    let body = match resp.bytes().await {
        Ok(body) => body,
        Err(e) => return ApiError::Network(e.into()),
    };
    match api::Error::parse(&body) {
        // InvalidCredentials is also a 403, but it is a form-level error,
        // not a session-level one: let the form display it
        Ok(e) if e.is_auth_failure() => ApiError::Unauthorized,
        Ok(e) => ApiError::Api(e),
        Err(_)
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN =>
        {
            ApiError::Unauthorized
        }
        Err(_) => ApiError::Api(api::Error::Unknown(format!("server returned {}", status))),
    }
}

async fn decode<R>(resp: reqwest::Response) -> Result<R, ApiError>
where
    R: for<'de> serde::Deserialize<'de>,
{
    if !resp.status().is_success() {
        return Err(error_of(resp).await);
    }
    resp.json().await.map_err(|e| ApiError::Network(e.into()))
}

async fn ack(resp: reqwest::Response) -> Result<(), ApiError> {
    if !resp.status().is_success() {
        return Err(error_of(resp).await);
    }
    Ok(())
}

fn send_failed(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.into())
}

pub async fn login(host: &str, c: &Credentials) -> Result<AuthResponse, ApiError> {
    let resp = crate::CLIENT
        .post(format!("{}/api/v3/auth/login", host))
        .json(c)
        .send()
        .await
        .map_err(send_failed)?;
    decode(resp).await
}

pub async fn register(host: &str, u: &NewUser) -> Result<AuthResponse, ApiError> {
    let resp = crate::CLIENT
        .post(format!("{}/api/v3/auth/new", host))
        .json(u)
        .send()
        .await
        .map_err(send_failed)?;
    decode(resp).await
}

pub async fn request_pw_reset(host: &str, r: &PwResetRequest) -> Result<(), ApiError> {
    let resp = crate::CLIENT
        .post(format!("{}/api/v3/auth/pwresettoken", host))
        .json(r)
        .send()
        .await
        .map_err(send_failed)?;
    ack(resp).await
}

pub async fn set_password(host: &str, r: &PwReset) -> Result<(), ApiError> {
    let resp = crate::CLIENT
        .post(format!("{}/api/v3/auth/password", host))
        .json(r)
        .send()
        .await
        .map_err(send_failed)?;
    ack(resp).await
}

/// Best-effort: the session is already gone locally, so failures are only
/// worth a log line.
pub async fn logout(session: &Session) {
    let resp = crate::CLIENT
        .post(format!("{}/api/v3/auth/deregister", session.host))
        .bearer_auth(session.token.0)
        .send()
        .await;
    match resp {
        Err(e) => tracing::error!("failed to deregister session: {:?}", e),
        Ok(resp) if !resp.status().is_success() => {
            tracing::error!("failed to deregister session: response is not success {:?}", resp)
        }
        Ok(_) => (),
    }
}

/// Validates a stored session and returns the account it belongs to
pub async fn whoami(session: &Session) -> Result<User, ApiError> {
    let resp = crate::CLIENT
        .get(format!("{}/api/v3/users", session.host))
        .bearer_auth(session.token.0)
        .send()
        .await
        .map_err(send_failed)?;
    decode(resp).await
}

pub async fn fetch_conversations(session: &Session) -> Result<Vec<Conversation>, ApiError> {
    let resp = crate::CLIENT
        .get(format!("{}/api/v3/conversations", session.host))
        .bearer_auth(session.token.0)
        .send()
        .await
        .map_err(send_failed)?;
    decode(resp).await
}

pub async fn fetch_conversation(
    session: &Session,
    id: &ConversationId,
) -> Result<Conversation, ApiError> {
    let resp = crate::CLIENT
        .get(format!("{}/api/v3/conversations", session.host))
        .query(&[("conversation_id", &id.0)])
        .bearer_auth(session.token.0)
        .send()
        .await
        .map_err(send_failed)?;
    decode(resp).await
}

pub async fn create_conversation(
    session: &Session,
    c: &NewConversation,
) -> Result<Conversation, ApiError> {
    let resp = crate::CLIENT
        .post(format!("{}/api/v3/conversations", session.host))
        .bearer_auth(session.token.0)
        .json(c)
        .send()
        .await
        .map_err(send_failed)?;
    decode(resp).await
}

pub async fn fetch_comments(
    session: &Session,
    q: &CommentsQuery,
) -> Result<Vec<Comment>, ApiError> {
    let resp = crate::CLIENT
        .get(format!("{}/api/v3/comments", session.host))
        .query(q)
        .bearer_auth(session.token.0)
        .send()
        .await
        .map_err(send_failed)?;
    decode(resp).await
}

pub async fn submit_comment(
    session: &Session,
    c: &NewComment,
) -> Result<NewCommentResponse, ApiError> {
    let resp = crate::CLIENT
        .post(format!("{}/api/v3/comments", session.host))
        .bearer_auth(session.token.0)
        .json(c)
        .send()
        .await
        .map_err(send_failed)?;
    decode(resp).await
}

pub async fn submit_vote(session: &Session, v: &Vote) -> Result<(), ApiError> {
    let resp = crate::CLIENT
        .post(format!("{}/api/v3/votes", session.host))
        .bearer_auth(session.token.0)
        .json(v)
        .send()
        .await
        .map_err(send_failed)?;
    ack(resp).await
}

pub async fn fetch_modstats(
    session: &Session,
    id: &ConversationId,
) -> Result<ModStats, ApiError> {
    let resp = crate::CLIENT
        .get(format!("{}/api/v3/modstats", session.host))
        .query(&[("conversation_id", &id.0)])
        .bearer_auth(session.token.0)
        .send()
        .await
        .map_err(send_failed)?;
    decode(resp).await
}

pub async fn moderate(session: &Session, m: &ModComment) -> Result<(), ApiError> {
    let resp = crate::CLIENT
        .put(format!("{}/api/v3/comments", session.host))
        .bearer_auth(session.token.0)
        .json(m)
        .send()
        .await
        .map_err(send_failed)?;
    ack(resp).await
}
