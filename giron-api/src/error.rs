use anyhow::{anyhow, Context};
use serde_json::json;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already used {0}")]
    EmailAlreadyUsed(String),

    #[error("Invalid or expired token")]
    BadToken,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),
}

impl Error {
    /// True for the category of errors that must flip the auth gate.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Error::Unauthorized | Error::PermissionDenied)
    }

    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::PermissionDenied => StatusCode::FORBIDDEN,
            Error::InvalidCredentials => StatusCode::FORBIDDEN,
            Error::EmailAlreadyUsed(_) => StatusCode::CONFLICT,
            Error::BadToken => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::NullByteInString(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::Unauthorized => json!({
                "message": "authentication required",
                "type": "unauthorized",
            }),
            Error::PermissionDenied => json!({
                "message": "permission denied",
                "type": "permission-denied",
            }),
            Error::InvalidCredentials => json!({
                "message": "invalid email or password",
                "type": "invalid-credentials",
            }),
            Error::EmailAlreadyUsed(email) => json!({
                "message": "email already used",
                "type": "conflict-email",
                "email": email,
            }),
            Error::BadToken => json!({
                "message": "invalid or expired token",
                "type": "bad-token",
            }),
            Error::NotFound(what) => json!({
                "message": "not found",
                "type": "not-found",
                "what": what,
            }),
            Error::NullByteInString(s) => json!({
                "message": "there was a null byte in argument string",
                "type": "null-byte",
                "string": s,
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "unauthorized" => Error::Unauthorized,
                "permission-denied" => Error::PermissionDenied,
                "invalid-credentials" => Error::InvalidCredentials,
                "conflict-email" => Error::EmailAlreadyUsed(String::from(
                    data.get("email")
                        .and_then(|e| e.as_str())
                        .ok_or_else(|| anyhow!("error is an email conflict without an email"))?,
                )),
                "bad-token" => Error::BadToken,
                "not-found" => Error::NotFound(String::from(
                    data.get("what")
                        .and_then(|w| w.as_str())
                        .ok_or_else(|| anyhow!("error is a not-found without a subject"))?,
                )),
                "null-byte" => Error::NullByteInString(String::from(
                    data.get("string").and_then(|s| s.as_str()).ok_or_else(|| {
                        anyhow!("error is a null-byte-in-string without a string")
                    })?,
                )),
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_roundtrip_through_their_json_contents() {
        let errors = vec![
            Error::Unknown(String::from("boom")),
            Error::Unauthorized,
            Error::PermissionDenied,
            Error::InvalidCredentials,
            Error::EmailAlreadyUsed(String::from("a@example.org")),
            Error::BadToken,
            Error::NotFound(String::from("conversation abc")),
            Error::NullByteInString(String::from("a\0b")),
        ];
        for e in errors {
            assert_eq!(Error::parse(&e.contents()).unwrap(), e);
        }
    }

    #[test]
    fn auth_failures_are_the_gate_driving_ones() {
        assert!(Error::Unauthorized.is_auth_failure());
        assert!(Error::PermissionDenied.is_auth_failure());
        assert!(!Error::InvalidCredentials.is_auth_failure());
        assert!(!Error::Unknown(String::new()).is_auth_failure());
    }
}
