use uuid::Uuid;

use crate::{Error, User, STUB_UUID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AuthToken(pub Uuid);

impl AuthToken {
    pub fn stub() -> AuthToken {
        AuthToken(STUB_UUID)
    }
}

/// Body of `POST api/v3/auth/login`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.email)?;
        crate::validate_string(&self.password)?;
        Ok(())
    }
}

/// Body of `POST api/v3/auth/new`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct NewUser {
    pub hname: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.hname)?;
        crate::validate_string(&self.email)?;
        crate::validate_string(&self.password)?;
        Ok(())
    }
}

/// Body of `POST api/v3/auth/pwresettoken`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct PwResetRequest {
    pub email: String,
}

/// Body of `POST api/v3/auth/password`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct PwReset {
    pub pwresettoken: String,
    pub new_password: String,
}

impl PwReset {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.pwresettoken)?;
        crate::validate_string(&self.new_password)?;
        Ok(())
    }
}

/// Returned by both login and registration
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct AuthResponse {
    pub token: AuthToken,
    pub user: User,
}
