use gloo_storage::{LocalStorage, Storage};

use giron_client::api::{AuthToken, UserId};

const KEY_SESSION: &str = "session";

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Session {
    pub host: String,
    pub uid: UserId,
    pub token: AuthToken,
}

impl Session {
    pub fn load() -> Option<Session> {
        LocalStorage::get(KEY_SESSION).ok()
    }

    pub fn save(&self) {
        LocalStorage::set(KEY_SESSION, self).expect("failed saving session to LocalStorage");
    }

    pub fn clear() {
        LocalStorage::delete(KEY_SESSION);
    }
}
