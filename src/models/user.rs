use serde::{Deserialize, Serialize};

/// Sessions older than this are reported as expired.
pub const SESSION_TTL_MILLIS: i64 = 30 * 60 * 1000;

/// Account data as returned inside the auth responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Persisted login session (`user_session` prefs namespace).
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user_name: String,
    pub user_email: String,
    pub login_time: i64, // epoch millis
}

impl Session {
    /// A session is fresh for SESSION_TTL_MILLIS after login.
    pub fn is_fresh(&self, now_millis: i64) -> bool {
        !self.access_token.is_empty() && now_millis - self.login_time < SESSION_TTL_MILLIS
    }
}
