//! Persisted login session (`user_session` prefs namespace).

use crate::db::prefs::{self, NS_SESSION};
use crate::errors::AppResult;
use crate::models::user::{Session, User};
use crate::utils::time::now_millis;
use rusqlite::Connection;

pub const KEY_TOKEN: &str = "access_token";
pub const KEY_USER_NAME: &str = "user_name";
pub const KEY_USER_EMAIL: &str = "user_email";
pub const KEY_LOGIN_TIME: &str = "login_time";

/// Store the token and user identity after a successful login/register.
pub fn save(conn: &Connection, token: &str, user: &User) -> AppResult<()> {
    prefs::set(conn, NS_SESSION, KEY_TOKEN, token)?;
    prefs::set(conn, NS_SESSION, KEY_USER_NAME, &user.name)?;
    prefs::set(conn, NS_SESSION, KEY_USER_EMAIL, &user.email)?;
    prefs::set_millis(conn, NS_SESSION, KEY_LOGIN_TIME, now_millis())?;
    Ok(())
}

/// Load the stored session, if any. A missing token means no session,
/// even if stray keys are left in the namespace.
pub fn load(conn: &Connection) -> AppResult<Option<Session>> {
    let Some(access_token) = prefs::get(conn, NS_SESSION, KEY_TOKEN)? else {
        return Ok(None);
    };

    Ok(Some(Session {
        access_token,
        user_name: prefs::get(conn, NS_SESSION, KEY_USER_NAME)?.unwrap_or_default(),
        user_email: prefs::get(conn, NS_SESSION, KEY_USER_EMAIL)?.unwrap_or_default(),
        login_time: prefs::get_millis(conn, NS_SESSION, KEY_LOGIN_TIME)?.unwrap_or(0),
    }))
}

pub fn clear(conn: &Connection) -> AppResult<()> {
    prefs::clear_namespace(conn, NS_SESSION)
}
