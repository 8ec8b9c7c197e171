//! Session persistence in `localStorage`.
//!
//! Login itself belongs to the platform's auth pages; the dashboard only
//! restores what they stored, and removes it again on logout.

use mailblast_core::session::{ACCESS_TOKEN_KEY, STORAGE_KEYS, USER_KEY};
use mailblast_core::Session;
use web_sys::Storage;

use crate::{AppError, AppResult};

fn local_storage() -> AppResult<Storage> {
    web_sys::window()
        .ok_or_else(|| AppError::Browser("no window".into()))?
        .local_storage()
        .map_err(|e| AppError::Browser(format!("{:?}", e)))?
        .ok_or_else(|| AppError::Browser("localStorage unavailable".into()))
}

/// Restore the session written by the last login, if any.
pub fn load_session() -> Option<Session> {
    let storage = match local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("🔒 {}", e);
            return None;
        }
    };

    let user = storage.get_item(USER_KEY).ok().flatten();
    let token = storage.get_item(ACCESS_TOKEN_KEY).ok().flatten();

    match Session::restore(user.as_deref(), token.as_deref()) {
        Ok(session) => {
            log::info!("🔓 Signed in as {} ({})", session.user.email, session.role.as_str());
            Some(session)
        }
        Err(e) => {
            log::info!("🔒 No session: {}", e);
            None
        }
    }
}

/// Remove every key a login writes.
pub fn clear_session() {
    match local_storage() {
        Ok(storage) => {
            for key in STORAGE_KEYS {
                let _ = storage.remove_item(key);
            }
            log::info!("🔒 Signed out");
        }
        Err(e) => log::warn!("🔒 {}", e),
    }
}
