use actix_session::Session;

use crate::auth::accounts::UserRole;
use crate::errors::AppError;

const ROLE_KEY: &str = "role";

pub fn set_role(session: &Session, role: &UserRole) -> Result<(), AppError> {
    session
        .insert(ROLE_KEY, role.id())
        .map_err(|e| AppError::Session(format!("Failed to store role: {e}")))
}

pub fn get_role(session: &Session) -> Option<UserRole> {
    session
        .get::<String>(ROLE_KEY)
        .unwrap_or(None)
        .and_then(|id| UserRole::from_account_id(&id))
}

/// Role of the logged-in account, or `AppError::Session`.
pub fn require_role(session: &Session) -> Result<UserRole, AppError> {
    get_role(session).ok_or_else(|| AppError::Session("Not authenticated".to_string()))
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
