// src/auth/guard.rs
use crate::api::{ApiError, User};
use crate::app::App;
use crate::auth::session::session_token;
use crate::errors::ServerError;
use astra::Request;

/// A signed-in user together with the token used to fetch them.
pub struct CurrentUser {
    pub user: User,
    pub token: String,
}

/// Fetch the current user, or fail with `LoginRequired`.
pub fn require_user(req: &Request, app: &App) -> Result<CurrentUser, ServerError> {
    let token = session_token(req).ok_or(ServerError::LoginRequired)?;

    match app.api.current_user(&token) {
        Ok(user) => Ok(CurrentUser { user, token }),
        // Undecodable profiles (e.g. an unknown role) are treated as signed out.
        Err(ApiError::Decode(msg)) => {
            log::warn!("could not decode current user: {msg}");
            Err(ServerError::LoginRequired)
        }
        Err(e) => Err(e.into()),
    }
}

/// Like `require_user`, but a missing session is not an error.
pub fn optional_user(req: &Request, app: &App) -> Option<CurrentUser> {
    match require_user(req, app) {
        Ok(cu) => Some(cu),
        Err(ServerError::LoginRequired) => None,
        Err(e) => {
            log::warn!("optional user lookup failed: {e}");
            None
        }
    }
}
