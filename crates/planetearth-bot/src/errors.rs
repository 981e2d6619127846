//! Discord-side error handling for the bot.
//!
//! Collapses serenity errors into the two outcomes the pipelines act on:
//! the bot was not allowed to do something, or the call failed for another
//! reason. Neither is ever fatal.

use serenity::http::HttpError;
use serenity::model::ModelError;
use thiserror::Error;
use tracing::{error, warn};

/// Discord code 50001: missing access
const MISSING_ACCESS: isize = 50001;
/// Discord code 50013: missing permissions
const MISSING_PERMISSIONS: isize = 50013;

/// Failure of a chat-platform side effect (nickname, role, message).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
impl ActionError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}

/// Classify a serenity `Error`.
pub fn classify(err: &serenity::Error) -> ActionError {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(resp)) => {
            let status = resp.status_code.as_u16();
            let code = resp.error.code;
            if is_permission_failure(status, code) {
                ActionError::PermissionDenied(format!(
                    "HTTP {} / code {}: {}",
                    status, code, resp.error.message
                ))
            } else {
                ActionError::Other(format!(
                    "HTTP {} / code {}: {}",
                    status, code, resp.error.message
                ))
            }
        }
        // Local checks serenity runs before issuing the request
        serenity::Error::Model(ModelError::InvalidPermissions { .. } | ModelError::Hierarchy) => {
            ActionError::PermissionDenied(err.to_string())
        }
        _ => ActionError::Other(err.to_string()),
    }
}

fn is_permission_failure(http_status: u16, discord_code: isize) -> bool {
    http_status == 403 || matches!(discord_code, MISSING_ACCESS | MISSING_PERMISSIONS)
}

/// Log a serenity error at the appropriate level.
///
/// - Permission failures → `warn!` (an operator can fix these)
/// - Everything else → `error!`
pub fn log_error(context: &str, err: &serenity::Error) {
    log_action_error(context, &classify(err));
}

pub fn log_action_error(context: &str, err: &ActionError) {
    match err {
        ActionError::PermissionDenied(msg) => warn!("{}: permission denied ({})", context, msg),
        ActionError::Other(msg) => error!("{}: {}", context, msg),
    }
}
