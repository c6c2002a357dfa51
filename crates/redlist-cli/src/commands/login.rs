//! Authentication step.

use tracing::warn;

use redlist::{Config, FailureKind, Session};

use crate::output;

/// Log in with the configured credentials and confirm the account.
///
/// Returns `None` on any failure after reporting it; nothing propagates.
pub async fn authenticate(config: &Config) -> Option<Session> {
    output::progress("Starting authentication...");

    match redlist::authenticate(config).await {
        Ok((session, identity)) => {
            output::success(&format!("User {identity} has logged in"));
            Some(session)
        }
        Err(e) => {
            warn!(error = %e, kind = ?e.kind(), "Authentication failed");
            output::error(&failure_message(&e));
            None
        }
    }
}

/// The user-facing message for an authentication failure.
fn failure_message(err: &redlist::Error) -> String {
    match err.kind() {
        FailureKind::Authentication => {
            "An authentication exception has happened - invalid username or password.".to_string()
        }
        FailureKind::Library => format!("A client library exception has occurred: {err}"),
        FailureKind::Other => format!("An exception has occurred: {err}"),
    }
}
