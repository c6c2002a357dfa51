//! Authentication types and session management.
//!
//! All API calls flow through a [`Session`]. [`authenticate`] builds one from
//! a [`Config`](crate::Config) and validates it with an identity probe.

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::{Identity, Session};
pub use tokens::AccessToken;

use tracing::{info, instrument};

use crate::config::Config;
use crate::error::Error;

/// Build a session from configuration and prove it works.
///
/// Missing configuration values are reported here rather than when the
/// configuration was read. The identity probe forces the password grant, so
/// bad credentials fail now instead of on the first listing request.
///
/// # Errors
///
/// Returns the first failure; use [`Error::kind`] to classify it.
#[instrument(skip(config))]
pub async fn authenticate(config: &Config) -> Result<(Session, Identity), Error> {
    let credentials = config.credentials()?;
    let (auth, api) = config.endpoints()?;
    let user_agent = config.user_agent()?;

    let session = Session::new(credentials, auth, api, user_agent)?;
    let identity = session.me().await?;

    info!(user = %identity.name, "Authenticated");
    Ok((session, identity))
}
