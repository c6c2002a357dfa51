//! redlist - log in to Reddit and print the newest posts of r/cats.
//!
//! Credentials come from the environment or a `.env` file in the working
//! directory. The process always exits 0; every failure is reported on
//! stdout instead.

mod commands;
mod output;

use std::num::NonZeroU32;

use anyhow::{Result, bail};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use redlist::Config;

/// Forum whose newest posts are printed.
const FORUM: &str = "cats";

/// Number of posts printed.
const POST_LIMIT: NonZeroU32 = NonZeroU32::new(5).unwrap();

/// Set to `1` to emit logs as JSON.
const JSON_LOGS_VAR: &str = "REDLIST_LOG_JSON";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging(std::env::var(JSON_LOGS_VAR).is_ok_and(|v| v == "1"));

    if let Err(e) = run().await {
        output::error(&format!("An exception has occurred: {e}"));
    }
}

async fn run() -> Result<()> {
    let config = Config::load();

    let Some(session) = commands::login::authenticate(&config).await else {
        bail!("Problem with authentication.");
    };

    commands::latest_posts::retrieve_latest_posts(&session, FORUM, POST_LIMIT).await
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
