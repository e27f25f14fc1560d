use reqwest::Client;

use crate::args::{DEFAULT_USER_AGENT, ProbeArgs};
use crate::error::AppResult;

/// Builds the HTTP client shared by all workers. The client is
/// reference-counted and its connection pool supports concurrent use, so
/// one instance serves the whole run.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be initialized.
pub fn build_client(args: &ProbeArgs) -> AppResult<Client> {
    let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
    if let Some(timeout) = args.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
