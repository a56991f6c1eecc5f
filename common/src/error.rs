use std::path::PathBuf;

use thiserror::Error;

use crate::model::IpContext;

/// Outcomes the command handlers branch on. Everything here is fatal to
/// the invoking command; soft failures (geolocation, self-copy) never
/// surface as a `StackError`.
#[derive(Debug, Error)]
pub enum StackError {
    #[error("services not ready after {budget}s, last seen {running}/{total} running")]
    ReadyTimeout {
        running: usize,
        total: usize,
        budget: u64,
    },

    #[error("could not resolve the {context} IP, every echo endpoint failed or answered garbage")]
    EndpointsExhausted { context: IpContext },

    #[error("egress is NOT masked, the proxied IP {ip} equals the local IP")]
    EgressNotMasked { ip: String },

    #[error("orchestrator command `{command}` failed: {detail}")]
    Orchestrator { command: String, detail: String },

    #[error("backup destination `{}` is not a usable directory", .0.display())]
    BadDestination(PathBuf),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
