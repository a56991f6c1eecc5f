//! The **abstraction** over the container orchestrator.
//!
//! Command handlers and the readiness poller depend on the [`Orchestrator`]
//! trait only; the concrete [`ComposeCli`] adapter shells out to
//! `docker compose` with the stack's compose file. Keeping the seam here
//! lets the poller and the proxied probe run against fakes in tests.

use std::path::PathBuf;

use async_trait::async_trait;
use deckhand_common::config::Config;
use deckhand_common::error::StackError;
use deckhand_common::model::ServiceStatus;
use tokio::process::Command;
use tracing::debug;

#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Current counts of declared and running services.
    async fn list_services(&self) -> Result<ServiceStatus, StackError>;

    /// Bring the whole stack up, detached.
    async fn start_all(&self) -> Result<(), StackError>;

    /// Stop every service without removing anything.
    async fn stop_all(&self) -> Result<(), StackError>;

    /// Tear the stack down, removing containers, networks and volumes.
    async fn teardown_all(&self) -> Result<(), StackError>;

    /// Run a command inside a named container's namespace and return its
    /// stdout.
    async fn exec_in(&self, container: &str, argv: &[&str]) -> Result<String, StackError>;
}

/// `docker compose` adapter. Every operation is one blocking child
/// process; exit status decides success, stderr carries the detail.
pub struct ComposeCli {
    compose_file: PathBuf,
}

impl ComposeCli {
    pub fn new(cfg: &Config) -> Self {
        Self {
            compose_file: cfg.compose_file(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<String, StackError> {
        debug!("docker compose {}", args.join(" "));

        let output = Command::new("docker")
            .arg("compose")
            .arg("-f")
            .arg(&self.compose_file)
            .args(args)
            .output()
            .await
            .map_err(|e| StackError::Orchestrator {
                command: args.join(" "),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(StackError::Orchestrator {
                command: args.join(" "),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Service listings are one name per line; compose occasionally pads the
/// output with blank lines.
fn count_services(listing: &str) -> usize {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .count()
}

#[async_trait]
impl Orchestrator for ComposeCli {
    async fn list_services(&self) -> Result<ServiceStatus, StackError> {
        let total = count_services(&self.run(&["config", "--services"]).await?);
        let running = count_services(
            &self
                .run(&["ps", "--services", "--filter", "status=running"])
                .await?,
        );
        Ok(ServiceStatus { running, total })
    }

    async fn start_all(&self) -> Result<(), StackError> {
        self.run(&["up", "-d"]).await.map(|_| ())
    }

    async fn stop_all(&self) -> Result<(), StackError> {
        self.run(&["stop"]).await.map(|_| ())
    }

    async fn teardown_all(&self) -> Result<(), StackError> {
        self.run(&["down", "--volumes", "--remove-orphans"])
            .await
            .map(|_| ())
    }

    async fn exec_in(&self, container: &str, argv: &[&str]) -> Result<String, StackError> {
        let mut args: Vec<&str> = vec!["exec", "-T", container];
        args.extend_from_slice(argv);
        self.run(&args).await
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
