pub mod backup;
pub mod check_vpn;
pub mod destroy;
pub mod restart;
pub mod start;
pub mod stop;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use deckhand_common::config::DEFAULT_VPN_CONTAINER;

#[derive(Parser)]
#[command(name = "deckhand")]
#[command(about = "Operational helper for a containerized media-server stack.")]
pub struct CommandLine {
    /// Directory holding the stack's compose file
    #[arg(long, global = true, default_value = ".")]
    pub stack_dir: PathBuf,

    /// Container whose egress must be masked by the VPN
    #[arg(long, global = true, default_value = DEFAULT_VPN_CONTAINER)]
    pub vpn_container: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start every service and wait until the whole stack reports running
    #[command(alias = "up")]
    Start,
    /// Stop every service without removing anything
    Stop,
    /// Stop the stack and bring it back up
    Restart,
    /// Tear the stack down, removing containers, networks and volumes
    Destroy,
    /// Archive the stack directory into a destination directory
    #[command(alias = "b")]
    Backup { destination: Option<PathBuf> },
    /// Verify the VPN container's egress IP differs from the local one
    CheckVpn,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
