//! # Stack Configuration
//!
//! Compiled-in defaults for the stack wrapper plus the runtime `Config`
//! resolved once from the command line. The endpoint tables are ordered:
//! the first entry that answers usably wins.

use std::path::PathBuf;
use std::time::Duration;

/// Public IP-echo endpoints, tried in order until one returns a bare
/// dotted-quad body.
pub const IP_ECHO_ENDPOINTS: [&str; 4] = [
    "https://api.ipify.org",
    "https://ifconfig.me/ip",
    "https://icanhazip.com",
    "https://checkip.amazonaws.com",
];

/// Geolocation endpoint returning a plaintext country identifier.
pub const GEO_ENDPOINT: &str = "https://ipinfo.io/country";

/// Per-request ceiling for every IP-echo and geolocation probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Total readiness budget, in ticks.
pub const READY_BUDGET_TICKS: u64 = 60;

/// Wall-clock length of one readiness tick.
pub const READY_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// A textual "running/total" readout is emitted every this many ticks.
pub const READY_PROGRESS_STRIDE: u64 = 10;

/// Container whose network namespace must route through the VPN.
pub const DEFAULT_VPN_CONTAINER: &str = "vpn";

/// Compose file expected inside the stack directory.
pub const COMPOSE_FILE_NAME: &str = "docker-compose.yml";

/// Filename prefix for backup archives. Prior archives matching it are
/// never re-archived.
pub const BACKUP_PREFIX: &str = "deckhand-backup";

pub struct Config {
    /// Directory holding the stack's compose file and service state.
    pub stack_dir: PathBuf,
    /// Name of the VPN-isolated container used for proxied probes.
    pub vpn_container: String,
}

impl Config {
    pub fn compose_file(&self) -> PathBuf {
        self.stack_dir.join(COMPOSE_FILE_NAME)
    }
}
