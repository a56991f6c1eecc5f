//! Egress IP verification.
//!
//! Resolves the public IP twice, once directly and once from inside the
//! VPN container, and treats equality as a security failure. IP
//! resolution walks the ordered endpoint list and the first body that
//! looks like a dotted quad wins, which bounds the worst case to
//! (endpoints × timeout) per step. Country lookups are best-effort and
//! never change the verdict.

use std::time::Duration;

use deckhand_common::config::{GEO_ENDPOINT, IP_ECHO_ENDPOINTS, PROBE_TIMEOUT};
use deckhand_common::error::StackError;
use deckhand_common::model::{IpObservation, VpnReport};
use tracing::{debug, warn};

use crate::probe::EgressProbe;

const COUNTRY_MAX_CHARS: usize = 56;

/// Syntactic dotted-quad check: four dot-separated runs of ASCII digits.
/// Octet range is deliberately not validated; the echo endpoints are
/// trusted to return real addresses or garbage, never near-misses.
pub fn looks_like_ipv4(candidate: &str) -> bool {
    let mut groups: usize = 0;
    for part in candidate.split('.') {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        groups += 1;
    }
    groups == 4
}

/// Walks `endpoints` in order and returns the first observation whose
/// trimmed body matches the dotted-quad pattern. Exhausting the list is
/// fatal for the whole check.
pub async fn resolve_ip(
    probe: &dyn EgressProbe,
    endpoints: &[&str],
    timeout: Duration,
) -> Result<IpObservation, StackError> {
    let context = probe.context();

    for endpoint in endpoints {
        match probe.fetch(endpoint, timeout).await {
            Ok(body) => {
                let candidate = body.trim();
                if looks_like_ipv4(candidate) {
                    debug!("{endpoint} answered {candidate} for the {context} context");
                    return Ok(IpObservation {
                        ip: candidate.to_string(),
                        context,
                    });
                }
                debug!("{endpoint} answered something that is not an IPv4 address, trying the next endpoint");
            }
            Err(err) => {
                debug!("{endpoint} failed for the {context} context: {err:#}");
            }
        }
    }

    Err(StackError::EndpointsExhausted { context })
}

/// Best-effort country lookup. Any failure warns and yields `None`.
pub async fn resolve_country(probe: &dyn EgressProbe, timeout: Duration) -> Option<String> {
    match probe.fetch(GEO_ENDPOINT, timeout).await {
        Ok(body) => match sanitize_country(&body) {
            Some(country) => Some(country),
            None => {
                warn!(
                    "the geolocation endpoint answered garbage for the {} context",
                    probe.context()
                );
                None
            }
        },
        Err(err) => {
            warn!(
                "country lookup failed for the {} context: {err:#}",
                probe.context()
            );
            None
        }
    }
}

fn sanitize_country(raw: &str) -> Option<String> {
    let line = raw.lines().next()?.trim();
    if line.is_empty() || line.len() > COUNTRY_MAX_CHARS || line.chars().any(|c| c.is_control()) {
        return None;
    }
    Some(line.to_string())
}

/// The whole verification workflow: local IP, local country, proxied IP,
/// proxied country, compare. Matching IPs mean the proxy is not masking
/// egress at all.
pub async fn verify(
    local: &dyn EgressProbe,
    proxied: &dyn EgressProbe,
) -> Result<VpnReport, StackError> {
    let local_ip = resolve_ip(local, &IP_ECHO_ENDPOINTS, PROBE_TIMEOUT).await?;
    let local_country = resolve_country(local, PROBE_TIMEOUT).await;

    let proxied_ip = resolve_ip(proxied, &IP_ECHO_ENDPOINTS, PROBE_TIMEOUT).await?;
    let proxied_country = resolve_country(proxied, PROBE_TIMEOUT).await;

    if proxied_ip.ip == local_ip.ip {
        return Err(StackError::EgressNotMasked { ip: proxied_ip.ip });
    }

    Ok(VpnReport {
        local: local_ip,
        proxied: proxied_ip,
        local_country,
        proxied_country,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
