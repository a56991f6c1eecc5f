//! Egress probes.
//!
//! An [`EgressProbe`] issues one bounded HTTP request and hands back the
//! raw body. The verifier never cares how the request travels: directly
//! from this process ([`DirectProbe`]) or from inside the VPN container's
//! network namespace ([`ContainerProbe`], which execs `curl` through the
//! orchestrator). Timeouts are enforced by the underlying client, not by
//! the calling logic.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use deckhand_common::model::IpContext;
use reqwest::Client;

use crate::orchestrator::Orchestrator;

#[async_trait]
pub trait EgressProbe: Send + Sync {
    /// Which network context responses from this probe describe.
    fn context(&self) -> IpContext;

    /// Fetch one endpoint with a per-request ceiling.
    async fn fetch(&self, endpoint: &str, timeout: Duration) -> anyhow::Result<String>;
}

/// Plain HTTP probe from this process.
pub struct DirectProbe {
    client: Client,
}

impl DirectProbe {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .context("building the HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl EgressProbe for DirectProbe {
    fn context(&self) -> IpContext {
        IpContext::Local
    }

    async fn fetch(&self, endpoint: &str, timeout: Duration) -> anyhow::Result<String> {
        let response = self
            .client
            .get(endpoint)
            .timeout(timeout)
            .send()
            .await
            .with_context(|| format!("requesting {endpoint}"))?;

        let body = response
            .error_for_status()
            .with_context(|| format!("{endpoint} answered with an error status"))?
            .text()
            .await
            .with_context(|| format!("reading the body from {endpoint}"))?;

        Ok(body)
    }
}

/// Probe executed inside a named container via the orchestrator.
///
/// `curl --max-time` carries the timeout so the bound holds even though
/// the request runs in another namespace.
pub struct ContainerProbe<'o> {
    orchestrator: &'o dyn Orchestrator,
    container: String,
}

impl<'o> ContainerProbe<'o> {
    pub fn new(orchestrator: &'o dyn Orchestrator, container: String) -> Self {
        Self {
            orchestrator,
            container,
        }
    }
}

#[async_trait]
impl EgressProbe for ContainerProbe<'_> {
    fn context(&self) -> IpContext {
        IpContext::Proxied
    }

    async fn fetch(&self, endpoint: &str, timeout: Duration) -> anyhow::Result<String> {
        let max_time = timeout.as_secs().max(1).to_string();
        let argv = ["curl", "-fsS", "--max-time", max_time.as_str(), endpoint];

        let body = self.orchestrator.exec_in(&self.container, &argv).await?;
        Ok(body)
    }
}
