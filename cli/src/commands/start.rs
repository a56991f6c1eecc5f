use deckhand_common::config::Config;
use deckhand_common::success;
use deckhand_core::orchestrator::{ComposeCli, Orchestrator};
use deckhand_core::readiness;

use crate::terminal::progress;

pub async fn start(cfg: &Config) -> anyhow::Result<()> {
    let orchestrator = ComposeCli::new(cfg);
    orchestrator.start_all().await?;
    wait_until_ready(&orchestrator).await?;

    success!("stack is up, every service reports running");
    Ok(())
}

/// Drives the readiness poller with a live progress readout. Shared with
/// the restart command.
pub(crate) async fn wait_until_ready(orchestrator: &dyn Orchestrator) -> anyhow::Result<()> {
    let bar = progress::readiness_bar();

    let waited = readiness::wait_for_services(orchestrator, |tick, status| {
        progress::report_ready_progress(&bar, tick, status);
    })
    .await;

    bar.finish_and_clear();
    let status = waited?;

    success!("all {} services came up", status.total);
    Ok(())
}
