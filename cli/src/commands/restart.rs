use deckhand_common::config::Config;
use deckhand_common::{info, success};
use deckhand_core::orchestrator::{ComposeCli, Orchestrator};

use super::start;

pub async fn restart(cfg: &Config) -> anyhow::Result<()> {
    let orchestrator = ComposeCli::new(cfg);

    info!("stopping the stack first");
    orchestrator.stop_all().await?;

    info!("bringing the stack back up");
    orchestrator.start_all().await?;
    start::wait_until_ready(&orchestrator).await?;

    success!("stack restarted");
    Ok(())
}
