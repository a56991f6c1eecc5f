use deckhand_common::config::Config;
use deckhand_common::success;
use deckhand_core::orchestrator::{ComposeCli, Orchestrator};

pub async fn stop(cfg: &Config) -> anyhow::Result<()> {
    let orchestrator = ComposeCli::new(cfg);
    orchestrator.stop_all().await?;

    success!("stack stopped");
    Ok(())
}
