use deckhand_common::config::Config;
use deckhand_common::{info, success, warn};
use deckhand_core::orchestrator::{ComposeCli, Orchestrator};

use crate::terminal::input;

pub async fn destroy(cfg: &Config) -> anyhow::Result<()> {
    warn!("this removes the stack's containers, networks AND volumes");

    if !input::confirm("destroy the stack?")? {
        info!("leaving the stack alone");
        return Ok(());
    }

    let orchestrator = ComposeCli::new(cfg);
    orchestrator.teardown_all().await?;

    success!("stack destroyed");
    Ok(())
}
