use std::path::PathBuf;

use deckhand_common::config::Config;
use deckhand_common::{info, success, warn};
use deckhand_core::backup;

pub fn backup(cfg: &Config, destination: Option<PathBuf>) -> anyhow::Result<()> {
    let dest = destination.unwrap_or_else(|| PathBuf::from("."));
    let dest = backup::resolve_destination(&dest)?;

    info!("archiving {}", cfg.stack_dir.display());
    let archive = backup::archive_stack(&cfg.stack_dir, &dest)?;
    success!("wrote {}", archive.display());

    match backup::copy_self(&dest) {
        Ok(copied) => info!("copied the deckhand binary to {}", copied.display()),
        Err(err) => warn!("could not copy the deckhand binary next to the archive: {err:#}"),
    }

    Ok(())
}
