use std::time::Duration;

use colored::*;
use deckhand_common::config::READY_PROGRESS_STRIDE;
use deckhand_common::model::ServiceStatus;
use indicatif::{ProgressBar, ProgressStyle};

use crate::terminal::colors;

/// Spinner shown while the readiness poller ticks.
pub fn readiness_bar() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Per-tick readout: the spinner message tracks every tick, a persistent
/// line lands every 10th tick so scrollback shows the climb.
pub fn report_ready_progress(bar: &ProgressBar, tick: u64, status: ServiceStatus) {
    bar.set_message(format!(
        "{} services report running",
        status.to_string().green().bold()
    ));

    if tick > 0 && tick % READY_PROGRESS_STRIDE == 0 {
        bar.println(format!(
            "    {} services running after {}",
            status,
            format!("{}s", tick).color(colors::ACCENT)
        ));
    }
}
