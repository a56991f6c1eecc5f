//! Service readiness polling.
//!
//! The decision logic is the pure [`poll_step`] transition function over
//! `{Polling, Succeeded, TimedOut}`; [`wait_for_services`] drives it with
//! one orchestrator query per tick and a real sleep in between. Each tick
//! IS the retry: there is no backoff beyond the fixed interval.

use deckhand_common::config::{READY_BUDGET_TICKS, READY_TICK_INTERVAL};
use deckhand_common::error::StackError;
use deckhand_common::model::ServiceStatus;
use tokio::time::sleep;
use tracing::debug;

use crate::orchestrator::Orchestrator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollState {
    Polling,
    Succeeded,
    TimedOut,
}

/// Pure transition function for one tick.
///
/// Success is checked before the budget so a stack that becomes ready on
/// the boundary tick still counts. A zero-service stack never satisfies
/// the success condition and polls to timeout.
pub fn poll_step(elapsed_ticks: u64, status: ServiceStatus) -> PollState {
    if status.all_running() {
        return PollState::Succeeded;
    }
    if elapsed_ticks >= READY_BUDGET_TICKS {
        return PollState::TimedOut;
    }
    PollState::Polling
}

/// Polls the orchestrator until every declared service reports running,
/// or the budget runs out.
///
/// `on_tick` fires once per tick with the tick number and the counts just
/// observed; the caller owns all rendering. On timeout the last-known
/// counts travel in the error.
pub async fn wait_for_services<F>(
    orchestrator: &dyn Orchestrator,
    mut on_tick: F,
) -> Result<ServiceStatus, StackError>
where
    F: FnMut(u64, ServiceStatus),
{
    let mut tick: u64 = 0;

    loop {
        let status = orchestrator.list_services().await?;
        on_tick(tick, status);

        match poll_step(tick, status) {
            PollState::Succeeded => {
                debug!("all {} services running after {} ticks", status.total, tick);
                return Ok(status);
            }
            PollState::TimedOut => {
                return Err(StackError::ReadyTimeout {
                    running: status.running,
                    total: status.total,
                    budget: READY_BUDGET_TICKS,
                });
            }
            PollState::Polling => {}
        }

        tick += 1;
        sleep(READY_TICK_INTERVAL).await;
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
