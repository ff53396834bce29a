//! Periodic sweeper
//!
//! Background task that sweeps every known chat on a fixed interval.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use super::context::ServiceContext;
use super::moderation::ModerationService;

/// Spawn the sweeper; the first sweep runs one full interval after start
///
/// A zero interval is raised to one second.
pub fn spawn_periodic_sweeper(ctx: ServiceContext, every: Duration) -> JoinHandle<()> {
    let every = if every.is_zero() {
        Duration::from_secs(1)
    } else {
        every
    };

    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // The first tick completes immediately
        ticker.tick().await;

        info!(interval_secs = every.as_secs(), "Periodic sweeper started");

        loop {
            ticker.tick().await;
            run_cycle(&ctx).await;
        }
    })
}

async fn run_cycle(ctx: &ServiceContext) {
    match ModerationService::new(ctx).sweep_all_known_chats().await {
        Ok(reports) => {
            let banned: usize = reports.iter().map(|(_, report)| report.banned).sum();
            info!(chats = reports.len(), banned, "Periodic sweep finished");
        }
        Err(e) => error!(error = %e, "Periodic sweep failed"),
    }
}
