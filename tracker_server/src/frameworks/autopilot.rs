// Timer-driven tick loop, for running without a polling client.

use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::interface_adapters::state::AppState;
use crate::use_cases::SimulateMovementUseCase;

pub async fn autopilot_task(state: AppState, tick_interval: Duration) {
    info!(interval_ms = tick_interval.as_millis(), "autopilot engaged");

    let mut interval = tokio::time::interval(tick_interval);
    // A slow disk should delay ticks, not cause a burst of catch-up ticks.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut tick: u64 = 0;

    loop {
        interval.tick().await;
        tick = tick.wrapping_add(1);

        let use_case = SimulateMovementUseCase {
            store: state.store.clone(),
            deck: state.deck.clone(),
            params: state.flight,
        };
        match use_case.execute().await {
            Ok(ticks) => debug!(tick, drones = ticks.len(), "autopilot tick"),
            Err(err) => warn!(tick, error = ?err, "autopilot tick failed"),
        }
    }
}
