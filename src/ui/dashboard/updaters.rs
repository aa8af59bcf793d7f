//! Dashboard view update logic

use super::state::DashboardView;
use crate::events::{Event, EventType};
use std::time::Duration;

impl DashboardView {
    /// Apply queued poll results and advance the render tick.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(update) = self.pending_updates.pop_front() {
            let event = self.wallet.apply(update);
            self.record(event);
        }
    }

    fn record(&mut self, event: Event) {
        if event.event_type == EventType::Success {
            self.last_refresh = Some(event.timestamp.clone());
        }
        self.add_to_activity_log(event);
    }

    /// Time left until the next poll.
    pub fn next_poll_in(&self) -> Duration {
        time_until_next_tick(self.start_time.elapsed(), self.poll_interval)
    }
}

/// Ticks fire at `0, interval, 2 * interval, ...` after start.
pub fn time_until_next_tick(elapsed: Duration, interval: Duration) -> Duration {
    if interval.is_zero() {
        return Duration::ZERO;
    }
    let into_period = elapsed.as_millis() % interval.as_millis();
    interval - Duration::from_millis(into_period as u64)
}
