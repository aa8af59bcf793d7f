//! Polling scheduler
//!
//! Fires a tick immediately and then on a fixed interval until cancelled.
//! Every tick runs as its own task so slow work never delays the next tick.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Stops a running scheduler. Dropping the handle cancels as well.
#[derive(Debug)]
pub struct CancelHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl CancelHandle {
    /// Stops future ticks. Work already started keeps running, but it can see
    /// the cancellation through the token it was given.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Token shared with every tick.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Cancels and waits for the timer loop to exit.
    pub async fn shutdown(mut self) {
        self.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PollingScheduler {
    interval: Duration,
}

impl PollingScheduler {
    pub fn new(interval: Duration) -> Self {
        // tokio rejects a zero period
        Self {
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    /// Starts ticking. `on_tick` receives the scheduler's cancellation token
    /// so the work it spawns can check liveness before publishing results.
    pub fn start<F, Fut>(&self, mut on_tick: F) -> CancelHandle
    where
        F: FnMut(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let loop_token = token.clone();
        let period = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = loop_token.cancelled() => break,
                    // The first tick completes immediately.
                    _ = ticker.tick() => {
                        tokio::spawn(on_tick(loop_token.clone()));
                    }
                }
            }
        });

        CancelHandle {
            token,
            task: Some(task),
        }
    }
}
