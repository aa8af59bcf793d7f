//! Dashboard view state
//!
//! Wraps the wallet state with what only the terminal view needs: the
//! activity log, queued updates and timing for the refresh gauge.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event;
use crate::state::DashboardState;
use crate::ui::app::UIConfig;
use crate::workers::core::PollUpdate;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct DashboardView {
    /// Balance, price, chart series and payments.
    pub wallet: DashboardState,
    /// The environment in which the application is running.
    pub environment: Environment,
    /// When polling started; ticks fire at whole multiples of the interval from here.
    pub start_time: Instant,
    pub poll_interval: Duration,
    /// Whether an API key was configured.
    pub has_api_key: bool,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Poll results waiting to be applied
    pub pending_updates: VecDeque<PollUpdate>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Local time of the last successful update, if any.
    pub last_refresh: Option<String>,
    /// Render loop counter
    pub tick: usize,
}

impl DashboardView {
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            wallet: DashboardState::new(),
            environment,
            start_time,
            poll_interval: ui_config.poll_interval,
            has_api_key: ui_config.has_api_key,
            with_background_color: ui_config.with_background_color,
            pending_updates: VecDeque::new(),
            activity_logs: VecDeque::new(),
            last_refresh: None,
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Queue a poll result for the next update pass
    pub fn add_update(&mut self, update: PollUpdate) {
        self.pending_updates.push_back(update);
    }
}
