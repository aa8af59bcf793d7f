//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as DashboardEvent;
use crate::ui::dashboard::{DashboardView, render_dashboard};
use crate::workers::core::PollUpdate;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub poll_interval: Duration,
    pub has_api_key: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool, poll_interval: Duration, has_api_key: bool) -> Self {
        Self {
            with_background_color,
            poll_interval,
            has_api_key,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Everything the dashboard renders.
    view: DashboardView,

    /// Receives poll results from the scheduler.
    update_receiver: mpsc::Receiver<PollUpdate>,

    /// Broadcasts shutdown signal to the poller.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        start_time: Instant,
        update_receiver: mpsc::Receiver<PollUpdate>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        let mut view = DashboardView::new(environment, start_time, ui_config);
        view.add_to_activity_log(DashboardEvent::scheduler(format!(
            "Polling every {}s",
            view.poll_interval.as_secs_f64()
        )));
        Self {
            view,
            update_receiver,
            shutdown_sender,
        }
    }
}

/// Runs the dashboard until the user quits or the poller goes away.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let mut shutdown_receiver = app.shutdown_sender.subscribe();

    loop {
        // Shutdown requested elsewhere, e.g. Ctrl+C
        if shutdown_receiver.try_recv().is_ok() {
            return Ok(());
        }

        while let Ok(update) = app.update_receiver.try_recv() {
            app.view.add_update(update);
        }

        app.view.update();
        terminal.draw(|f| render_dashboard(f, &app.view))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }
            }
        }
    }
}
