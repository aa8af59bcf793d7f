//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::print_cmd_warn;
use crate::state::{DashboardState, format_sats};
use crate::ui::dashboard::utils::format_price;
use std::error::Error;

/// Runs the application in headless mode
///
/// Prints every displayable event plus a one-line summary whenever a value
/// changes, until Ctrl+C or the poller stops.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.config.environment);
    if !session.config.has_api_key() {
        print_cmd_warn!(
            "No API key",
            "set LNBITS_API_KEY; balance and payments requests will be rejected"
        );
    }

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    println!(
        "{}",
        Event::scheduler(format!(
            "Polling every {}s",
            session.config.poll_interval.as_secs_f64()
        ))
    );

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let mut state = DashboardState::new();

    loop {
        tokio::select! {
            update = session.update_receiver.recv() => {
                let Some(update) = update else { break };
                let event = state.apply(update);
                if event.should_display() {
                    println!("{}", event);
                }
                // Only changed values are logged at Info
                if event.event_type == EventType::Success && event.log_level >= LogLevel::Info {
                    println!("{}", summary_line(&state));
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    session.cancel_handle.shutdown().await;
    print_session_exit_success();

    Ok(())
}

/// `balance | price | chart points | payments`, with `--` for absent values.
pub fn summary_line(state: &DashboardState) -> String {
    let balance = state
        .balance()
        .map(|sats| format!("{} sats", format_sats(sats)))
        .unwrap_or_else(|| "--".to_string());
    let price = state
        .price()
        .map(|p| format!("${}", format_price(p)))
        .unwrap_or_else(|| "--".to_string());
    let points = state.series().map(|s| s.len()).unwrap_or(0);

    format!(
        "balance: {} | price: {} | chart points: {} | payments: {}",
        balance,
        price,
        points,
        state.transactions().len()
    )
}
