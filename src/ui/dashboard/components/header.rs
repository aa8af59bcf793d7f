//! Dashboard header component
//!
//! Renders the title and the countdown to the next poll

use super::super::state::DashboardView;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and refresh gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardView) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = if state.has_api_key {
        format!("WALLET DASHBOARD v{} | {}", version, state.environment)
    } else {
        format!(
            "WALLET DASHBOARD v{} | {} | NO API KEY",
            version, state.environment
        )
    };
    let title_color = if state.has_api_key {
        Color::Cyan
    } else {
        Color::LightYellow
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let remaining = state.next_poll_in();
    let interval_ms = state.poll_interval.as_millis().max(1);
    let elapsed_ms = interval_ms.saturating_sub(remaining.as_millis());
    let progress = ((elapsed_ms * 100) / interval_ms).min(100) as u16;

    let label = match &state.last_refresh {
        Some(at) => format!(
            "NEXT REFRESH IN {}s | last update {}",
            remaining.as_secs_f64().ceil() as u64,
            at
        ),
        None => "WAITING FOR FIRST RESPONSE".to_string(),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress)
        .label(label);

    f.render_widget(gauge, header_chunks[1]);
}
