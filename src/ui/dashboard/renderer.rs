//! Dashboard main renderer

use super::components::{cards, chart, footer, header, logs, transactions};
use super::state::DashboardView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardView) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    cards::render_cards(f, main_chunks[1], state);
    chart::render_chart(f, main_chunks[2], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[3]);

    transactions::render_transactions(f, bottom_chunks[0], state);
    logs::render_logs_panel(f, bottom_chunks[1], state);
    footer::render_footer(f, main_chunks[4]);
}
