//! Balance and price cards

use super::super::state::DashboardView;
use super::super::utils::format_price;
use crate::state::format_sats;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

const PLACEHOLDER: &str = "--";

pub fn render_cards(f: &mut Frame, area: Rect, state: &DashboardView) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let balance = state
        .wallet
        .balance()
        .map(|sats| format!("{} sats", format_sats(sats)))
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    render_card(f, chunks[0], "BALANCE", balance, Color::LightGreen);

    let price = state
        .wallet
        .price()
        .map(|p| format!("${}", format_price(p)))
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    render_card(f, chunks[1], "PRICE", price, Color::LightYellow);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let text = Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    let card = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(card, area);
}
