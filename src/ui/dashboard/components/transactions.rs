//! Recent payments table

use super::super::state::DashboardView;
use crate::state::format_sats;
use crate::wallet::transaction::Transaction;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

fn transactions_block(count: usize) -> Block<'static> {
    Block::default()
        .title(format!("PAYMENTS ({})", count))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn render_transactions(f: &mut Frame, area: Rect, state: &DashboardView) {
    let transactions = state.wallet.transactions();
    if transactions.is_empty() {
        let placeholder = Paragraph::new("No payments yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(transactions_block(0));
        f.render_widget(placeholder, area);
        return;
    }

    // Header row plus borders
    let visible = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = transactions.iter().take(visible).map(transaction_row).collect();

    let header = Row::new(["TIME", "AMOUNT", "MEMO", "STATUS"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Fill(1),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(transactions_block(transactions.len()));

    f.render_widget(table, area);
}

fn transaction_row(tx: &Transaction) -> Row<'static> {
    let time = tx
        .time()
        .map(|t| t.format("%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "--".to_string());

    let (amount, amount_color) = match tx.amount_sats() {
        Some(sats) if sats < 0.0 => (format!("-{}", format_sats(-sats)), Color::LightRed),
        Some(sats) => (format!("+{}", format_sats(sats)), Color::LightGreen),
        None => ("--".to_string(), Color::Gray),
    };

    let (status, status_color) = match tx.is_pending() {
        Some(true) => ("pending", Color::Yellow),
        Some(false) => ("settled", Color::Green),
        None => ("unknown", Color::DarkGray),
    };

    Row::new(vec![
        Cell::from(time).style(Style::default().fg(Color::DarkGray)),
        Cell::from(amount).style(Style::default().fg(amount_color)),
        Cell::from(tx.memo().unwrap_or("").to_string()),
        Cell::from(status).style(Style::default().fg(status_color)),
    ])
}
