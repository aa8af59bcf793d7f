//! Price chart component

use super::super::state::DashboardView;
use super::super::utils::{format_clock_millis, format_price, padded_bounds};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

fn chart_block() -> Block<'static> {
    Block::default()
        .title("PRICE CHART")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Render the price series as a line chart.
pub fn render_chart(f: &mut Frame, area: Rect, state: &DashboardView) {
    let Some(series) = state.wallet.series() else {
        let placeholder = Paragraph::new("Waiting for price data...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(chart_block());
        f.render_widget(placeholder, area);
        return;
    };

    let points = series.as_plot_data();
    let (first, last) = series.time_bounds().unwrap_or((0, 0));
    // A single point still needs a non-empty x range.
    let x_bounds = [first as f64, (last.max(first + 1)) as f64];
    let (lo, hi) = series.value_bounds().unwrap_or((0.0, 0.0));
    let y_bounds = padded_bounds(lo, hi);

    let dataset = Dataset::default()
        .name(format!("{} points", series.len()))
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightYellow))
        .data(&points);

    let x_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds(x_bounds)
        .labels([format_clock_millis(x_bounds[0]), format_clock_millis(x_bounds[1])]);

    let y_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds(y_bounds)
        .labels([format_price(y_bounds[0]), format_price(y_bounds[1])]);

    let chart = Chart::new(vec![dataset])
        .block(chart_block())
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
