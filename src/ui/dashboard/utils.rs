//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use chrono::{DateTime, Local};
use ratatui::prelude::Color;

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Price => Color::Yellow,
        Source::Balance => Color::Green,
        Source::Transactions => Color::Cyan,
        Source::Scheduler => Color::Gray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Request timed out - keeping last value".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error - keeping last value".to_string();
    }
    msg.to_string()
}

/// `HH:MM:SS` local time for a millisecond timestamp
pub fn format_clock_millis(timestamp_ms: f64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms as i64)
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Price with thousands separators and two decimals, e.g. `64,123.45`
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((&fixed, "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Y axis bounds with some headroom; a flat series still gets a visible range.
pub fn padded_bounds(lo: f64, hi: f64) -> [f64; 2] {
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.1
    } else {
        (lo.abs() * 0.001).max(1.0)
    };
    [lo - pad, hi + pad]
}
