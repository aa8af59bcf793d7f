//! Dashboard state
//!
//! The values the dashboard shows, owned by a single composition root (the
//! TUI or headless loop) and changed only by applying poll results.

use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, Source};
use crate::logging::LogLevel;
use crate::series::{self, ChartSeries};
use crate::wallet::error::ClientError;
use crate::wallet::transaction::Transaction;
use crate::workers::core::PollUpdate;

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Wallet balance in sats.
    balance: Option<f64>,
    /// Spot price in the quote currency.
    price: Option<f64>,
    series: Option<ChartSeries>,
    transactions: Vec<Transaction>,
    classifier: ErrorClassifier,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Option<f64> {
        self.balance
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn series(&self) -> Option<&ChartSeries> {
        self.series.as_ref()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Records a new price and feeds it to the chart. Returns whether anything
    /// visible changed.
    pub fn apply_price(&mut self, price: f64, timestamp: i64) -> bool {
        let price_changed = self.price != Some(price);
        self.price = Some(price);

        let next = series::append(self.series.as_ref(), timestamp, price);
        let series_changed = !self
            .series
            .as_ref()
            .is_some_and(|current| current.ptr_eq(&next));
        self.series = Some(next);

        price_changed || series_changed
    }

    pub fn apply_balance(&mut self, sats: f64) -> bool {
        let changed = self.balance != Some(sats);
        self.balance = Some(sats);
        changed
    }

    /// Replaces the payment list wholesale.
    pub fn apply_transactions(&mut self, transactions: Vec<Transaction>) -> bool {
        let changed = self.transactions != transactions;
        self.transactions = transactions;
        changed
    }

    /// Applies one poll result. Failures leave the field as it was; either
    /// way the returned event describes what happened.
    pub fn apply(&mut self, update: PollUpdate) -> Event {
        match update {
            PollUpdate::Price { result, timestamp } => match result {
                Ok(price) => {
                    let changed = self.apply_price(price, timestamp);
                    Event::success(
                        Source::Price,
                        format!("Price ${:.2}", price),
                        change_level(changed),
                    )
                }
                Err(e) => self.failure(Source::Price, "price", &e),
            },
            PollUpdate::Balance(result) => match result {
                Ok(sats) => {
                    let changed = self.apply_balance(sats);
                    Event::success(
                        Source::Balance,
                        format!("Balance {} sats", format_sats(sats)),
                        change_level(changed),
                    )
                }
                Err(e) => self.failure(Source::Balance, "balance", &e),
            },
            PollUpdate::Transactions(result) => match result {
                Ok(transactions) => {
                    let count = transactions.len();
                    let changed = self.apply_transactions(transactions);
                    Event::success(
                        Source::Transactions,
                        format!("{} payments", count),
                        change_level(changed),
                    )
                }
                Err(e) => self.failure(Source::Transactions, "payments", &e),
            },
        }
    }

    fn failure(&self, source: Source, what: &str, error: &ClientError) -> Event {
        Event::error(
            source,
            format!("Failed to fetch {} ({}): {}", what, error.kind(), error),
            self.classifier.classify_fetch_error(error),
        )
    }
}

/// Unchanged refreshes are only interesting when debugging.
fn change_level(changed: bool) -> LogLevel {
    if changed {
        LogLevel::Info
    } else {
        LogLevel::Debug
    }
}

/// Sats with at most three decimals (millisat precision), trailing zeros cut.
pub fn format_sats(sats: f64) -> String {
    let formatted = format!("{:.3}", sats);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use crate::series::PricePoint;
    use serde_json::json;

    fn http_error(status: u16) -> ClientError {
        ClientError::Http {
            status,
            message: String::new(),
        }
    }

    fn tx(amount: i64) -> Transaction {
        serde_json::from_value(json!({ "amount": amount })).unwrap()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = DashboardState::new();
        assert_eq!(state.balance(), None);
        assert_eq!(state.price(), None);
        assert!(state.series().is_none());
        assert!(state.transactions().is_empty());
    }

    #[test]
    fn test_price_updates_value_and_series() {
        let mut state = DashboardState::new();
        state.apply(PollUpdate::Price {
            result: Ok(50000.0),
            timestamp: 100,
        });
        state.apply(PollUpdate::Price {
            result: Ok(50001.0),
            timestamp: 105,
        });

        assert_eq!(state.price(), Some(50001.0));
        assert_eq!(
            state.series().unwrap().points(),
            &[PricePoint::new(100, 50000.0), PricePoint::new(105, 50001.0)]
        );
    }

    #[test]
    // An unchanged price keeps both the value and the series allocation.
    fn test_repeated_price_is_not_a_change() {
        let mut state = DashboardState::new();
        assert!(state.apply_price(50000.0, 100));
        let before = state.series().unwrap().clone();

        assert!(!state.apply_price(50000.0, 105));
        assert!(state.series().unwrap().ptr_eq(&before));
    }

    #[test]
    fn test_failures_keep_last_good_values() {
        let mut state = DashboardState::new();
        state.apply(PollUpdate::Price {
            result: Ok(1.0),
            timestamp: 1,
        });
        state.apply(PollUpdate::Balance(Ok(10.0)));
        state.apply(PollUpdate::Transactions(Ok(vec![tx(1000)])));

        let event = state.apply(PollUpdate::Price {
            result: Err(http_error(500)),
            timestamp: 2,
        });
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Warn);
        state.apply(PollUpdate::Balance(Err(http_error(401))));
        state.apply(PollUpdate::Transactions(Err(ClientError::InvalidAmount(
            String::new(),
        ))));

        assert_eq!(state.price(), Some(1.0));
        assert_eq!(state.series().unwrap().len(), 1);
        assert_eq!(state.balance(), Some(10.0));
        assert_eq!(state.transactions(), &[tx(1000)]);
    }

    #[test]
    fn test_transactions_are_replaced_wholesale() {
        let mut state = DashboardState::new();
        state.apply_transactions(vec![tx(1), tx(2), tx(3)]);
        assert!(state.apply_transactions(vec![tx(4)]));
        assert_eq!(state.transactions(), &[tx(4)]);
        assert!(!state.apply_transactions(vec![tx(4)]));
    }

    #[test]
    fn test_events_describe_changes() {
        let mut state = DashboardState::new();
        let first = state.apply(PollUpdate::Balance(Ok(1234.5)));
        assert_eq!(first.msg, "Balance 1234.5 sats");
        assert_eq!(first.log_level, LogLevel::Info);

        let again = state.apply(PollUpdate::Balance(Ok(1234.5)));
        assert_eq!(again.log_level, LogLevel::Debug);

        let failed = state.apply(PollUpdate::Balance(Err(http_error(401))));
        assert!(failed.msg.starts_with("Failed to fetch balance (Transport)"));
        assert_eq!(failed.log_level, LogLevel::Error);
    }

    #[test]
    fn test_format_sats() {
        assert_eq!(format_sats(1000.0), "1000");
        assert_eq!(format_sats(12.345), "12.345");
        assert_eq!(format_sats(0.1), "0.1");
        assert_eq!(format_sats(0.0), "0");
    }
}
