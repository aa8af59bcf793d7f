//! Response shapes of the wallet backend and the price feed, and their
//! conversion into domain values.

use super::error::ClientError;
use super::transaction::Transaction;
use crate::consts::cli_consts::wallet::MSATS_PER_SAT;
use serde::Deserialize;

/// `GET /prices/{pair}/spot`
#[derive(Debug, Deserialize)]
pub struct SpotPriceResponse {
    pub data: SpotPriceData,
}

#[derive(Debug, Deserialize)]
pub struct SpotPriceData {
    /// Stringified decimal, e.g. `"64123.45"`.
    pub amount: String,
}

/// `GET /wallet`. Other fields (id, name) are ignored.
#[derive(Debug, Deserialize)]
pub struct WalletResponse {
    /// Millisats.
    pub balance: i64,
}

pub fn parse_spot_price(body: &[u8]) -> Result<f64, ClientError> {
    let response: SpotPriceResponse = serde_json::from_slice(body)?;
    let amount = response.data.amount.trim();
    amount
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ClientError::InvalidAmount(response.data.amount.clone()))
}

/// Balance in sats.
pub fn parse_balance(body: &[u8]) -> Result<f64, ClientError> {
    let response: WalletResponse = serde_json::from_slice(body)?;
    Ok(response.balance as f64 / MSATS_PER_SAT)
}

pub fn parse_transactions(body: &[u8]) -> Result<Vec<Transaction>, ClientError> {
    Ok(serde_json::from_slice(body)?)
}
