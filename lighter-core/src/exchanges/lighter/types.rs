//! Lighter wire types
//!
//! Serde models for the REST/websocket payload shapes this layer consumes.
//! Fields the exchange emits inconsistently across endpoints (identifier
//! candidates, boolean-like flags, market ids, per-market order buckets)
//! stay as raw `serde_json::Value` and are interpreted by the mappers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open or historical order as returned by the order endpoints and the
/// account websocket channel.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LighterOrder {
    /// On-chain order index; authoritative for cancellation when present.
    #[serde(default)]
    pub order_index: Value,
    #[serde(default)]
    pub client_order_index: Value,
    #[serde(default)]
    pub order_id: Value,
    #[serde(default)]
    pub client_order_id: Value,
    #[serde(default)]
    pub market_index: Value,
    #[serde(default)]
    pub owner_account_index: Option<i64>,
    #[serde(default)]
    pub initial_base_amount: Option<String>,
    #[serde(default)]
    pub remaining_base_amount: Option<String>,
    #[serde(default)]
    pub filled_base_amount: Option<String>,
    #[serde(default)]
    pub filled_quote_amount: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub nonce: Option<i64>,
    /// Boolean-like; some endpoints send a bool, others 0/1 or a token
    /// string.
    #[serde(default)]
    pub is_ask: Value,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default, rename = "type")]
    pub order_type: Option<String>,
    #[serde(default)]
    pub time_in_force: Option<String>,
    #[serde(default)]
    pub trigger_price: Option<String>,
    #[serde(default)]
    pub reduce_only: Value,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub trigger_status: Option<String>,
    #[serde(default)]
    pub trigger_time: Option<i64>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// Account position. `sign` carries the direction; `position` is the
/// unsigned magnitude.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LighterPosition {
    #[serde(default)]
    pub market_id: Value,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub sign: i64,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub avg_entry_price: Option<String>,
    #[serde(default)]
    pub position_value: Option<String>,
    #[serde(default)]
    pub unrealized_pnl: Option<String>,
    #[serde(default)]
    pub realized_pnl: Option<String>,
    #[serde(default)]
    pub liquidation_price: Option<String>,
    #[serde(default)]
    pub initial_margin_fraction: Option<String>,
    #[serde(default)]
    pub margin_mode: Option<i64>,
    #[serde(default)]
    pub allocated_margin: Option<String>,
}

/// Account details payload.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LighterAccountDetails {
    #[serde(default)]
    pub account_index: i64,
    #[serde(default)]
    pub l1_address: Option<String>,
    #[serde(default)]
    pub collateral: Option<String>,
    #[serde(default)]
    pub available_balance: Option<String>,
    /// Zero marks a disabled account.
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub total_order_count: Option<i64>,
    #[serde(default)]
    pub pending_order_count: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub positions: Vec<LighterPosition>,
}

/// Single order book level.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LighterOrderBookLevel {
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub size: String,
}

/// Order book snapshot with a monotonic offset marker.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LighterOrderBookSnapshot {
    #[serde(default)]
    pub market_id: Option<i64>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub bids: Vec<LighterOrderBookLevel>,
    #[serde(default)]
    pub asks: Vec<LighterOrderBookLevel>,
}

/// Daily market statistics. The daily aggregates arrive as plain numbers,
/// unlike the string-encoded prices elsewhere on this wire.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LighterMarketStats {
    #[serde(default)]
    pub market_id: Option<i64>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub index_price: Option<String>,
    #[serde(default)]
    pub mark_price: Option<String>,
    #[serde(default)]
    pub open_interest: Option<String>,
    #[serde(default)]
    pub last_trade_price: String,
    #[serde(default)]
    pub current_funding_rate: Option<String>,
    #[serde(default)]
    pub funding_rate: Option<String>,
    #[serde(default)]
    pub funding_timestamp: Option<i64>,
    #[serde(default)]
    pub daily_base_token_volume: Option<f64>,
    #[serde(default)]
    pub daily_quote_token_volume: Option<f64>,
    #[serde(default)]
    pub daily_price_low: Option<f64>,
    #[serde(default)]
    pub daily_price_high: Option<f64>,
    #[serde(default)]
    pub daily_price_change: Option<f64>,
}

/// Closed candle interval.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LighterKline {
    #[serde(default)]
    pub start_timestamp: i64,
    #[serde(default)]
    pub end_timestamp: i64,
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub high: String,
    #[serde(default)]
    pub low: String,
    #[serde(default)]
    pub close: String,
    #[serde(default)]
    pub base_token_volume: String,
    #[serde(default)]
    pub quote_token_volume: String,
    #[serde(default)]
    pub trades: Option<i64>,
}

/// Per-market trading rules as published by the order book metadata
/// endpoint.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LighterOrderBookMetadata {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub market_id: i64,
    #[serde(default)]
    pub maker_fee: String,
    #[serde(default)]
    pub taker_fee: String,
    #[serde(default)]
    pub min_base_amount: String,
    #[serde(default)]
    pub min_quote_amount: String,
    #[serde(default)]
    pub supported_size_decimals: u32,
    #[serde(default)]
    pub supported_price_decimals: u32,
    #[serde(default)]
    pub supported_quote_decimals: u32,
    #[serde(default)]
    pub status: String,
}

/// Per-market account channel envelope. The orders bucket is loosely
/// typed: the wire sends either an array or a keyed object depending on
/// channel.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LighterAccountMarketUpdate {
    #[serde(default)]
    pub account: Option<i64>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub orders: Value,
    #[serde(default)]
    pub position: Option<LighterPosition>,
    #[serde(default)]
    pub trades: Value,
    #[serde(default)]
    pub funding_history: Value,
}
