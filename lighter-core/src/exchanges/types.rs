//! Aster unified schema types
//!
//! Target entities for the normalization layer: the downstream engine's
//! common representation for depth, tickers, klines, orders and account
//! state, independent of Lighter's wire format. All numeric market values
//! stay string-encoded to preserve the exchange's decimal rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event tag carried by unified depth payloads.
pub const DEPTH_EVENT_TYPE: &str = "lighterDepth";
/// Event tag carried by unified ticker payloads.
pub const TICKER_EVENT_TYPE: &str = "lighterTicker";
/// Event tag carried by unified kline payloads.
pub const KLINE_EVENT_TYPE: &str = "lighterKline";

/// Order side
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Order types understood by the downstream engine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    StopMarket,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Market => write!(f, "MARKET"),
            OrderType::StopMarket => write!(f, "STOP_MARKET"),
        }
    }
}

/// Position side
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    Long,
    Short,
    /// Flat or hedged; used when the position carries no direction.
    Both,
}

/// Margin mode of a position.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarginType {
    Isolated,
    Cross,
}

/// Reference price used to evaluate trigger conditions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkingType {
    MarkPrice,
    ContractPrice,
}

/// Trading status of a market.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SymbolStatus {
    Trading,
    Halt,
    Inactive,
}

/// Single (price, size) level of a depth snapshot.
pub type DepthLevel = (String, String);

/// Unified order book snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsterDepth {
    pub event_type: String,
    pub event_time: i64,
    pub symbol: String,
    pub last_update_id: i64,
    pub bids: Vec<DepthLevel>,
    pub asks: Vec<DepthLevel>,
}

/// Unified 24h market statistics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsterTicker {
    pub event_type: String,
    pub event_time: i64,
    pub symbol: String,
    pub last_price: String,
    pub open_price: String,
    pub high_price: String,
    pub low_price: String,
    pub volume: String,
    pub quote_volume: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_avg_price: Option<String>,
}

/// Unified candle. Source klines represent closed intervals only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsterKline {
    pub event_type: String,
    pub event_time: i64,
    pub symbol: String,
    pub interval: String,
    pub open_time: i64,
    pub close_time: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub quote_asset_volume: String,
    pub number_of_trades: i64,
    pub is_closed: bool,
}

/// Unified order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsterOrder {
    /// Canonical order identifier, string-encoded to survive indices
    /// above 2^53.
    pub order_id: String,
    pub client_order_id: String,
    pub symbol: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: String,
    pub price: String,
    pub orig_qty: String,
    pub executed_qty: String,
    pub stop_price: String,
    pub time: i64,
    pub update_time: i64,
    pub reduce_only: bool,
    pub close_position: bool,
    pub working_type: WorkingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_price: Option<String>,
}

/// Unified account position.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsterAccountPosition {
    pub symbol: String,
    pub position_amt: String,
    pub entry_price: String,
    pub unrealized_profit: String,
    pub position_side: PositionSide,
    pub update_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidation_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maint_margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_margin: Option<String>,
    pub margin_type: MarginType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_price: Option<String>,
}

/// Per-asset balance entry of an account snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsterAccountAsset {
    pub asset: String,
    pub wallet_balance: String,
    pub available_balance: String,
    pub update_time: i64,
}

/// Unified account snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsterAccountSnapshot {
    pub can_trade: bool,
    pub can_deposit: bool,
    pub can_withdraw: bool,
    pub update_time: i64,
    pub total_wallet_balance: String,
    pub total_unrealized_profit: String,
    pub positions: Vec<AsterAccountPosition>,
    pub assets: Vec<AsterAccountAsset>,
}

/// Unified per-market trading rules and fees.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsterSymbolInfo {
    pub symbol: String,
    pub market_id: i64,
    pub status: SymbolStatus,
    pub price_precision: u32,
    pub quantity_precision: u32,
    pub min_qty: String,
    pub min_notional: String,
    pub maker_fee: String,
    pub taker_fee: String,
}
