//! Lighter → Aster entity mappers
//!
//! Pure transformation functions from the Lighter wire types into the
//! unified schema. Malformed or missing field data never fails a mapping;
//! every function returns a fully-formed entity with documented defaults.

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use super::flags::{coerce_boolean_flag, normalize_boolean_flag};
use super::identity::normalize_order_identity;
use super::types::{
    LighterAccountDetails, LighterKline, LighterMarketStats, LighterOrder,
    LighterOrderBookLevel, LighterOrderBookMetadata, LighterOrderBookSnapshot, LighterPosition,
};
use crate::exchanges::types::{
    AsterAccountAsset, AsterAccountPosition, AsterAccountSnapshot, AsterDepth, AsterKline,
    AsterOrder, AsterSymbolInfo, AsterTicker, DepthLevel, MarginType, OrderSide, OrderType,
    PositionSide, SymbolStatus, WorkingType, DEPTH_EVENT_TYPE, KLINE_EVENT_TYPE,
    TICKER_EVENT_TYPE,
};
use crate::market_data::symbol_mapper::symbols_match;

/// Narrows an account snapshot to one target market. An empty filter keeps
/// every position.
#[derive(Clone, Debug, Default)]
pub struct SnapshotFilter {
    pub market_symbol: Option<String>,
    pub market_id: Option<i64>,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Maps an order book snapshot. Levels pass through unchanged; the update
/// marker uses the source offset when present, else the current time. The
/// source does not guarantee its own event time, so event time is always
/// local.
pub fn to_depth(symbol: &str, snapshot: &LighterOrderBookSnapshot) -> AsterDepth {
    let to_levels = |levels: &[LighterOrderBookLevel]| -> Vec<DepthLevel> {
        levels
            .iter()
            .map(|level| (level.price.clone(), level.size.clone()))
            .collect()
    };
    let now = now_millis();
    AsterDepth {
        event_type: DEPTH_EVENT_TYPE.to_string(),
        event_time: now,
        symbol: symbol.to_string(),
        last_update_id: snapshot.offset.unwrap_or(now),
        bids: to_levels(&snapshot.bids),
        asks: to_levels(&snapshot.asks),
    }
}

/// Maps daily market statistics. Absent low/high fall back to the last
/// trade price, volumes default to "0", and an absent price change is
/// omitted rather than zeroed.
pub fn to_ticker(symbol: &str, stats: &LighterMarketStats) -> AsterTicker {
    let last_price = stats.last_trade_price.clone();
    let low = stats
        .daily_price_low
        .map(|value| value.to_string())
        .unwrap_or_else(|| last_price.clone());
    let high = stats
        .daily_price_high
        .map(|value| value.to_string())
        .unwrap_or_else(|| last_price.clone());
    AsterTicker {
        event_type: TICKER_EVENT_TYPE.to_string(),
        event_time: now_millis(),
        symbol: symbol.to_string(),
        last_price,
        // The feed carries no daily open; the observed wire convention is
        // the daily low standing in when present.
        open_price: low.clone(),
        high_price: high,
        low_price: low,
        volume: stats
            .daily_base_token_volume
            .map(|value| value.to_string())
            .unwrap_or_else(|| "0".to_string()),
        quote_volume: stats
            .daily_quote_token_volume
            .map(|value| value.to_string())
            .unwrap_or_else(|| "0".to_string()),
        price_change: stats.daily_price_change.map(|value| value.to_string()),
        mark_price: None,
        weighted_avg_price: None,
    }
}

/// Maps a batch of candles. Lighter klines represent closed intervals
/// only, so `is_closed` is always asserted.
pub fn to_klines(symbol: &str, interval: &str, klines: &[LighterKline]) -> Vec<AsterKline> {
    klines
        .iter()
        .map(|entry| AsterKline {
            event_type: KLINE_EVENT_TYPE.to_string(),
            event_time: now_millis(),
            symbol: symbol.to_string(),
            interval: interval.to_string(),
            open_time: entry.start_timestamp,
            close_time: entry.end_timestamp,
            open: entry.open.clone(),
            high: entry.high.clone(),
            low: entry.low.clone(),
            close: entry.close.clone(),
            volume: entry.base_token_volume.clone(),
            quote_asset_volume: entry.quote_token_volume.clone(),
            number_of_trades: entry.trades.unwrap_or(0),
            is_closed: true,
        })
        .collect()
}

/// Maps a batch of orders.
pub fn to_orders(symbol: &str, orders: &[LighterOrder]) -> Vec<AsterOrder> {
    orders
        .iter()
        .map(|order| order_to_aster(symbol, order))
        .collect()
}

/// Maps a single order into the unified schema.
///
/// The canonical order id is the first identifier that normalizes, in
/// priority order: on-chain order id, order index, client order index,
/// client order id. On-chain indices are authoritative for cancellation
/// but may be absent on freshly-submitted orders still keyed only by
/// client index.
pub fn order_to_aster(symbol: &str, order: &LighterOrder) -> AsterOrder {
    let reduce_only = coerce_boolean_flag(&order.reduce_only, false);
    let order_id = normalize_order_identity(&order.order_id)
        .or_else(|| normalize_order_identity(&order.order_index))
        .or_else(|| normalize_order_identity(&order.client_order_index))
        .or_else(|| normalize_order_identity(&order.client_order_id))
        .unwrap_or_default();
    let client_order_id = normalize_order_identity(&order.client_order_id)
        .or_else(|| normalize_order_identity(&order.client_order_index))
        .unwrap_or_else(|| order_id.clone());
    let now = now_millis();
    AsterOrder {
        order_id,
        client_order_id,
        symbol: symbol.to_string(),
        side: infer_side(order),
        order_type: map_order_type(order.order_type.as_deref()),
        status: order
            .status
            .clone()
            .or_else(|| order.trigger_status.clone())
            .unwrap_or_else(|| "UNKNOWN".to_string()),
        price: order.price.clone().unwrap_or_else(|| "0".to_string()),
        orig_qty: order
            .initial_base_amount
            .clone()
            .unwrap_or_else(|| "0".to_string()),
        executed_qty: compute_executed_qty(order),
        stop_price: order
            .trigger_price
            .clone()
            .unwrap_or_else(|| "0".to_string()),
        time: order.created_at.unwrap_or(now),
        update_time: order.updated_at.unwrap_or(now),
        reduce_only,
        // The source has no independent close-position concept.
        close_position: reduce_only,
        // Lighter prices triggers off mark price exclusively.
        working_type: WorkingType::MarkPrice,
        activation_price: order.trigger_price.clone(),
    }
}

/// The explicit ask-flag wins over any string side field; the wire emits
/// either representation depending on endpoint.
fn infer_side(order: &LighterOrder) -> OrderSide {
    if let Some(is_ask) = normalize_boolean_flag(&order.is_ask) {
        return if is_ask { OrderSide::Sell } else { OrderSide::Buy };
    }
    match order.side.as_deref().map(str::to_lowercase).as_deref() {
        Some("sell") | Some("ask") => OrderSide::Sell,
        _ => OrderSide::Buy,
    }
}

fn map_order_type(value: Option<&str>) -> OrderType {
    let Some(raw) = value else {
        return OrderType::Limit;
    };
    match raw.to_lowercase().as_str() {
        "limit" => OrderType::Limit,
        "market" => OrderType::Market,
        "stop_loss" | "stop_loss_market" => OrderType::StopMarket,
        "stop_loss_limit" => OrderType::Limit,
        "take_profit" | "take_profit_market" => OrderType::StopMarket,
        "take_profit_limit" => OrderType::Limit,
        other => {
            debug!(order_type = other, "unmapped order type, defaulting to LIMIT");
            OrderType::Limit
        }
    }
}

/// Prefers the explicit filled amount; else derives `initial − remaining`
/// when both parse finite; else "0". An empty string counts as absent.
fn compute_executed_qty(order: &LighterOrder) -> String {
    if let Some(filled) = order
        .filled_base_amount
        .as_deref()
        .filter(|raw| !raw.is_empty())
    {
        return filled.to_string();
    }
    let initial = order
        .initial_base_amount
        .as_deref()
        .filter(|raw| !raw.is_empty());
    let remaining = order
        .remaining_base_amount
        .as_deref()
        .filter(|raw| !raw.is_empty());
    if let (Some(initial), Some(remaining)) = (initial, remaining) {
        if let (Ok(initial), Ok(remaining)) =
            (initial.trim().parse::<f64>(), remaining.trim().parse::<f64>())
        {
            if initial.is_finite() && remaining.is_finite() {
                return (initial - remaining).to_string();
            }
        }
    }
    "0".to_string()
}

/// Maps account details plus positions into a unified snapshot.
///
/// Positions are narrowed by the filter: numeric market-id equality when a
/// target id is given (symbol-form matching only when the position's
/// market id is non-finite and a target symbol exists), else symbol-form
/// matching, else unfiltered. Unrealized profit aggregates across the
/// mapped positions, formatted to 8 decimal places.
pub fn to_account_snapshot(
    symbol: &str,
    details: &LighterAccountDetails,
    positions: &[LighterPosition],
    assets: Vec<AsterAccountAsset>,
    filter: &SnapshotFilter,
) -> AsterAccountSnapshot {
    let mapped: Vec<AsterAccountPosition> = positions
        .iter()
        .filter(|position| {
            position_matches(position, filter.market_id, filter.market_symbol.as_deref())
        })
        .map(|position| position_to_aster(symbol, position))
        .collect();
    let aggregate: f64 = mapped
        .iter()
        .map(|position| position.unrealized_profit.parse::<f64>().unwrap_or(0.0))
        .sum();
    let assets = if assets.is_empty() {
        default_assets(details)
    } else {
        assets
    };
    AsterAccountSnapshot {
        can_trade: details.status.map_or(true, |status| status != 0),
        can_deposit: true,
        can_withdraw: true,
        update_time: now_millis(),
        total_wallet_balance: details.collateral.clone().unwrap_or_else(|| "0".to_string()),
        total_unrealized_profit: format!("{aggregate:.8}"),
        positions: mapped,
        assets,
    }
}

fn position_matches(
    position: &LighterPosition,
    target_market_id: Option<i64>,
    target_symbol: Option<&str>,
) -> bool {
    if let Some(target_id) = target_market_id {
        if let Some(market_id) = loose_market_id(&position.market_id) {
            return market_id == target_id as f64;
        }
        return match target_symbol {
            Some(target) => symbols_match(position.symbol.as_deref(), Some(target)),
            None => false,
        };
    }
    if let Some(target) = target_symbol {
        return symbols_match(position.symbol.as_deref(), Some(target));
    }
    true
}

fn loose_market_id(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|id| id.is_finite()),
        Value::String(raw) => raw.trim().parse::<f64>().ok().filter(|id| id.is_finite()),
        _ => None,
    }
}

/// Maps a position. The `sign` field is authoritative: the magnitude is
/// re-signed from it, and a zero sign forces a flat amount regardless of
/// the reported magnitude.
fn position_to_aster(symbol: &str, position: &LighterPosition) -> AsterAccountPosition {
    let sign = position.sign;
    let position_side = if sign > 0 {
        PositionSide::Long
    } else if sign < 0 {
        PositionSide::Short
    } else {
        PositionSide::Both
    };
    let magnitude = position
        .position
        .as_deref()
        .unwrap_or("0")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite());
    let signed = if sign == 0 {
        Some(0.0)
    } else {
        magnitude.map(|value| if sign < 0 { -value.abs() } else { value.abs() })
    };
    let position_amt = match signed {
        Some(value) => (if value == 0.0 { 0.0 } else { value }).to_string(),
        None => position.position.clone().unwrap_or_else(|| "0".to_string()),
    };
    AsterAccountPosition {
        symbol: symbol.to_string(),
        position_amt,
        entry_price: position
            .avg_entry_price
            .clone()
            .unwrap_or_else(|| "0".to_string()),
        unrealized_profit: position
            .unrealized_pnl
            .clone()
            .unwrap_or_else(|| "0".to_string()),
        position_side,
        update_time: now_millis(),
        liquidation_price: position.liquidation_price.clone(),
        maint_margin: None,
        initial_margin: position.allocated_margin.clone(),
        margin_type: if position.margin_mode == Some(1) {
            MarginType::Isolated
        } else {
            MarginType::Cross
        },
        mark_price: None,
    }
}

/// Collateral is USDC-denominated; a single synthetic entry stands in when
/// the caller supplies no asset list.
fn default_assets(details: &LighterAccountDetails) -> Vec<AsterAccountAsset> {
    let collateral = details.collateral.clone().unwrap_or_else(|| "0".to_string());
    vec![AsterAccountAsset {
        asset: "USDC".to_string(),
        wallet_balance: collateral.clone(),
        available_balance: details
            .available_balance
            .clone()
            .unwrap_or(collateral),
        update_time: now_millis(),
    }]
}

/// Maps per-market trading rules into the unified symbol info.
pub fn to_symbol_info(metadata: &LighterOrderBookMetadata) -> AsterSymbolInfo {
    let status = match metadata.status.trim().to_lowercase().as_str() {
        "active" => SymbolStatus::Trading,
        "frozen" => SymbolStatus::Halt,
        _ => SymbolStatus::Inactive,
    };
    AsterSymbolInfo {
        symbol: metadata.symbol.clone(),
        market_id: metadata.market_id,
        status,
        price_precision: metadata.supported_price_decimals,
        quantity_precision: metadata.supported_size_decimals,
        min_qty: metadata.min_base_amount.clone(),
        min_notional: metadata.min_quote_amount.clone(),
        maker_fee: metadata.maker_fee.clone(),
        taker_fee: metadata.taker_fee.clone(),
    }
}
