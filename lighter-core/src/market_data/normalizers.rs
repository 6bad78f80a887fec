//! Exchange-specific normalizers

use serde_json::Value;
use tracing::{debug, warn};

use super::universal::MarketDataNormalizer;
use crate::exchanges::errors::ExchangeError;
use crate::exchanges::lighter::feed::should_reset_market_orders;
use crate::exchanges::lighter::mappers::{
    to_account_snapshot, to_depth, to_klines, to_orders, to_symbol_info, SnapshotFilter,
    to_ticker,
};
use crate::exchanges::lighter::types::{
    LighterAccountDetails, LighterAccountMarketUpdate, LighterKline, LighterMarketStats,
    LighterOrder, LighterOrderBookMetadata, LighterOrderBookSnapshot,
};
use crate::exchanges::types::{
    AsterAccountSnapshot, AsterDepth, AsterKline, AsterOrder, AsterSymbolInfo, AsterTicker,
};
use anyhow::Result;

/// Lighter data normalizer, bound to one target market.
pub struct LighterNormalizer {
    symbol: String,
    interval: String,
    filter: SnapshotFilter,
}

impl LighterNormalizer {
    /// Creates a normalizer for `symbol`, with `interval` labelling mapped
    /// klines. Rejects a blank symbol.
    pub fn new(
        symbol: impl Into<String>,
        interval: impl Into<String>,
    ) -> Result<Self, ExchangeError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(ExchangeError::InvalidSymbol(symbol));
        }
        Ok(Self {
            symbol,
            interval: interval.into(),
            filter: SnapshotFilter::default(),
        })
    }

    /// Narrows account snapshots to one market when filtering is wanted.
    pub fn with_market_filter(
        mut self,
        market_id: Option<i64>,
        market_symbol: Option<String>,
    ) -> Self {
        self.filter = SnapshotFilter {
            market_id,
            market_symbol,
        };
        self
    }

    /// Normalizes per-market trading rules.
    pub fn normalize_symbol_info(&self, raw: &[u8]) -> Result<AsterSymbolInfo> {
        let metadata: LighterOrderBookMetadata =
            serde_json::from_slice(raw).map_err(ExchangeError::from)?;
        Ok(to_symbol_info(&metadata))
    }

    /// Normalizes a per-market account channel update, returning the
    /// mapped orders and whether the cached orders for the market must be
    /// replaced before applying them. The cache itself is owned by the
    /// feed collaborator.
    pub fn normalize_account_update(
        &self,
        raw: &[u8],
        is_snapshot: bool,
    ) -> Result<(Vec<AsterOrder>, bool)> {
        let update: LighterAccountMarketUpdate =
            serde_json::from_slice(raw).map_err(ExchangeError::from)?;
        let reset = should_reset_market_orders(Some(&update.orders), is_snapshot);
        let orders: Vec<LighterOrder> = match &update.orders {
            Value::Null => Vec::new(),
            Value::Array(entries) => entries
                .iter()
                .filter_map(|entry| decode_bucket_order(entry))
                .collect(),
            Value::Object(entries) => entries
                .values()
                .filter_map(|entry| decode_bucket_order(entry))
                .collect(),
            other => {
                return Err(ExchangeError::UnexpectedPayload(format!(
                    "order bucket is not a container: {other}"
                ))
                .into());
            }
        };
        Ok((to_orders(&self.symbol, &orders), reset))
    }
}

fn decode_bucket_order(entry: &Value) -> Option<LighterOrder> {
    match serde_json::from_value(entry.clone()) {
        Ok(order) => Some(order),
        Err(error) => {
            warn!(%error, "dropping undecodable order bucket entry");
            None
        }
    }
}

impl MarketDataNormalizer for LighterNormalizer {
    fn normalize_depth(&self, raw: &[u8]) -> Result<AsterDepth> {
        let snapshot: LighterOrderBookSnapshot =
            serde_json::from_slice(raw).map_err(ExchangeError::from)?;
        debug!(symbol = %self.symbol, "normalized depth snapshot");
        Ok(to_depth(&self.symbol, &snapshot))
    }

    fn normalize_ticker(&self, raw: &[u8]) -> Result<AsterTicker> {
        let stats: LighterMarketStats =
            serde_json::from_slice(raw).map_err(ExchangeError::from)?;
        Ok(to_ticker(&self.symbol, &stats))
    }

    fn normalize_klines(&self, raw: &[u8]) -> Result<Vec<AsterKline>> {
        let klines: Vec<LighterKline> =
            serde_json::from_slice(raw).map_err(ExchangeError::from)?;
        Ok(to_klines(&self.symbol, &self.interval, &klines))
    }

    fn normalize_orders(&self, raw: &[u8]) -> Result<Vec<AsterOrder>> {
        let orders: Vec<LighterOrder> =
            serde_json::from_slice(raw).map_err(ExchangeError::from)?;
        Ok(to_orders(&self.symbol, &orders))
    }

    fn normalize_account(&self, raw: &[u8]) -> Result<AsterAccountSnapshot> {
        let details: LighterAccountDetails =
            serde_json::from_slice(raw).map_err(ExchangeError::from)?;
        // Positions ride inside the account payload.
        Ok(to_account_snapshot(
            &self.symbol,
            &details,
            &details.positions,
            Vec::new(),
            &self.filter,
        ))
    }

    fn exchange_name(&self) -> &str {
        "Lighter"
    }
}
