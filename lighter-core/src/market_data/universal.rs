//! Universal market data normalization trait

use crate::exchanges::types::{
    AsterAccountSnapshot, AsterDepth, AsterKline, AsterOrder, AsterTicker,
};
use anyhow::Result;

/// Trait for normalizing exchange-specific payloads to the Aster schema.
///
/// Implementations deserialize raw JSON bytes and delegate to pure
/// mappers; undecodable input is the only failure mode.
pub trait MarketDataNormalizer: Send + Sync {
    fn normalize_depth(&self, raw: &[u8]) -> Result<AsterDepth>;
    fn normalize_ticker(&self, raw: &[u8]) -> Result<AsterTicker>;
    fn normalize_klines(&self, raw: &[u8]) -> Result<Vec<AsterKline>>;
    fn normalize_orders(&self, raw: &[u8]) -> Result<Vec<AsterOrder>>;
    fn normalize_account(&self, raw: &[u8]) -> Result<AsterAccountSnapshot>;
    fn exchange_name(&self) -> &str;
}
