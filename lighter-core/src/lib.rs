//! Lighter → Aster Normalization Core
//!
//! A pure transformation layer converting Lighter exchange payloads
//! (order books, market statistics, candles, orders, account details,
//! positions) into the Aster unified schema consumed by the downstream
//! trading engine. Transport, signing and order caching live in external
//! collaborators; this crate only maps data.
//!
//! Malformed field data never fails a mapping: every mapper degrades to
//! documented defaults, and only undecodable payload bytes surface an
//! error at the [`market_data::MarketDataNormalizer`] seam.

pub mod exchanges;
pub mod market_data;

// Re-export main types for easy access
pub use exchanges::lighter::{
    coerce_boolean_flag, normalize_boolean_flag, normalize_order_identity,
    order_identity_equals, should_reset_market_orders, SnapshotFilter,
};
pub use exchanges::types::{
    AsterAccountAsset, AsterAccountPosition, AsterAccountSnapshot, AsterDepth, AsterKline,
    AsterOrder, AsterSymbolInfo, AsterTicker, MarginType, OrderSide, OrderType, PositionSide,
    SymbolStatus, WorkingType,
};
pub use exchanges::{ErrorKind, ExchangeError};
pub use market_data::{symbols_match, LighterNormalizer, MarketDataNormalizer};
