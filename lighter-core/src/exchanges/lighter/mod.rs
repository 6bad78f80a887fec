//! Lighter exchange wire types, coercion helpers and entity mappers

pub mod feed;
pub mod flags;
pub mod identity;
pub mod mappers;
pub mod types;

pub use feed::should_reset_market_orders;
pub use flags::{coerce_boolean_flag, normalize_boolean_flag};
pub use identity::{normalize_order_identity, order_identity_equals};
pub use mappers::{
    order_to_aster, to_account_snapshot, to_depth, to_klines, to_orders, to_symbol_info,
    to_ticker, SnapshotFilter,
};
pub use types::{
    LighterAccountDetails, LighterAccountMarketUpdate, LighterKline, LighterMarketStats,
    LighterOrder, LighterOrderBookLevel, LighterOrderBookMetadata, LighterOrderBookSnapshot,
    LighterPosition,
};
