//! Exchange schema and wire-format modules

pub mod errors;
pub mod lighter;
pub mod types;

pub use errors::{ErrorKind, ExchangeError};
pub use types::{
    AsterAccountAsset, AsterAccountPosition, AsterAccountSnapshot, AsterDepth, AsterKline,
    AsterOrder, AsterSymbolInfo, AsterTicker, DepthLevel, MarginType, OrderSide, OrderType,
    PositionSide, SymbolStatus, WorkingType,
};
