//! Market data normalization interfaces

pub mod normalizers;
pub mod symbol_mapper;
pub mod universal;

pub use normalizers::LighterNormalizer;
pub use symbol_mapper::{normalize_symbol_forms, symbols_match};
pub use universal::MarketDataNormalizer;
