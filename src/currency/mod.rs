pub(crate) mod currency_model;
pub(crate) mod symbol_normalizer;

// Re-export the public interface
pub use currency_model::{CurrencyRef, LocationRef, SymbolRef};
pub use symbol_normalizer::normalize_symbol;
