use crate::assets::assets_constants::{BRIDGED_ASSET_SUFFIX, WRAPPED_ASSET_PREFIX};

/// Canonicalizes an asset symbol for comparison: lowercases it, then strips
/// the wrapped-asset prefix and the bridged-asset suffix. Empty input stays
/// empty. Idempotent.
pub fn normalize_symbol(symbol: &str) -> String {
    if symbol.is_empty() {
        return String::new();
    }

    let mut normalized = symbol.to_lowercase();
    if let Some(stripped) = normalized.strip_prefix(WRAPPED_ASSET_PREFIX) {
        normalized = stripped.to_string();
    }
    if let Some(stripped) = normalized.strip_suffix(BRIDGED_ASSET_SUFFIX) {
        normalized = stripped.to_string();
    }
    normalized
}
