/// Symbol prefix chains use for wrapped cross-chain assets (e.g. xcDOT).
pub const WRAPPED_ASSET_PREFIX: &str = "xc";

/// Symbol suffix chains use for bridged assets (e.g. WETH.e).
pub const BRIDGED_ASSET_SUFFIX: &str = ".e";
