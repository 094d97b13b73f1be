//! Central policy table for chain-specific resolution behavior. Every
//! special case the resolver honors is declared here and queried once at
//! the top of a resolution call instead of being re-checked inline.

/// The externally bridged chain whose asset registry is consulted as a
/// fallback or override during resolution.
pub const BRIDGE_CHAIN: &str = "Ethereum";

/// Chain whose foreign-asset view also exposes the bridge chain's assets.
pub const BRIDGE_GATEWAY_CHAIN: &str = "AssetHubPolkadot";

/// Origin/destination pairs that exchange their respective relay-chain
/// assets at equal value; destination resolution skips the location lookup
/// for these and goes straight to the symbol fallback.
pub const SAME_VALUE_BRIDGE_PAIRS: [(&str, &str); 2] = [
    ("AssetHubPolkadot", "AssetHubKusama"),
    ("AssetHubKusama", "AssetHubPolkadot"),
];

/// Stablecoin symbols in their normalized spelling. Destination resolution
/// across a same-value bridge pair falls back to these when the native
/// lookup misses.
pub const STABLECOIN_SYMBOLS: [&str; 3] = ["usdt", "usdc", "dai"];

/// Whether a symbol names a stablecoin, under any affix spelling.
pub fn is_stablecoin_symbol(symbol: &str) -> bool {
    STABLECOIN_SYMBOLS.contains(&crate::currency::normalize_symbol(symbol).as_str())
}

/// Chains that advertise the dry-run API but where it is not usable.
pub const DRY_RUN_DISABLED_CHAINS: [&str; 2] = ["Basilisk", "Jamton"];

/// Chains that advertise the payment-query API but where it is not usable.
pub const XCM_PAYMENT_API_DISABLED_CHAINS: [&str; 3] = ["IntegriteePaseo", "Basilisk", "Jamton"];

/// Behavior flags for one resolution call, computed once at dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionPolicy {
    /// Redirect the search to the bridge chain's foreign-asset list.
    pub redirect_to_bridge: bool,
    /// Origin/destination form a same-value bridge pair.
    pub same_value_bridge: bool,
}

impl ResolutionPolicy {
    pub fn for_route(origin: &str, destination: Option<&str>) -> Self {
        let redirect_to_bridge = destination == Some(BRIDGE_CHAIN);
        let same_value_bridge = destination.is_some_and(|destination| {
            SAME_VALUE_BRIDGE_PAIRS
                .iter()
                .any(|(from, to)| *from == origin && *to == destination)
        });
        Self {
            redirect_to_bridge,
            same_value_bridge,
        }
    }
}
