use log::debug;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::assets::assets_constants::{BRIDGED_ASSET_SUFFIX, WRAPPED_ASSET_PREFIX};
use crate::assets::assets_errors::{AssetError, Result};
use crate::assets::{AssetInfo, ForeignAssetInfo, NativeAssetInfo};
use crate::currency::CurrencyRef;
use crate::resolver::resolver_service::resolve;

use super::chain_policy::{
    is_stablecoin_symbol, BRIDGE_CHAIN, BRIDGE_GATEWAY_CHAIN, DRY_RUN_DISABLED_CHAINS,
    XCM_PAYMENT_API_DISABLED_CHAINS,
};
use super::registry_model::ChainAssets;

static BUNDLED: OnceLock<AssetRegistry> = OnceLock::new();

/// Read-only handle over the per-chain asset registries.
///
/// Resolution functions take this handle explicitly, so tests can substitute
/// synthetic registries. The handle never mutates its data; arbitrarily many
/// resolutions may share it concurrently.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    chains: HashMap<String, ChainAssets>,
}

impl AssetRegistry {
    /// Creates a registry handle over an already-loaded chain map.
    pub fn new(chains: HashMap<String, ChainAssets>) -> Self {
        Self { chains }
    }

    /// Parses a registry from its JSON map serialization.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let chains: HashMap<String, ChainAssets> = serde_json::from_str(json)?;
        debug!("loaded asset registry for {} chains", chains.len());
        Ok(Self { chains })
    }

    /// The registry bundled with the crate, parsed once per process.
    pub fn bundled() -> &'static AssetRegistry {
        BUNDLED.get_or_init(|| {
            Self::from_json_str(include_str!("maps/assets.json"))
                .expect("bundled registry map is valid JSON")
        })
    }

    /// Chain identifiers known to this registry.
    pub fn chains(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    /// Retrieves the assets record for a given chain.
    pub fn chain_assets(&self, chain: &str) -> Result<&ChainAssets> {
        self.chains
            .get(chain)
            .ok_or_else(|| AssetError::UnknownChain(chain.to_string()))
    }

    /// Retrieves the list of native assets for a chain.
    pub fn native_assets(&self, chain: &str) -> Result<&[NativeAssetInfo]> {
        Ok(&self.chain_assets(chain)?.native_assets)
    }

    /// Retrieves the list of foreign assets for a chain. The bridge gateway
    /// chain also sees the bridge chain's assets.
    pub fn other_assets(&self, chain: &str) -> Result<Vec<ForeignAssetInfo>> {
        let mut assets = self.chain_assets(chain)?.other_assets.clone();
        if chain == BRIDGE_GATEWAY_CHAIN {
            if let Ok(bridge) = self.chain_assets(BRIDGE_CHAIN) {
                assets.extend(bridge.other_assets.iter().cloned());
            }
        }
        Ok(assets)
    }

    /// All assets of a chain, native first.
    pub fn assets(&self, chain: &str) -> Result<Vec<AssetInfo>> {
        let record = self.chain_assets(chain)?;
        let mut assets: Vec<AssetInfo> = record
            .native_assets
            .iter()
            .cloned()
            .map(AssetInfo::from)
            .collect();
        assets.extend(self.other_assets(chain)?.into_iter().map(AssetInfo::from));
        Ok(assets)
    }

    /// Symbols of every asset listed for a chain.
    pub fn all_asset_symbols(&self, chain: &str) -> Result<Vec<String>> {
        let record = self.chain_assets(chain)?;
        let mut symbols: Vec<String> = record
            .native_assets
            .iter()
            .map(|asset| asset.symbol.clone())
            .collect();
        symbols.extend(
            self.other_assets(chain)?
                .into_iter()
                .filter_map(|asset| asset.symbol),
        );
        Ok(symbols)
    }

    /// The symbol of a chain's own token. The bridge chain has no registry
    /// entry for its gas token, so it is pinned here.
    pub fn native_asset_symbol(&self, chain: &str) -> Result<String> {
        if chain == BRIDGE_CHAIN {
            return Ok("ETH".to_string());
        }
        Ok(self.chain_assets(chain)?.native_asset_symbol.clone())
    }

    /// The relay-chain asset symbol a chain settles against.
    pub fn relay_chain_symbol(&self, chain: &str) -> Result<String> {
        Ok(self.chain_assets(chain)?.relay_chain_asset_symbol.clone())
    }

    pub fn is_chain_evm(&self, chain: &str) -> Result<bool> {
        Ok(self.chain_assets(chain)?.is_evm)
    }

    pub fn has_dry_run_support(&self, chain: &str) -> Result<bool> {
        Ok(self.chain_assets(chain)?.supports_dry_run_api
            && !DRY_RUN_DISABLED_CHAINS.contains(&chain))
    }

    pub fn has_xcm_payment_api_support(&self, chain: &str) -> Result<bool> {
        Ok(self.chain_assets(chain)?.supports_xcm_payment_api
            && !XCM_PAYMENT_API_DISABLED_CHAINS.contains(&chain))
    }

    /// The registry id of the foreign asset listed under the exact symbol.
    pub fn asset_id(&self, chain: &str, symbol: &str) -> Result<Option<String>> {
        Ok(self
            .chain_assets(chain)?
            .other_assets
            .iter()
            .find(|asset| asset.symbol.as_deref() == Some(symbol))
            .and_then(|asset| asset.asset_id.clone()))
    }

    /// The number of decimals for the asset listed under the exact symbol.
    pub fn asset_decimals(&self, chain: &str, symbol: &str) -> Result<Option<u32>> {
        let record = self.chain_assets(chain)?;
        let foreign = record
            .other_assets
            .iter()
            .find(|asset| asset.symbol.as_deref() == Some(symbol))
            .map(|asset| asset.decimals);
        Ok(foreign.or_else(|| {
            record
                .native_assets
                .iter()
                .find(|asset| asset.symbol == symbol)
                .map(|asset| asset.decimals)
        }))
    }

    /// Whether a chain lists the symbol under any of its wrapped/bridged
    /// spellings (xc prefix toggled, .e suffix toggled).
    pub fn has_support_for_asset(&self, chain: &str, symbol: &str) -> Result<bool> {
        let lower = symbol.to_lowercase();
        let mut spellings = HashSet::new();
        spellings.insert(lower.clone());
        if let Some(stripped) = lower.strip_prefix(WRAPPED_ASSET_PREFIX) {
            spellings.insert(stripped.to_string());
        } else {
            spellings.insert(format!("{WRAPPED_ASSET_PREFIX}{lower}"));
        }
        if let Some(stripped) = lower.strip_suffix(BRIDGED_ASSET_SUFFIX) {
            spellings.insert(stripped.to_string());
        } else {
            spellings.insert(format!("{lower}{BRIDGED_ASSET_SUFFIX}"));
        }

        Ok(self
            .all_asset_symbols(chain)?
            .iter()
            .any(|listed| spellings.contains(&listed.to_lowercase())))
    }

    /// Assets of a chain whose symbol names a stablecoin.
    pub fn stablecoin_assets(&self, chain: &str) -> Result<Vec<AssetInfo>> {
        Ok(self
            .assets(chain)?
            .into_iter()
            .filter(|asset| asset.symbol().is_some_and(is_stablecoin_symbol))
            .collect())
    }

    /// Assets the chain accepts for fee payment.
    pub fn fee_assets(&self, chain: &str) -> Result<Vec<AssetInfo>> {
        Ok(self
            .assets(chain)?
            .into_iter()
            .filter(AssetInfo::is_fee_asset)
            .collect())
    }

    /// Assets listed on the origin chain that the destination also supports
    /// under some spelling.
    pub fn supported_assets(&self, origin: &str, destination: &str) -> Result<Vec<AssetInfo>> {
        let mut supported = Vec::new();
        for asset in self.assets(origin)? {
            let Some(symbol) = asset.symbol() else {
                continue;
            };
            if self.has_support_for_asset(destination, symbol)? {
                supported.push(asset);
            }
        }
        Ok(supported)
    }

    /// The existential deposit for a currency on a chain, as the registry's
    /// decimal string. Without a currency reference the chain's first native
    /// asset is used.
    pub fn existential_deposit(
        &self,
        chain: &str,
        currency: Option<&CurrencyRef>,
    ) -> Result<Option<String>> {
        match currency {
            Some(currency) => Ok(resolve(self, chain, currency, None)?
                .and_then(|asset| asset.existential_deposit().map(str::to_string))),
            None => Ok(self
                .native_assets(chain)?
                .first()
                .and_then(|asset| asset.existential_deposit.clone())),
        }
    }

    /// Decimal view of [`Self::existential_deposit`].
    pub fn existential_deposit_decimal(
        &self,
        chain: &str,
        currency: Option<&CurrencyRef>,
    ) -> Result<Option<Decimal>> {
        Ok(self
            .existential_deposit(chain, currency)?
            .and_then(|raw| Decimal::from_str(&raw).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> AssetRegistry {
        let json = r#"{
            "Acala": {
                "nativeAssetSymbol": "ACA",
                "relayChainAssetSymbol": "DOT",
                "isEVM": false,
                "supportsDryRunApi": true,
                "supportsXcmPaymentApi": true,
                "nativeAssets": [
                    { "symbol": "ACA", "decimals": 12, "existentialDeposit": "100000000000", "isNative": true }
                ],
                "otherAssets": [
                    { "symbol": "DOT", "assetId": "DOT", "decimals": 10, "existentialDeposit": "100000000", "isFeeAsset": true }
                ]
            },
            "AssetHubPolkadot": {
                "nativeAssetSymbol": "DOT",
                "relayChainAssetSymbol": "DOT",
                "supportsDryRunApi": true,
                "supportsXcmPaymentApi": true,
                "nativeAssets": [{ "symbol": "DOT", "decimals": 10, "isNative": true }],
                "otherAssets": [{ "symbol": "USDt", "assetId": "1984", "decimals": 6 }]
            },
            "Ethereum": {
                "nativeAssetSymbol": "ETH",
                "relayChainAssetSymbol": "DOT",
                "isEVM": true,
                "otherAssets": [{ "symbol": "WETH", "assetId": "0xc02a", "decimals": 18 }]
            }
        }"#;
        AssetRegistry::from_json_str(json).expect("valid registry json")
    }

    #[test]
    fn unknown_chain_is_an_error() {
        let registry = registry();
        assert!(matches!(
            registry.chain_assets("Narnia"),
            Err(AssetError::UnknownChain(_))
        ));
    }

    #[test]
    fn gateway_chain_sees_bridge_assets() {
        let registry = registry();
        let assets = registry.other_assets("AssetHubPolkadot").unwrap();
        let symbols: Vec<_> = assets.iter().filter_map(|a| a.symbol.as_deref()).collect();
        assert!(symbols.contains(&"USDt"));
        assert!(symbols.contains(&"WETH"));

        // Other chains see only their own list.
        let acala = registry.other_assets("Acala").unwrap();
        assert_eq!(acala.len(), 1);
    }

    #[test]
    fn bridge_chain_native_symbol_is_pinned() {
        let registry = registry();
        assert_eq!(registry.native_asset_symbol("Ethereum").unwrap(), "ETH");
        assert_eq!(registry.native_asset_symbol("Acala").unwrap(), "ACA");
    }

    #[test]
    fn support_check_covers_affix_spellings() {
        let registry = registry();
        assert!(registry.has_support_for_asset("Acala", "DOT").unwrap());
        assert!(registry.has_support_for_asset("Acala", "xcDOT").unwrap());
        assert!(registry.has_support_for_asset("Ethereum", "WETH.e").unwrap());
        assert!(!registry.has_support_for_asset("Acala", "GLMR").unwrap());
    }

    #[test]
    fn stablecoin_assets_filter_on_symbol() {
        let registry = registry();
        let stables = registry.stablecoin_assets("AssetHubPolkadot").unwrap();
        assert_eq!(stables.len(), 1);
        assert_eq!(stables[0].symbol(), Some("USDt"));
        assert!(registry.stablecoin_assets("Ethereum").unwrap().is_empty());
    }

    #[test]
    fn fee_assets_filters_on_flag() {
        let registry = registry();
        let fee_assets = registry.fee_assets("Acala").unwrap();
        assert_eq!(fee_assets.len(), 1);
        assert_eq!(fee_assets[0].symbol(), Some("DOT"));
    }

    #[test]
    fn existential_deposit_defaults_to_native_asset() {
        let registry = registry();
        assert_eq!(
            registry.existential_deposit("Acala", None).unwrap(),
            Some("100000000000".to_string())
        );
        let dot = CurrencyRef::symbol("DOT");
        assert_eq!(
            registry.existential_deposit("Acala", Some(&dot)).unwrap(),
            Some("100000000".to_string())
        );
    }

    #[test]
    fn asset_metadata_lookups() {
        let registry = registry();
        assert_eq!(
            registry.asset_id("AssetHubPolkadot", "USDt").unwrap(),
            Some("1984".to_string())
        );
        assert_eq!(registry.asset_decimals("Acala", "ACA").unwrap(), Some(12));
        assert_eq!(registry.asset_decimals("Acala", "DOT").unwrap(), Some(10));
        assert!(registry.is_chain_evm("Ethereum").unwrap());
    }
}
