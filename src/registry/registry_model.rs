use serde::{Deserialize, Serialize};

use crate::assets::{ForeignAssetInfo, NativeAssetInfo};

/// Per-chain registry record: chain metadata plus the native and foreign
/// asset lists. Loaded externally and immutable for the lifetime of a
/// resolution call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChainAssets {
    pub native_asset_symbol: String,
    pub relay_chain_asset_symbol: String,
    #[serde(default, rename = "isEVM")]
    pub is_evm: bool,
    #[serde(default)]
    pub supports_dry_run_api: bool,
    #[serde(default)]
    pub supports_xcm_payment_api: bool,
    #[serde(default)]
    pub native_assets: Vec<NativeAssetInfo>,
    #[serde(default)]
    pub other_assets: Vec<ForeignAssetInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_registry_record() {
        let record: ChainAssets = serde_json::from_str(
            r#"{
                "nativeAssetSymbol": "DOT",
                "relayChainAssetSymbol": "DOT",
                "isEVM": false,
                "supportsDryRunApi": true,
                "supportsXcmPaymentApi": true,
                "nativeAssets": [{ "symbol": "DOT", "decimals": 10, "isNative": true }],
                "otherAssets": [{ "symbol": "USDt", "assetId": "1984", "decimals": 6 }]
            }"#,
        )
        .expect("valid chain record");

        assert_eq!(record.native_asset_symbol, "DOT");
        assert!(record.supports_dry_run_api);
        assert_eq!(record.native_assets.len(), 1);
        assert_eq!(record.other_assets[0].asset_id.as_deref(), Some("1984"));
    }
}
