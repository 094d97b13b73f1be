use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::location::Location;

/// Domain model representing a chain's own issued token
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NativeAssetInfo {
    pub symbol: String,
    pub decimals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existential_deposit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fee_asset: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_native: Option<bool>,
}

/// Domain model representing an asset registered on a chain but issued elsewhere,
/// identified by a registry id and/or a location
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForeignAssetInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existential_deposit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fee_asset: Option<bool>,
}

impl ForeignAssetInfo {
    /// A foreign asset without an id or a location cannot be looked up by identifier.
    pub fn is_identifiable(&self) -> bool {
        self.asset_id.is_some() || self.location.is_some()
    }
}

/// A resolved asset record, either the chain's own token or a registered foreign asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AssetInfo {
    Foreign(ForeignAssetInfo),
    Native(NativeAssetInfo),
}

impl AssetInfo {
    pub fn symbol(&self) -> Option<&str> {
        match self {
            AssetInfo::Native(asset) => Some(asset.symbol.as_str()),
            AssetInfo::Foreign(asset) => asset.symbol.as_deref(),
        }
    }

    pub fn decimals(&self) -> u32 {
        match self {
            AssetInfo::Native(asset) => asset.decimals,
            AssetInfo::Foreign(asset) => asset.decimals,
        }
    }

    pub fn asset_id(&self) -> Option<&str> {
        match self {
            AssetInfo::Native(_) => None,
            AssetInfo::Foreign(asset) => asset.asset_id.as_deref(),
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            AssetInfo::Native(asset) => asset.location.as_ref(),
            AssetInfo::Foreign(asset) => asset.location.as_ref(),
        }
    }

    pub fn alias(&self) -> Option<&str> {
        match self {
            AssetInfo::Native(_) => None,
            AssetInfo::Foreign(asset) => asset.alias.as_deref(),
        }
    }

    /// The minimum balance the chain requires for this asset, as listed in the registry.
    pub fn existential_deposit(&self) -> Option<&str> {
        match self {
            AssetInfo::Native(asset) => asset.existential_deposit.as_deref(),
            AssetInfo::Foreign(asset) => asset.existential_deposit.as_deref(),
        }
    }

    /// Decimal view of the existential deposit. Returns `None` when the registry
    /// carries no deposit or an unparsable one.
    pub fn existential_deposit_decimal(&self) -> Option<Decimal> {
        self.existential_deposit()
            .and_then(|raw| Decimal::from_str(raw).ok())
    }

    pub fn is_fee_asset(&self) -> bool {
        match self {
            AssetInfo::Native(asset) => asset.is_fee_asset.unwrap_or(false),
            AssetInfo::Foreign(asset) => asset.is_fee_asset.unwrap_or(false),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native(_))
    }
}

impl From<NativeAssetInfo> for AssetInfo {
    fn from(asset: NativeAssetInfo) -> Self {
        AssetInfo::Native(asset)
    }
}

impl From<ForeignAssetInfo> for AssetInfo {
    fn from(asset: ForeignAssetInfo) -> Self {
        AssetInfo::Foreign(asset)
    }
}
