use log::debug;

use crate::assets::assets_errors::{AssetError, Result};
use crate::assets::{AssetInfo, ForeignAssetInfo};
use crate::currency::CurrencyRef;
use crate::registry::chain_policy::ResolutionPolicy;
use crate::registry::{AssetRegistry, BRIDGE_CHAIN};

use super::location_search::find_asset_by_location;
use super::symbol_search::find_asset_by_symbol;

/// Resolves a currency reference against a chain's registry entry.
///
/// `destination` feeds the route policy: sending towards the bridge chain
/// redirects the search to the bridge chain's asset list. Override and
/// pre-built references are already resolved and yield `None` untouched.
pub fn resolve(
    registry: &AssetRegistry,
    chain: &str,
    currency: &CurrencyRef,
    destination: Option<&str>,
) -> Result<Option<AssetInfo>> {
    let policy = ResolutionPolicy::for_route(chain, destination);
    debug!(
        "resolving {} on {chain} (destination {destination:?})",
        currency.describe()
    );

    match currency {
        CurrencyRef::OverrideLocation(_) | CurrencyRef::Assets(_) => Ok(None),
        CurrencyRef::Symbol(symbol) => {
            let bridge_assets = bridge_assets(registry);
            let other_assets = registry.other_assets(chain)?;
            let native_assets = registry.native_assets(chain)?;
            find_asset_by_symbol(policy, &bridge_assets, &other_assets, native_assets, symbol)
        }
        CurrencyRef::Location(location) => {
            let other_assets = if policy.redirect_to_bridge {
                bridge_assets(registry)
            } else {
                registry.other_assets(chain)?
            };
            let native_assets = registry.native_assets(chain)?;
            find_asset_by_location(&other_assets, native_assets, location)
        }
        CurrencyRef::Id(id) => {
            if policy.redirect_to_bridge {
                // The subset of assets the route actually supports is searched
                // before the bridge chain's raw list, so a raw-list id
                // collision does not shadow the one routable record.
                let compatible = registry.supported_assets(chain, BRIDGE_CHAIN)?;
                if let Some(asset) = find_asset_by_id(&compatible, id)? {
                    return Ok(Some(asset));
                }
                let bridge: Vec<AssetInfo> = bridge_assets(registry)
                    .into_iter()
                    .map(AssetInfo::from)
                    .collect();
                return find_asset_by_id(&bridge, id);
            }
            let assets: Vec<AssetInfo> = registry
                .other_assets(chain)?
                .into_iter()
                .map(AssetInfo::from)
                .collect();
            find_asset_by_id(&assets, id)
        }
    }
}

/// Resolution that treats a miss as an error, with the reference spelled out
/// in the message.
pub fn resolve_or_throw(
    registry: &AssetRegistry,
    chain: &str,
    currency: &CurrencyRef,
    destination: Option<&str>,
) -> Result<AssetInfo> {
    resolve(registry, chain, currency, destination)?.ok_or_else(|| {
        AssetError::NotFound(format!(
            "Asset with {} not found on {chain}.",
            currency.describe()
        ))
    })
}

fn bridge_assets(registry: &AssetRegistry) -> Vec<ForeignAssetInfo> {
    registry.other_assets(BRIDGE_CHAIN).unwrap_or_default()
}

/// Id path: exact string comparison against the registry ids. More than one
/// record under the same id within the searched list is a registry defect
/// surfaced as its own error kind.
fn find_asset_by_id(assets: &[AssetInfo], id: &str) -> Result<Option<AssetInfo>> {
    let matches: Vec<&AssetInfo> = assets
        .iter()
        .filter(|asset| asset.asset_id() == Some(id))
        .collect();
    if matches.len() > 1 {
        return Err(AssetError::DuplicateAssetId(format!(
            "Multiple assets found for id {id}."
        )));
    }
    Ok(matches.into_iter().next().cloned())
}
