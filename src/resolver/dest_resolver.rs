use log::debug;

use crate::assets::assets_errors::{AssetError, Result};
use crate::assets::AssetInfo;
use crate::currency::{CurrencyRef, LocationRef, SymbolRef};
use crate::registry::chain_policy::{is_stablecoin_symbol, ResolutionPolicy};
use crate::registry::AssetRegistry;

use super::best_matches::{find_best_matches, MatchField};
use super::resolver_service::{resolve, resolve_or_throw};

/// Resolves the destination chain's record of the asset a currency reference
/// names on the origin.
///
/// The origin resolution must succeed; the destination record is then looked
/// up by the origin asset's location when it carries one, with a plain symbol
/// search as the fallback. Same-value bridge pairs skip the location step,
/// since both sides list the asset under different locations on purpose, and
/// instead resolve with the native selector first, then the stablecoin list,
/// then the foreign selector.
pub fn resolve_on_destination(
    registry: &AssetRegistry,
    origin: &str,
    destination: &str,
    currency: &CurrencyRef,
) -> Result<Option<AssetInfo>> {
    let origin_asset = resolve_or_throw(registry, origin, currency, Some(destination))?;
    debug!(
        "resolving {} from {origin} on destination {destination}",
        origin_asset.symbol().unwrap_or("<no symbol>")
    );

    let policy = ResolutionPolicy::for_route(origin, Some(destination));
    if policy.same_value_bridge {
        return resolve_across_bridge_pair(registry, destination, &origin_asset);
    }

    if let Some(location) = origin_asset.location() {
        let reference = CurrencyRef::Location(LocationRef::Value(location.clone()));
        if let Some(asset) = resolve(registry, destination, &reference, None)? {
            return Ok(Some(asset));
        }
    }

    let Some(symbol) = origin_asset.symbol() else {
        return Ok(None);
    };
    let reference = CurrencyRef::Symbol(SymbolRef::Plain(symbol.to_string()));
    resolve(registry, destination, &reference, None)
}

/// Same-value bridge pair: the destination lists the asset under its own
/// identity, so the native record is preferred over a foreign one of the same
/// symbol. Stablecoins missing from the native list are matched against the
/// destination's stablecoin assets before the foreign selector runs.
fn resolve_across_bridge_pair(
    registry: &AssetRegistry,
    destination: &str,
    origin_asset: &AssetInfo,
) -> Result<Option<AssetInfo>> {
    let Some(symbol) = origin_asset.symbol() else {
        return Ok(None);
    };

    let native = CurrencyRef::Symbol(SymbolRef::Native(symbol.to_string()));
    if let Some(asset) = resolve(registry, destination, &native, None)? {
        return Ok(Some(asset));
    }

    if is_stablecoin_symbol(symbol) {
        let stables = registry.stablecoin_assets(destination)?;
        if let Some(asset) = find_best_matches(&stables, symbol, MatchField::Symbol).first() {
            return Ok(Some((*asset).clone()));
        }
    }

    let foreign = CurrencyRef::Symbol(SymbolRef::Foreign(symbol.to_string()));
    resolve(registry, destination, &foreign, None)
}

/// Destination resolution that treats a miss as an error.
pub fn resolve_on_destination_or_throw(
    registry: &AssetRegistry,
    origin: &str,
    destination: &str,
    currency: &CurrencyRef,
) -> Result<AssetInfo> {
    resolve_on_destination(registry, origin, destination, currency)?.ok_or_else(|| {
        AssetError::NotFound(format!(
            "Asset with {} from {origin} not found on destination {destination}.",
            currency.describe()
        ))
    })
}
