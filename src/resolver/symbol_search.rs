use crate::assets::assets_constants::{BRIDGED_ASSET_SUFFIX, WRAPPED_ASSET_PREFIX};
use crate::assets::assets_errors::{AssetError, Result};
use crate::assets::{AssetInfo, ForeignAssetInfo, NativeAssetInfo};
use crate::currency::SymbolRef;
use crate::registry::chain_policy::ResolutionPolicy;

use super::best_matches::{find_best_matches, MatchField};
use super::duplicates::{ensure_unique, pick_foreign_or_err};

fn ends_with_bridged_suffix(value: &str) -> bool {
    value.to_lowercase().ends_with(BRIDGED_ASSET_SUFFIX)
}

fn strip_bridged_suffix(value: &str) -> &str {
    &value[..value.len() - BRIDGED_ASSET_SUFFIX.len()]
}

/// Strips the wrapped-asset prefix when present, adds it otherwise.
fn toggle_wrapped_prefix(value: &str) -> String {
    if value.to_lowercase().starts_with(WRAPPED_ASSET_PREFIX) {
        value[WRAPPED_ASSET_PREFIX.len()..].to_string()
    } else {
        format!("{WRAPPED_ASSET_PREFIX}{value}")
    }
}

fn pick_any(
    native_matches: Vec<&NativeAssetInfo>,
    foreign_matches: Vec<&ForeignAssetInfo>,
) -> Option<AssetInfo> {
    foreign_matches
        .first()
        .map(|asset| (*asset).clone().into())
        .or_else(|| native_matches.first().map(|asset| (*asset).clone().into()))
}

/// Bridge destination override: the search is redirected entirely to the
/// bridge chain's list, trying the literal value and then the value with the
/// bridged suffix toggled. The first hit short-circuits without any further
/// cascade or duplicate checking against the origin chain's own lists.
fn find_bridge_match(bridge_assets: &[ForeignAssetInfo], value: &str) -> Option<AssetInfo> {
    let matches = find_best_matches(bridge_assets, value, MatchField::Symbol);
    if let Some(asset) = matches.first() {
        return Some((*asset).clone().into());
    }
    let toggled = if ends_with_bridged_suffix(value) {
        strip_bridged_suffix(value).to_lowercase()
    } else {
        format!("{value}{BRIDGED_ASSET_SUFFIX}").to_lowercase()
    };
    find_best_matches(bridge_assets, &toggled, MatchField::Symbol)
        .first()
        .map(|asset| (*asset).clone().into())
}

/// Symbol path of the resolver: fuzzy-matches the value against the chain's
/// asset lists according to the selector, falling back through the
/// wrapped-prefix and bridged-suffix spellings.
///
/// `bridge_assets` is the bridge chain's foreign-asset list, snapshotted once
/// by the dispatcher and reused across every cascade attempt of this call.
pub fn find_asset_by_symbol(
    policy: ResolutionPolicy,
    bridge_assets: &[ForeignAssetInfo],
    other_assets: &[ForeignAssetInfo],
    native_assets: &[NativeAssetInfo],
    symbol: &SymbolRef,
) -> Result<Option<AssetInfo>> {
    match symbol {
        SymbolRef::Native(value) => Ok(find_best_matches(native_assets, value, MatchField::Symbol)
            .first()
            .map(|asset| (*asset).clone().into())),
        SymbolRef::ForeignAbstract(alias) => {
            let matches = find_best_matches(other_assets, alias, MatchField::Alias);
            match matches.first() {
                Some(asset) => Ok(Some((*asset).clone().into())),
                None => Err(AssetError::InvalidAlias(format!(
                    "No matches found for foreign asset alias {alias}."
                ))),
            }
        }
        SymbolRef::Foreign(value) => {
            if policy.redirect_to_bridge {
                return Ok(find_bridge_match(bridge_assets, value));
            }
            if ends_with_bridged_suffix(value) {
                find_foreign_suffixed(bridge_assets, other_assets, value)
            } else {
                find_foreign_plain(other_assets, value)
            }
        }
        SymbolRef::Plain(value) => {
            if policy.redirect_to_bridge {
                return Ok(find_bridge_match(bridge_assets, value));
            }
            if ends_with_bridged_suffix(value) {
                find_any_suffixed(bridge_assets, other_assets, native_assets, value)
            } else {
                find_any_plain(other_assets, native_assets, value)
            }
        }
    }
}

/// Foreign selector, value without the bridged suffix: direct match, then the
/// prefix toggle, single-candidate rule throughout.
fn find_foreign_plain(
    other_assets: &[ForeignAssetInfo],
    value: &str,
) -> Result<Option<AssetInfo>> {
    let mut matches = find_best_matches(other_assets, value, MatchField::Symbol);
    if matches.is_empty() {
        matches = find_best_matches(other_assets, &toggle_wrapped_prefix(value), MatchField::Symbol);
    }
    Ok(pick_foreign_or_err(value, matches)?.map(|asset| asset.clone().into()))
}

/// Foreign selector, value carrying the bridged suffix: literal, prefix
/// toggle, the bridge chain's list without the suffix, and finally the
/// origin's own list without the suffix.
fn find_foreign_suffixed(
    bridge_assets: &[ForeignAssetInfo],
    other_assets: &[ForeignAssetInfo],
    value: &str,
) -> Result<Option<AssetInfo>> {
    let stripped = strip_bridged_suffix(value);

    let matches = find_best_matches(other_assets, value, MatchField::Symbol);
    if let Some(asset) = pick_foreign_or_err(value, matches)? {
        return Ok(Some(asset.clone().into()));
    }

    let matches =
        find_best_matches(other_assets, &toggle_wrapped_prefix(value), MatchField::Symbol);
    if let Some(asset) = pick_foreign_or_err(value, matches)? {
        return Ok(Some(asset.clone().into()));
    }

    // Interoperability shortcut: a hit on the bridge chain's registry is
    // returned even though it belongs to a different chain.
    let bridge_matches = find_best_matches(bridge_assets, stripped, MatchField::Symbol);
    if let Some(asset) = bridge_matches.first() {
        return Ok(Some((*asset).clone().into()));
    }

    let matches = find_best_matches(other_assets, stripped, MatchField::Symbol);
    Ok(pick_foreign_or_err(value, matches)?.map(|asset| asset.clone().into()))
}

/// Bare symbol, no bridged suffix: both lists are searched and the duplicate
/// policy is applied across the combined result, before and after the prefix
/// toggle fallback.
fn find_any_plain(
    other_assets: &[ForeignAssetInfo],
    native_assets: &[NativeAssetInfo],
    value: &str,
) -> Result<Option<AssetInfo>> {
    let mut foreign_matches = find_best_matches(other_assets, value, MatchField::Symbol);
    let mut native_matches = find_best_matches(native_assets, value, MatchField::Symbol);

    if foreign_matches.is_empty() && native_matches.is_empty() {
        let toggled = toggle_wrapped_prefix(value);
        foreign_matches = find_best_matches(other_assets, &toggled, MatchField::Symbol);
        native_matches = find_best_matches(native_assets, &toggled, MatchField::Symbol);
        ensure_unique(value, &native_matches, &foreign_matches)?;
    }

    ensure_unique(value, &native_matches, &foreign_matches)?;
    Ok(pick_any(native_matches, foreign_matches))
}

/// Bare symbol carrying the bridged suffix. A direct hit on either list wins
/// as-is; afterwards the cascade mirrors the foreign suffixed path with the
/// native list joining the final suffix-stripped attempt.
fn find_any_suffixed(
    bridge_assets: &[ForeignAssetInfo],
    other_assets: &[ForeignAssetInfo],
    native_assets: &[NativeAssetInfo],
    value: &str,
) -> Result<Option<AssetInfo>> {
    let stripped = strip_bridged_suffix(value);

    let foreign_matches = find_best_matches(other_assets, value, MatchField::Symbol);
    let native_matches = find_best_matches(native_assets, value, MatchField::Symbol);
    if !foreign_matches.is_empty() || !native_matches.is_empty() {
        return Ok(pick_any(native_matches, foreign_matches));
    }

    let matches =
        find_best_matches(other_assets, &toggle_wrapped_prefix(value), MatchField::Symbol);
    if let Some(asset) = pick_foreign_or_err(value, matches)? {
        return Ok(Some(asset.clone().into()));
    }

    let bridge_matches = find_best_matches(bridge_assets, stripped, MatchField::Symbol);
    if let Some(asset) = bridge_matches.first() {
        return Ok(Some((*asset).clone().into()));
    }

    let foreign_matches = find_best_matches(other_assets, stripped, MatchField::Symbol);
    let native_matches = find_best_matches(native_assets, stripped, MatchField::Symbol);
    Ok(pick_any(native_matches, foreign_matches))
}
