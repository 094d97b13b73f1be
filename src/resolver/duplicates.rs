use crate::assets::assets_errors::{AssetError, Result};
use crate::assets::{ForeignAssetInfo, NativeAssetInfo};

/// Builds the ambiguity error for a symbol lookup that matched more than one
/// asset. The message enumerates the distinguishing fields so the caller can
/// retry with a more specific selector; a duplicate is never silently
/// resolved by picking the first candidate.
pub fn duplicate_asset_error(
    value: &str,
    native_matches: &[&NativeAssetInfo],
    foreign_matches: &[&ForeignAssetInfo],
) -> AssetError {
    if !native_matches.is_empty() && !foreign_matches.is_empty() {
        return AssetError::DuplicateAsset(format!(
            "Multiple assets found for {value}. Specify the asset kind with the Native() or Foreign() selector."
        ));
    }

    let candidates = foreign_matches
        .iter()
        .map(|asset| describe_candidate(value, asset))
        .collect::<Vec<_>>()
        .join(", ");
    AssetError::DuplicateAsset(format!(
        "Multiple foreign assets found for {value}: {candidates}. Specify the asset with the ForeignAbstract() selector."
    ))
}

fn describe_candidate(value: &str, asset: &ForeignAssetInfo) -> String {
    let name = asset
        .alias
        .as_deref()
        .or(asset.symbol.as_deref())
        .unwrap_or(value);
    let identifier = asset
        .asset_id
        .as_deref()
        .map(|id| format!("id: {id}"))
        .or_else(|| {
            asset
                .location
                .as_ref()
                .map(|location| format!("location: {}", serde_json::json!(location)))
        })
        .unwrap_or_else(|| "no identifier".to_string());
    format!("{name} ({identifier})")
}

/// Fails when the combined native and foreign match sets hold more than one
/// candidate for the same logical lookup.
pub fn ensure_unique(
    value: &str,
    native_matches: &[&NativeAssetInfo],
    foreign_matches: &[&ForeignAssetInfo],
) -> Result<()> {
    if native_matches.len() + foreign_matches.len() > 1 {
        return Err(duplicate_asset_error(value, native_matches, foreign_matches));
    }
    Ok(())
}

/// Returns the single foreign match, `None` when empty, or the ambiguity
/// error when the set holds more than one.
pub fn pick_foreign_or_err<'a>(
    value: &str,
    matches: Vec<&'a ForeignAssetInfo>,
) -> Result<Option<&'a ForeignAssetInfo>> {
    if matches.len() > 1 {
        return Err(duplicate_asset_error(value, &[], &matches));
    }
    Ok(matches.into_iter().next())
}
