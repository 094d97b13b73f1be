use crate::assets::assets_errors::Result;
use crate::assets::{AssetInfo, ForeignAssetInfo, NativeAssetInfo};
use crate::currency::LocationRef;
use crate::location::{locations_equal, Location};

/// Location path of the resolver: structural comparison against the foreign
/// list first, then the native list. Returns the first match; location
/// lookups carry no ambiguity policy because a location identifies one asset
/// by construction.
pub fn find_asset_by_location(
    other_assets: &[ForeignAssetInfo],
    native_assets: &[NativeAssetInfo],
    location: &LocationRef,
) -> Result<Option<AssetInfo>> {
    let parsed;
    let needle = match location {
        LocationRef::Value(value) => value,
        LocationRef::Serialized(raw) => {
            parsed = Location::from_json_str(raw)?;
            &parsed
        }
    };

    let foreign = other_assets.iter().find(|asset| {
        asset
            .location
            .as_ref()
            .is_some_and(|candidate| locations_equal(candidate, needle))
    });
    if let Some(asset) = foreign {
        return Ok(Some(asset.clone().into()));
    }

    Ok(native_assets
        .iter()
        .find(|asset| {
            asset
                .location
                .as_ref()
                .is_some_and(|candidate| locations_equal(candidate, needle))
        })
        .map(|asset| asset.clone().into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn located_foreign(id: &str, location: Location) -> ForeignAssetInfo {
        ForeignAssetInfo {
            symbol: Some("USDT".to_string()),
            asset_id: Some(id.to_string()),
            location: Some(location),
            decimals: 6,
            ..Default::default()
        }
    }

    fn usdt_location() -> Location {
        Location::new(
            0,
            json!({ "X2": [{ "PalletInstance": "50" }, { "GeneralIndex": "1984" }] }),
        )
    }

    #[test]
    fn matches_a_structurally_equal_location() {
        let other = vec![located_foreign("1984", usdt_location())];
        let found = find_asset_by_location(&other, &[], &LocationRef::Value(usdt_location()))
            .unwrap()
            .unwrap();
        assert_eq!(found.asset_id(), Some("1984"));
    }

    #[test]
    fn accepts_the_serialized_form() {
        let other = vec![located_foreign("1984", usdt_location())];
        let raw = serde_json::to_string(&usdt_location()).unwrap();
        let found = find_asset_by_location(&other, &[], &LocationRef::Serialized(raw))
            .unwrap()
            .unwrap();
        assert_eq!(found.asset_id(), Some("1984"));
    }

    #[test]
    fn grouped_digits_in_the_needle_still_match() {
        let other = vec![located_foreign("1984", usdt_location())];
        let needle = Location::new(
            0,
            json!({ "X2": [{ "PalletInstance": "50" }, { "GeneralIndex": "1,984" }] }),
        );
        let found = find_asset_by_location(&other, &[], &LocationRef::Value(needle))
            .unwrap()
            .unwrap();
        assert_eq!(found.asset_id(), Some("1984"));
    }

    #[test]
    fn foreign_list_is_searched_before_native() {
        let location = Location::new(1, json!("Here"));
        let other = vec![located_foreign("5", location.clone())];
        let natives = vec![NativeAssetInfo {
            symbol: "DOT".to_string(),
            decimals: 10,
            location: Some(location.clone()),
            ..Default::default()
        }];
        let found = find_asset_by_location(&other, &natives, &LocationRef::Value(location))
            .unwrap()
            .unwrap();
        assert!(!found.is_native());
    }

    #[test]
    fn falls_back_to_the_native_list() {
        let location = Location::new(1, json!("Here"));
        let natives = vec![NativeAssetInfo {
            symbol: "DOT".to_string(),
            decimals: 10,
            location: Some(location.clone()),
            ..Default::default()
        }];
        let found = find_asset_by_location(&[], &natives, &LocationRef::Value(location))
            .unwrap()
            .unwrap();
        assert!(found.is_native());
    }

    #[test]
    fn first_match_wins_without_an_ambiguity_check() {
        let location = Location::new(1, json!("Here"));
        let other = vec![
            located_foreign("1", location.clone()),
            located_foreign("2", location.clone()),
        ];
        let found = find_asset_by_location(&other, &[], &LocationRef::Value(location))
            .unwrap()
            .unwrap();
        assert_eq!(found.asset_id(), Some("1"));
    }

    #[test]
    fn no_match_returns_none() {
        let other = vec![located_foreign("1984", usdt_location())];
        let needle = Location::new(1, json!({ "X1": { "Parachain": "2000" } }));
        assert!(
            find_asset_by_location(&other, &[], &LocationRef::Value(needle))
                .unwrap()
                .is_none()
        );
    }
}
