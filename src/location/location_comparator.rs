use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use super::location_model::{Location, Version};

static GROUPED_DIGITS: OnceLock<Regex> = OnceLock::new();

/// Numeric string rendered with digit-grouping commas, e.g. "1,984".
fn grouped_digits() -> &'static Regex {
    GROUPED_DIGITS.get_or_init(|| Regex::new(r"^\d{1,3}(,\d{3})+$").unwrap())
}

/// Canonicalizes the one structural ambiguity between location versions: a
/// bare object at the X1 junction level (older versions) versus a one-element
/// array (V4 and later). Junction levels other than X1 are never touched, and
/// a `Here` interior is returned unchanged.
pub fn normalize_location(location: &Location, target: Version) -> Location {
    let Some((key, entry)) = location.x1_entry() else {
        return location.clone();
    };

    let rewritten = if target.uses_array_x1() {
        match entry {
            Value::Array(_) => return location.clone(),
            bare => Value::Array(vec![bare.clone()]),
        }
    } else {
        match entry {
            Value::Array(items) if items.len() == 1 => items[0].clone(),
            _ => return location.clone(),
        }
    };

    let mut interior = location
        .interior
        .as_object()
        .cloned()
        .unwrap_or_else(Map::new);
    interior.insert(key.to_string(), rewritten);
    Location::new(location.parents, Value::Object(interior))
}

/// Structural equality over locations: both sides are normalized to the same
/// version, then compared field by field with case-insensitive object keys
/// and digit-grouping commas stripped from numeric strings. Junction arrays
/// are order-sensitive.
pub fn locations_equal(a: &Location, b: &Location) -> bool {
    let a = normalize_location(a, Version::ARRAY_X1_FROM);
    let b = normalize_location(b, Version::ARRAY_X1_FROM);
    a.parents == b.parents && canonical_value(&a.interior) == canonical_value(&b.interior)
}

/// Rewrites a JSON value into the form `locations_equal` compares: object
/// keys lowercased, grouped numeric strings ("1,984") collapsed to plain
/// digits. Arrays keep their order.
fn canonical_value(value: &Value) -> Value {
    match value {
        Value::Object(entries) => {
            let mut canonical = Map::new();
            for (key, entry) in entries {
                canonical.insert(key.to_lowercase(), canonical_value(entry));
            }
            Value::Object(canonical)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonical_value).collect()),
        Value::String(text) if grouped_digits().is_match(text) => {
            Value::String(text.replace(',', ""))
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn here_interior_is_never_rewritten() {
        let here = Location::here();
        assert_eq!(normalize_location(&here, Version::V4), here);
        assert_eq!(normalize_location(&here, Version::V3), here);
    }

    #[test]
    fn bare_x1_wrapped_into_array_for_v4() {
        let bare = Location::new(1, json!({ "X1": { "Parachain": 2011 } }));
        let normalized = normalize_location(&bare, Version::V4);
        assert_eq!(normalized.interior, json!({ "X1": [{ "Parachain": 2011 }] }));
    }

    #[test]
    fn array_x1_unwrapped_for_older_versions() {
        let array = Location::new(1, json!({ "X1": [{ "Parachain": 2011 }] }));
        let normalized = normalize_location(&array, Version::V3);
        assert_eq!(normalized.interior, json!({ "X1": { "Parachain": 2011 } }));
    }

    #[test]
    fn normalization_round_trips_single_object_x1() {
        let original = Location::new(1, json!({ "X1": { "Parachain": 2011 } }));
        let there = normalize_location(&original, Version::V4);
        let back = normalize_location(&there, Version::V3);
        assert_eq!(back, original);
    }

    #[test]
    fn deeper_levels_are_left_alone() {
        let location = Location::new(
            1,
            json!({ "X2": [{ "PalletInstance": 50 }, { "GeneralIndex": 1984 }] }),
        );
        assert_eq!(normalize_location(&location, Version::V3), location);
        assert_eq!(normalize_location(&location, Version::V4), location);
    }

    #[test]
    fn equality_bridges_the_x1_version_gap() {
        let bare = Location::new(1, json!({ "X1": { "Parachain": 2011 } }));
        let array = Location::new(1, json!({ "X1": [{ "Parachain": 2011 }] }));
        assert!(locations_equal(&bare, &array));
    }

    #[test]
    fn equality_ignores_key_casing() {
        let a = Location::new(1, json!({ "x1": { "parachain": 2011 } }));
        let b = Location::new(1, json!({ "X1": { "Parachain": 2011 } }));
        assert!(locations_equal(&a, &b));
    }

    #[test]
    fn equality_strips_digit_grouping_commas() {
        let grouped = Location::new(
            1,
            json!({ "X3": [{ "Parachain": "1000" }, { "PalletInstance": "50" }, { "GeneralIndex": "1,984" }] }),
        );
        let plain = Location::new(
            1,
            json!({ "X3": [{ "Parachain": "1000" }, { "PalletInstance": "50" }, { "GeneralIndex": "1984" }] }),
        );
        assert!(locations_equal(&grouped, &plain));
    }

    #[test]
    fn equality_is_order_sensitive_for_junction_arrays() {
        let a = Location::new(
            1,
            json!({ "X2": [{ "PalletInstance": 50 }, { "GeneralIndex": 1984 }] }),
        );
        let b = Location::new(
            1,
            json!({ "X2": [{ "GeneralIndex": 1984 }, { "PalletInstance": 50 }] }),
        );
        assert!(!locations_equal(&a, &b));
    }

    #[test]
    fn differing_parents_are_unequal() {
        let a = Location::new(0, json!({ "X1": { "Parachain": 2011 } }));
        let b = Location::new(1, json!({ "X1": { "Parachain": 2011 } }));
        assert!(!locations_equal(&a, &b));
    }

    #[test]
    fn differing_junction_values_are_unequal() {
        let a = Location::new(1, json!({ "X1": { "Parachain": 2011 } }));
        let b = Location::new(1, json!({ "X1": { "Parachain": 2010 } }));
        assert!(!locations_equal(&a, &b));
    }
}
