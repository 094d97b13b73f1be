use crate::assets::{AssetInfo, ForeignAssetInfo, NativeAssetInfo};

/// Field a fuzzy lookup matches candidates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Symbol,
    Alias,
}

/// An asset record the fuzzy matcher can search.
pub trait SearchableAsset {
    fn search_symbol(&self) -> Option<&str>;
    fn search_alias(&self) -> Option<&str>;

    fn search_field(&self, field: MatchField) -> Option<&str> {
        match field {
            MatchField::Symbol => self.search_symbol(),
            MatchField::Alias => self.search_alias(),
        }
    }
}

impl SearchableAsset for NativeAssetInfo {
    fn search_symbol(&self) -> Option<&str> {
        Some(self.symbol.as_str())
    }

    fn search_alias(&self) -> Option<&str> {
        None
    }
}

impl SearchableAsset for ForeignAssetInfo {
    fn search_symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    fn search_alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

impl SearchableAsset for AssetInfo {
    fn search_symbol(&self) -> Option<&str> {
        self.symbol()
    }

    fn search_alias(&self) -> Option<&str> {
        self.alias()
    }
}

/// Cascading case-variant match of a value against a candidate list.
///
/// Tiers, in order: exact, exact against the uppercased value, exact against
/// the lowercased value, case-insensitive. The first tier with at least one
/// hit wins; tiers are never combined, even when a later tier would also
/// match. Returns empty when no tier matches.
pub fn find_best_matches<'a, T: SearchableAsset>(
    candidates: &'a [T],
    value: &str,
    field: MatchField,
) -> Vec<&'a T> {
    let upper = value.to_uppercase();
    let lower = value.to_lowercase();

    let tier = |matches: &dyn Fn(&str) -> bool| -> Vec<&'a T> {
        candidates
            .iter()
            .filter(|candidate| candidate.search_field(field).is_some_and(matches))
            .collect()
    };

    let exact = tier(&|field| field == value);
    if !exact.is_empty() {
        return exact;
    }
    let uppercased = tier(&|field| field == upper);
    if !uppercased.is_empty() {
        return uppercased;
    }
    let lowercased = tier(&|field| field == lower);
    if !lowercased.is_empty() {
        return lowercased;
    }
    tier(&|field| field.to_lowercase() == lower)
}
