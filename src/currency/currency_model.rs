use serde::{Deserialize, Serialize};

use crate::assets::AssetInfo;
use crate::location::Location;

/// Caller-supplied reference to a currency, one variant per reference kind.
///
/// Resolution dispatches on this exhaustively; a reference never carries more
/// than one kind of identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CurrencyRef {
    /// Search by symbol, either bare or through a disambiguating selector.
    Symbol(SymbolRef),
    /// Search by structured location or its serialized form.
    Location(LocationRef),
    /// Exact match on a foreign asset's registry id.
    Id(String),
    /// Use the given location verbatim; resolution is bypassed by design.
    OverrideLocation(Location),
    /// A pre-built asset list; already resolved, resolution is bypassed.
    Assets(Vec<AssetInfo>),
}

impl CurrencyRef {
    pub fn symbol(symbol: impl Into<String>) -> Self {
        CurrencyRef::Symbol(SymbolRef::Plain(symbol.into()))
    }

    pub fn id(id: impl ToString) -> Self {
        CurrencyRef::Id(id.to_string())
    }

    pub fn location(location: Location) -> Self {
        CurrencyRef::Location(LocationRef::Value(location))
    }

    /// Short human description used in not-found error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            CurrencyRef::Symbol(symbol) => format!("symbol {}", symbol.value()),
            CurrencyRef::Location(LocationRef::Value(location)) => {
                format!(
                    "location {}",
                    serde_json::to_string(location).unwrap_or_default()
                )
            }
            CurrencyRef::Location(LocationRef::Serialized(serialized)) => {
                format!("location {serialized}")
            }
            CurrencyRef::Id(id) => format!("id {id}"),
            CurrencyRef::OverrideLocation(_) => "override location".to_string(),
            CurrencyRef::Assets(_) => "pre-built asset list".to_string(),
        }
    }
}

/// Disambiguating selector for symbol searches.
///
/// `Native` restricts the search to the native-asset list, `Foreign` to the
/// foreign-asset list, and `ForeignAbstract` matches foreign assets by alias
/// instead of symbol. A bare `Plain` symbol searches both lists under the
/// duplicate policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SymbolRef {
    Plain(String),
    Native(String),
    Foreign(String),
    ForeignAbstract(String),
}

impl SymbolRef {
    pub fn value(&self) -> &str {
        match self {
            SymbolRef::Plain(value)
            | SymbolRef::Native(value)
            | SymbolRef::Foreign(value)
            | SymbolRef::ForeignAbstract(value) => value,
        }
    }
}

/// A location reference, structured or pre-serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum LocationRef {
    Value(Location),
    Serialized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_value_is_uniform_across_variants() {
        assert_eq!(SymbolRef::Plain("DOT".to_string()).value(), "DOT");
        assert_eq!(SymbolRef::Native("DOT".to_string()).value(), "DOT");
        assert_eq!(SymbolRef::Foreign("xcDOT".to_string()).value(), "xcDOT");
        assert_eq!(SymbolRef::ForeignAbstract("DOT1".to_string()).value(), "DOT1");
    }

    #[test]
    fn convenience_constructors_build_expected_variants() {
        assert_eq!(
            CurrencyRef::symbol("USDt"),
            CurrencyRef::Symbol(SymbolRef::Plain("USDt".to_string()))
        );
        assert_eq!(CurrencyRef::id(1984u64), CurrencyRef::Id("1984".to_string()));
    }
}
