pub(crate) mod best_matches;
pub(crate) mod dest_resolver;
pub(crate) mod duplicates;
pub(crate) mod location_search;
pub(crate) mod resolver_service;
pub(crate) mod symbol_search;

// Re-export the public interface
pub use best_matches::{find_best_matches, MatchField, SearchableAsset};
pub use dest_resolver::{resolve_on_destination, resolve_on_destination_or_throw};
pub use location_search::find_asset_by_location;
pub use resolver_service::{resolve, resolve_or_throw};
pub use symbol_search::find_asset_by_symbol;
