pub mod assets;
pub mod currency;
pub mod location;
pub mod registry;
pub mod resolver;

pub use assets::{AssetError, AssetInfo, ForeignAssetInfo, NativeAssetInfo, Result};
pub use currency::{CurrencyRef, LocationRef, SymbolRef};
pub use location::{locations_equal, Location, Version};
pub use registry::AssetRegistry;
pub use resolver::{
    resolve, resolve_on_destination, resolve_on_destination_or_throw, resolve_or_throw,
};
