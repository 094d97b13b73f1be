pub(crate) mod assets_constants;
pub(crate) mod assets_errors;
pub(crate) mod assets_model;

// Re-export the public interface
pub use assets_constants::{BRIDGED_ASSET_SUFFIX, WRAPPED_ASSET_PREFIX};
pub use assets_model::{AssetInfo, ForeignAssetInfo, NativeAssetInfo};

// Re-export error types for convenience
pub use assets_errors::{AssetError, Result};
