pub(crate) mod chain_policy;
pub(crate) mod registry_model;
pub(crate) mod registry_service;

// Re-export the public interface
pub use chain_policy::{
    ResolutionPolicy, BRIDGE_CHAIN, BRIDGE_GATEWAY_CHAIN, SAME_VALUE_BRIDGE_PAIRS,
};
pub use registry_model::ChainAssets;
pub use registry_service::AssetRegistry;
