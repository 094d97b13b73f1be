use thiserror::Error;

/// Custom error type for asset resolution operations
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Duplicate asset: {0}")]
    DuplicateAsset(String),
    #[error("Duplicate asset id: {0}")]
    DuplicateAssetId(String),
    #[error("Invalid alias: {0}")]
    InvalidAlias(String),
    #[error("Unknown chain: {0}")]
    UnknownChain(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<serde_json::Error> for AssetError {
    fn from(err: serde_json::Error) -> Self {
        AssetError::InvalidData(err.to_string())
    }
}

/// Result type for asset resolution operations
pub type Result<T> = std::result::Result<T, AssetError>;
