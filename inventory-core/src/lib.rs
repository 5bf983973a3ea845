//! Inventory Core Library
//!
//! This library provides the asset model and the owning, insertion-ordered
//! asset collection used by the inventory tracker.

pub mod asset;
pub mod collection;

pub use asset::{Asset, AssetKind, Division, ItemKind};
pub use collection::AssetCollection;

/// Result type for inventory-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for inventory-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Allocation failure: {0}")]
    AllocationFailure(#[from] std::collections::TryReserveError),

    #[error("Unknown asset kind: {0}")]
    UnknownKind(String),

    #[error("Invalid asset spec: {0}")]
    InvalidAssetSpec(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
