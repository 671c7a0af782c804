//! Shared domain types used across the ImageHub crates.

pub mod batch;
pub mod download;
pub mod formats;
pub mod identity;
pub mod location;

pub use batch::{BatchKind, BatchResult, FileOutcome};
pub use download::DownloadPayload;
pub use identity::Identity;
pub use location::PageLocation;
