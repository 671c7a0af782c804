//! # imagehub-core
//!
//! Core crate for ImageHub. Contains collaborator traits, configuration
//! schemas, shared domain types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ImageHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
