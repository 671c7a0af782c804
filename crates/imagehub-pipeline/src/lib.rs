//! # imagehub-pipeline
//!
//! Application core for ImageHub. Each component orchestrates the
//! credential store, session context, and user storage to implement one
//! use case.
//!
//! ## Modules
//!
//! - `guard`: navigation access-control decisions
//! - `payload`: upload payload decoding and validation steps
//! - `upload`: per-session batch upload pipeline
//! - `archive`: TIFF transcoding and ZIP archive assembly
//! - `export`: review listing and archive download flow
//! - `account`: registration, login, and logout
//!
//! Components follow constructor injection; all dependencies are
//! provided at construction time via `Arc` references.

pub mod account;
pub mod archive;
pub mod export;
pub mod guard;
pub mod payload;
pub mod upload;

pub use account::{AccountResponse, AccountService};
pub use archive::{ArchiveBuilder, TiffEncoder};
pub use export::ExportService;
pub use guard::{AccessGuard, NavigationAction, PageRegistry};
pub use upload::UploadPipeline;
