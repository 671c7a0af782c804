//! # imagehub
//!
//! Session-gated batch image ingestion and export pipeline.
//!
//! This crate wires the ImageHub components together and re-exports the
//! public surface. Process startup (HTTP server, page rendering) lives
//! outside this workspace; embedders construct an [`AppContext`] and
//! drive the guard, pipeline, and export services directly.

pub mod context;
pub mod telemetry;

pub use context::AppContext;

pub use imagehub_core::{AppError, AppResult, config::AppConfig};
pub use imagehub_pipeline::{
    AccessGuard, AccountService, ExportService, NavigationAction, UploadPipeline,
};
