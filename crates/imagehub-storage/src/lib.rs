//! # imagehub-storage
//!
//! Local filesystem layout for per-user image storage. Each user owns a
//! directory tree at `<base>/<username>/`, with uploaded images persisted
//! under `<base>/<username>/images/`.

pub mod layout;

pub use layout::UserStorage;
