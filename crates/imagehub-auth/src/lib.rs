//! # imagehub-auth
//!
//! Password hashing, identity storage, and session state for ImageHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and policy enforcement
//! - `credentials`: in-memory [`imagehub_core::traits::CredentialStore`] backend
//! - `session`: per-session authentication state handle

pub mod credentials;
pub mod password;
pub mod session;

pub use credentials::MemoryCredentialStore;
pub use password::{PasswordHasher, PasswordPolicy};
pub use session::SessionHandle;
