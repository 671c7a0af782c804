//! Page location classification used by the navigation guard.

use serde::{Deserialize, Serialize};

/// Classification of a registered page.
///
/// Pages that are not registered carry no location and are treated as
/// unclassified by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLocation {
    /// Login and registration pages, reachable without a session.
    Auth,
    /// Application pages, reachable only with an authenticated session.
    App,
}
