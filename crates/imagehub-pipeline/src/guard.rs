//! Navigation access-control guard.

use tracing::debug;

use imagehub_core::config::auth::AuthConfig;
use imagehub_core::traits::SessionContext;
use imagehub_core::types::PageLocation;

/// Outcome of a navigation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Show the requested page.
    Stay,
    /// Navigate to the given path instead.
    RedirectTo(String),
}

/// Statically constructed table mapping page paths to location tags.
///
/// Registration order matters: classification picks the first registered
/// page whose path is contained in the requested path. The page set is
/// small and fixed, so the table is built explicitly at startup rather
/// than discovered at runtime.
#[derive(Debug, Clone)]
pub struct PageRegistry {
    pages: Vec<(String, PageLocation)>,
}

impl PageRegistry {
    /// Builds a registry from explicit (path, location) registrations.
    pub fn new(pages: Vec<(String, PageLocation)>) -> Self {
        Self { pages }
    }

    /// The standard ImageHub page set.
    pub fn standard() -> Self {
        Self::new(vec![
            ("/login".to_string(), PageLocation::Auth),
            ("/register".to_string(), PageLocation::Auth),
            ("/select-images".to_string(), PageLocation::App),
            ("/review-images".to_string(), PageLocation::App),
        ])
    }

    /// Classifies a requested path.
    ///
    /// Returns the location of the first registered page whose path is
    /// contained in the requested path, or `None` when nothing matches.
    pub fn classify(&self, requested_path: &str) -> Option<PageLocation> {
        self.pages
            .iter()
            .find(|(path, _)| requested_path.contains(path.as_str()))
            .map(|(_, location)| *location)
    }
}

/// Decides, for every requested page, whether the current session may see
/// it and where to redirect otherwise.
///
/// A total function of its inputs: every unclassified location resolves
/// to a deterministic redirect target depending on authentication state.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    /// Static page classification table.
    registry: PageRegistry,
    /// Redirect target for unauthenticated callers and after logout.
    login_path: String,
    /// Redirect target for authenticated callers on non-app pages.
    default_app_path: String,
}

impl AccessGuard {
    /// Creates a guard from a page registry and auth configuration.
    pub fn new(registry: PageRegistry, config: &AuthConfig) -> Self {
        Self {
            registry,
            login_path: config.login_path.clone(),
            default_app_path: config.default_app_path.clone(),
        }
    }

    /// Evaluates one navigation request.
    ///
    /// Order of evaluation:
    /// 1. a logout request clears the session and lands on the login page;
    /// 2. authenticated callers are pulled onto the app area from
    ///    anywhere else (auth pages, unclassified paths, the home page);
    /// 3. unauthenticated callers are pushed to the login page from
    ///    anywhere outside the auth area;
    /// 4. otherwise the requested page is shown.
    pub fn decide(
        &self,
        requested_path: &str,
        session: &dyn SessionContext,
        logout_requested: bool,
    ) -> NavigationAction {
        if logout_requested {
            session.logout();
            return NavigationAction::RedirectTo(self.login_path.clone());
        }

        let location = self.registry.classify(requested_path);
        let authenticated = session.is_authenticated();
        debug!(requested_path, ?location, authenticated, "Navigation decision");

        if authenticated && location != Some(PageLocation::App) {
            return NavigationAction::RedirectTo(self.default_app_path.clone());
        }

        if !authenticated && location != Some(PageLocation::Auth) {
            return NavigationAction::RedirectTo(self.login_path.clone());
        }

        NavigationAction::Stay
    }
}
