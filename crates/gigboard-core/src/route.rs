//! Navigation routes and the authentication route guard.
//!
//! Every route maps to exactly one resource view. The guard runs on every
//! route entry and is never cached: while the session is still loading it
//! renders a placeholder, and once resolved it either authorizes the
//! requested view or redirects to login, carrying the requested route so
//! login can navigate back afterward.

use crate::session::Session;

/// The navigation surface. One route per resource view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Jobs,
    JobDetails(String),
    AddJob,
    UpdateJob(String),
    AcceptedTasks,
    MyPostedJobs,
    Login,
    Signup,
}

impl Route {
    /// Whether entering this route requires a signed-in user.
    ///
    /// Home, login and signup are open; everything else is guarded.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Home | Route::Login | Route::Signup)
    }
}

/// The per-navigation guard decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restoration still in flight: render only a placeholder,
    /// make no navigation decision yet.
    Loading,
    /// Render the requested view.
    Authorized,
    /// Navigate to login instead, remembering the requested route.
    RedirectToLogin { requested: Route },
}

/// Evaluates the guard for one route entry.
///
/// Each evaluation is independent; callers re-run this on every navigation.
pub fn evaluate(route: &Route, session: &Session) -> GuardDecision {
    if !route.requires_auth() {
        return GuardDecision::Authorized;
    }
    if session.is_loading() {
        return GuardDecision::Loading;
    }
    if session.user().is_some() {
        GuardDecision::Authorized
    } else {
        GuardDecision::RedirectToLogin {
            requested: route.clone(),
        }
    }
}
