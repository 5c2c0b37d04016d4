//! Router: runs the route guard on every navigation and remembers the
//! requested route across a login redirect.

use gigboard_core::route::{self, GuardDecision, Route};
use gigboard_core::session::Session;
use tracing::debug;

/// What the shell should render after a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// Render the requested view.
    Render(Route),
    /// Session still loading: render only the placeholder.
    SessionLoading,
    /// Redirected to the login view; the requested route was remembered.
    RedirectedToLogin,
}

/// Navigation through the guard. Each call re-evaluates the guard against
/// the given session snapshot; nothing is cached between navigations.
#[derive(Debug, Default)]
pub struct Router {
    return_to: Option<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to enter `route` under the given session snapshot.
    pub fn navigate(&mut self, session: &Session, route: Route) -> NavOutcome {
        match route::evaluate(&route, session) {
            GuardDecision::Loading => NavOutcome::SessionLoading,
            GuardDecision::Authorized => NavOutcome::Render(route),
            GuardDecision::RedirectToLogin { requested } => {
                debug!(?requested, "redirecting to login");
                self.return_to = Some(requested);
                NavOutcome::RedirectedToLogin
            }
        }
    }

    /// Consumes the route remembered at the last login redirect, if any.
    ///
    /// Called after a successful sign-in to navigate back.
    pub fn take_return_route(&mut self) -> Option<Route> {
        self.return_to.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigboard_core::identity::UserIdentity;

    fn signed_in() -> Session {
        Session::signed_in(UserIdentity::new("a@example.com", "Alice", ""))
    }

    #[test]
    fn test_authorized_navigation_renders() {
        let mut router = Router::new();
        let outcome = router.navigate(&signed_in(), Route::Jobs);
        assert_eq!(outcome, NavOutcome::Render(Route::Jobs));
        assert!(router.take_return_route().is_none());
    }

    #[test]
    fn test_loading_session_renders_placeholder() {
        let mut router = Router::new();
        let outcome = router.navigate(&Session::loading(), Route::Jobs);
        assert_eq!(outcome, NavOutcome::SessionLoading);
        // No navigation decision was made
        assert!(router.take_return_route().is_none());
    }

    #[test]
    fn test_redirect_remembers_requested_route() {
        let mut router = Router::new();
        let outcome = router.navigate(&Session::signed_out(), Route::MyPostedJobs);
        assert_eq!(outcome, NavOutcome::RedirectedToLogin);
        assert_eq!(router.take_return_route(), Some(Route::MyPostedJobs));
        // Consumed exactly once
        assert!(router.take_return_route().is_none());
    }

    #[test]
    fn test_open_routes_render_while_signed_out() {
        let mut router = Router::new();
        for route in [Route::Home, Route::Login, Route::Signup] {
            assert_eq!(
                router.navigate(&Session::signed_out(), route.clone()),
                NavOutcome::Render(route)
            );
        }
    }
}
