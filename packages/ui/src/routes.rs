//! The route table shared by the web and desktop launchers.

use dioxus::prelude::*;

use crate::auth::GuardState;
use crate::shell::{AppShell, ProtectedRoute};
use crate::views::{
    Community, Dashboard, FinanceTracker, GameDashboard, GovtSchemes, Home, ImageUpload, Login,
    NotFound, Register,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[layout(ProtectedRoute)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/image-upload")]
            ImageUpload {},
            #[route("/finance")]
            FinanceTracker {},
            #[route("/community")]
            Community {},
            #[route("/game")]
            GameDashboard {},
            #[route("/govt-schemes")]
            GovtSchemes {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Routes that render only for a signed-in user.
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Dashboard {}
                | Route::ImageUpload {}
                | Route::FinanceTracker {}
                | Route::Community {}
                | Route::GameDashboard {}
                | Route::GovtSchemes {}
        )
    }

    /// Login and registration render without navbar and footer.
    pub fn is_auth_screen(&self) -> bool {
        matches!(self, Route::Login {} | Route::Register {})
    }

    pub fn layout_class(&self) -> &'static str {
        if self.is_auth_screen() {
            "auth-layout"
        } else {
            "main-layout"
        }
    }
}

/// Outcome of checking a route against the session.
#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Render,
    /// Session not read yet; show a placeholder.
    Wait,
    /// Replace the current entry with another route.
    Redirect(Route),
}

pub fn access(route: &Route, guard: GuardState) -> Access {
    if route.requires_session() {
        return match guard {
            GuardState::Loading => Access::Wait,
            GuardState::Authenticated => Access::Render,
            GuardState::Unauthenticated => Access::Redirect(Route::Login {}),
        };
    }
    if route.is_auth_screen() && guard == GuardState::Authenticated {
        return Access::Redirect(Route::Dashboard {});
    }
    Access::Render
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Route {
        path.parse::<Route>().ok().unwrap()
    }

    #[test]
    fn test_paths() {
        assert_eq!(parse("/"), Route::Home {});
        assert_eq!(parse("/image-upload"), Route::ImageUpload {});
        assert_eq!(parse("/govt-schemes"), Route::GovtSchemes {});
        assert_eq!(Route::FinanceTracker {}.to_string(), "/finance");
        assert!(matches!(parse("/no/such/page"), Route::NotFound { .. }));
    }

    #[test]
    fn test_dashboard_without_session_redirects_to_login() {
        let route = parse("/dashboard");
        assert_eq!(
            access(&route, GuardState::Unauthenticated),
            Access::Redirect(Route::Login {})
        );
        assert_eq!(access(&route, GuardState::Loading), Access::Wait);
        assert_eq!(access(&route, GuardState::Authenticated), Access::Render);
    }

    #[test]
    fn test_every_protected_route_is_guarded() {
        for path in ["/dashboard", "/image-upload", "/finance", "/community", "/game", "/govt-schemes"] {
            let route = parse(path);
            assert!(route.requires_session(), "{path}");
            assert_eq!(
                access(&route, GuardState::Unauthenticated),
                Access::Redirect(Route::Login {})
            );
        }
    }

    #[test]
    fn test_public_routes() {
        for route in [Route::Home {}, Route::Login {}, Route::Register {}] {
            assert_eq!(access(&route, GuardState::Unauthenticated), Access::Render);
            assert_eq!(access(&route, GuardState::Loading), Access::Render);
        }
        assert_eq!(access(&Route::Home {}, GuardState::Authenticated), Access::Render);
    }

    #[test]
    fn test_auth_screens_bounce_signed_in_users() {
        assert_eq!(
            access(&Route::Login {}, GuardState::Authenticated),
            Access::Redirect(Route::Dashboard {})
        );
        assert_eq!(Route::Register {}.layout_class(), "auth-layout");
        assert_eq!(Route::Community {}.layout_class(), "main-layout");
    }
}
