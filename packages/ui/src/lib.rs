//! This crate contains all shared UI for the workspace: the route table, the
//! navigation shell, the auth provider and every page.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod config;
pub use config::app_config;

mod session;
pub use session::{make_session, AppSession, PlatformBackend};

mod auth;
pub use auth::{
    use_auth, use_session, validate_registration, AuthProvider, AuthState, GuardState, SessionHandle,
};

mod routes;
pub use routes::{access, Access, Route};

mod shell;
pub use shell::{App, AppShell, ProtectedRoute};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

pub mod charts;

pub mod views;
