//! App root, layout chrome and the protected-route guard.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthProvider};
use crate::config::app_config;
use crate::footer::Footer;
use crate::navbar::Navbar;
use crate::routes::{access, Access, Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component launched by each platform.
#[component]
pub fn App() -> Element {
    let mut splash = use_signal(|| true);

    use_future(move || async move {
        farm::clock::sleep(app_config().timing.splash()).await;
        splash.set(false);
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "AgriFuture" }

        if splash() {
            div {
                class: "loading-screen",
                div { class: "spinner" }
                p { "Loading AgriFuture..." }
            }
        } else {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Navbar and footer around every page except login and registration.
#[component]
pub fn AppShell() -> Element {
    let route = use_route::<Route>();
    let chrome = !route.is_auth_screen();

    rsx! {
        div {
            class: "app",
            if chrome {
                Navbar {}
            }
            main {
                class: route.layout_class(),
                Outlet::<Route> {}
            }
            if chrome {
                Footer {}
            }
        }
    }
}

/// Renders child routes only for a signed-in user.
#[component]
pub fn ProtectedRoute() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    match access(&route, auth().guard()) {
        Access::Render => rsx! {
            Outlet::<Route> {}
        },
        Access::Wait => rsx! {
            div { class: "route-loading", "Loading..." }
        },
        Access::Redirect(target) => {
            tracing::debug!("No session for {}, redirecting to {}", route, target);
            nav.replace(target);
            rsx! {}
        }
    }
}
