use dioxus::prelude::*;

use crate::auth::{use_auth, use_session};
use crate::icons::{FaBars, FaRightFromBracket, FaTrophy};
use crate::routes::Route;
use crate::Icon;

fn nav_links() -> [(Route, &'static str); 5] {
    [
        (Route::Home {}, "Home"),
        (Route::Community {}, "Community"),
        (Route::GameDashboard {}, "Game"),
        (Route::GovtSchemes {}, "Govt Schemes"),
        (Route::FinanceTracker {}, "Finance"),
    ]
}

fn link_class(base: &str, target: &Route, current: &Route) -> String {
    if target == current {
        format!("{base} active-nav-link")
    } else {
        base.to_string()
    }
}

/// Top navigation bar.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let mut mobile_open = use_signal(|| false);
    let mut logout_failed = use_signal(|| false);

    let logout = move |_: MouseEvent| {
        mobile_open.set(false);
        match session.logout() {
            Ok(()) => {
                logout_failed.set(false);
                nav.push(Route::Login {});
            }
            Err(e) => {
                tracing::error!("Logout failed: {}", e);
                logout_failed.set(true);
            }
        }
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "container nav-container",
                div {
                    class: "logo-container",
                    Link {
                        to: Route::Home {},
                        class: "logo",
                        span { class: "logo-icon", "🌱" }
                        span { "AgriFuture" }
                    }
                }

                div {
                    class: "nav-links desktop-menu",
                    for (target, label) in nav_links() {
                        Link {
                            key: "{label}",
                            class: link_class("nav-link", &target, &route),
                            to: target.clone(),
                            "{label}"
                        }
                    }
                }

                div {
                    class: "user-actions",
                    if let Some(user) = auth().user {
                        div {
                            class: "user-info",
                            if logout_failed() {
                                span { class: "logout-error", "Could not log out" }
                            }
                            div {
                                class: "points-display",
                                span { class: "points-icon", Icon { icon: FaTrophy, width: 14, height: 14 } }
                                span { class: "points-value", "{user.points}" }
                            }
                            div {
                                class: "user-dropdown",
                                button {
                                    class: "user-dropdown-btn",
                                    span { class: "user-name", "{user.name}" }
                                    span { class: "user-avatar", "👨‍🌾" }
                                }
                                div {
                                    class: "dropdown-content",
                                    Link { to: Route::Dashboard {}, class: "dropdown-item", "Dashboard" }
                                    Link { to: Route::ImageUpload {}, class: "dropdown-item", "Analyze Crop" }
                                    button {
                                        class: "dropdown-item logout-btn",
                                        onclick: logout,
                                        Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                                        " Logout"
                                    }
                                }
                            }
                        }
                    } else {
                        div {
                            class: "auth-buttons",
                            Link { to: Route::Login {}, class: "btn btn-secondary", "Login" }
                            Link { to: Route::Register {}, class: "btn btn-primary", "Sign Up" }
                        }
                    }

                    button {
                        class: "mobile-menu-toggle",
                        "aria-label": "Toggle menu",
                        onclick: move |_| mobile_open.toggle(),
                        Icon { icon: FaBars, width: 18, height: 18 }
                    }
                }

                if mobile_open() {
                    div {
                        class: "mobile-menu",
                        for (target, label) in nav_links() {
                            Link {
                                key: "{label}",
                                class: link_class("mobile-nav-link", &target, &route),
                                to: target.clone(),
                                onclick: move |_| mobile_open.set(false),
                                "{label}"
                            }
                        }
                        if auth().user.is_some() {
                            Link {
                                to: Route::Dashboard {},
                                class: "mobile-nav-link",
                                onclick: move |_| mobile_open.set(false),
                                "Dashboard"
                            }
                            Link {
                                to: Route::ImageUpload {},
                                class: "mobile-nav-link",
                                onclick: move |_| mobile_open.set(false),
                                "Analyze Crop"
                            }
                            button {
                                class: "mobile-nav-link logout-btn",
                                onclick: logout,
                                "Logout"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_class() {
        let current = Route::Community {};
        assert_eq!(
            link_class("nav-link", &Route::Community {}, &current),
            "nav-link active-nav-link"
        );
        assert_eq!(link_class("nav-link", &Route::Home {}, &current), "nav-link");
    }

    #[test]
    fn test_nav_link_order() {
        let labels: Vec<&str> = nav_links().iter().map(|(_, label)| *label).collect();
        assert_eq!(labels, ["Home", "Community", "Game", "Govt Schemes", "Finance"]);
    }
}
