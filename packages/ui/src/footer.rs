use chrono::Datelike;
use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Footer() -> Element {
    let year = farm::clock::today().year();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "container footer-container",
                div {
                    class: "footer-grid",
                    div {
                        class: "footer-section",
                        h4 { class: "footer-heading", "AgriFuture" }
                        p {
                            class: "footer-text",
                            "Empowering farmers with technology to improve crop yield, health tracking, and financial management."
                        }
                    }
                    div {
                        class: "footer-section",
                        h4 { class: "footer-heading", "Quick Links" }
                        ul {
                            class: "footer-links",
                            li { Link { to: Route::Home {}, "Home" } }
                            li { Link { to: Route::Community {}, "Community" } }
                            li { Link { to: Route::GameDashboard {}, "Game" } }
                            li { Link { to: Route::FinanceTracker {}, "Finance Tracker" } }
                        }
                    }
                    div {
                        class: "footer-section",
                        h4 { class: "footer-heading", "Resources" }
                        ul {
                            class: "footer-links",
                            li { Link { to: Route::GovtSchemes {}, "Government Schemes" } }
                            li { a { href: "#", "Crop Library" } }
                            li { a { href: "#", "Weather Forecasts" } }
                            li { a { href: "#", "Market Trends" } }
                        }
                    }
                    div {
                        class: "footer-section",
                        h4 { class: "footer-heading", "Contact Us" }
                        p {
                            class: "footer-text",
                            a { href: "mailto:support@agrifuture.com", "support@agrifuture.com" }
                        }
                        p { class: "footer-text", "+1 (555) 123-4567" }
                    }
                }
                div {
                    class: "footer-bottom",
                    p { class: "copyright", "© {year} AgriFuture. All rights reserved." }
                    div {
                        class: "footer-legal",
                        a { href: "#", "Privacy Policy" }
                        a { href: "#", "Terms of Service" }
                    }
                }
            }
        }
    }
}
