use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

const FEATURES: [(&str, &str, &str); 4] = [
    ("🌿", "Crop Disease Detection", "Upload crop images for instant disease analysis and solutions."),
    ("⭐", "Gamified Farming", "Complete tasks and earn rewards to stay motivated."),
    ("💲", "Finance Tracking", "Monitor your income, expenses, and plan your growth."),
    ("❤️", "Crop Health Tracker", "Daily crop monitoring with personalized tips."),
];

const STEPS: [&str; 4] = [
    "Register your farm and crops.",
    "Upload crop images for AI detection.",
    "Complete tasks and receive insights.",
    "Grow smarter and earn rewards.",
];

/// Public landing page.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let signed_in = auth().user.is_some();

    rsx! {
        div {
            class: "home",
            section {
                class: "hero",
                div {
                    class: "container hero-grid",
                    div {
                        h1 {
                            class: "hero-title",
                            "Revolutionize Farming with "
                            span { class: "text-green", "AgriFuture" }
                        }
                        p { class: "hero-subtitle", "Smart tools. Real results. Empowering the farmers of tomorrow." }
                        div {
                            class: "hero-actions",
                            if signed_in {
                                Link { to: Route::Dashboard {}, class: "btn btn-primary", "Go to Dashboard" }
                            } else {
                                Link { to: Route::Register {}, class: "btn btn-primary", "Get Started" }
                                Link { to: Route::Login {}, class: "btn btn-outline", "Login" }
                            }
                        }
                    }
                    img {
                        class: "hero-image",
                        src: "https://images.pexels.com/photos/2132250/pexels-photo-2132250.jpeg",
                        alt: "Farmer in field",
                    }
                }
            }

            section {
                class: "features",
                div {
                    class: "container",
                    h2 { class: "section-title", "Key Features" }
                    div {
                        class: "features-grid",
                        for (icon, title, desc) in FEATURES {
                            div {
                                key: "{title}",
                                class: "feature-card",
                                div { class: "feature-icon", "{icon}" }
                                h3 { "{title}" }
                                p { "{desc}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "steps",
                div {
                    class: "container",
                    h2 { class: "section-title", "How It Works" }
                    div {
                        class: "steps-grid",
                        for (i, step) in STEPS.iter().enumerate() {
                            div {
                                key: "{i}",
                                class: "step-card",
                                div { class: "step-number", {(i + 1).to_string()} }
                                p { "{step}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "cta",
                div {
                    class: "container cta-inner",
                    h2 { "Start Growing Smarter Today" }
                    p { "Join a community of forward-thinking farmers using AgriFuture." }
                    if signed_in {
                        Link { to: Route::Dashboard {}, class: "btn btn-light", "Go to Dashboard" }
                    } else {
                        Link { to: Route::Register {}, class: "btn btn-light", "Get Started" }
                    }
                }
            }
        }
    }
}
