use dioxus::prelude::*;
use farm::schemes::catalogue;

#[component]
pub fn GovtSchemes() -> Element {
    let schemes = use_hook(catalogue);

    rsx! {
        div {
            class: "govt-schemes-container",
            div {
                class: "container",
                div {
                    class: "page-header",
                    h1 { "Government Agricultural Schemes" }
                    p { "Explore various government initiatives to support farmers" }
                }

                div {
                    class: "schemes-grid",
                    for scheme in schemes {
                        div {
                            key: "{scheme.id}",
                            class: "scheme-card",
                            div { class: "scheme-icon", "{scheme.icon}" }
                            h2 { "{scheme.title}" }
                            p { class: "scheme-description", "{scheme.description}" }
                            div {
                                class: "scheme-details",
                                div {
                                    class: "eligibility",
                                    h3 { "Eligibility" }
                                    p { "{scheme.eligibility}" }
                                }
                                div {
                                    class: "benefits",
                                    h3 { "Key Benefits" }
                                    ul {
                                        for benefit in scheme.benefits.iter() {
                                            li { key: "{benefit}", "{benefit}" }
                                        }
                                    }
                                }
                            }
                            button { class: "btn btn-primary", "Apply Now" }
                        }
                    }
                }

                div {
                    class: "help-section",
                    div {
                        class: "help-content",
                        h2 { "Need Help?" }
                        p { "Our support team is available to guide you through the application process" }
                        button { class: "btn btn-secondary", "Contact Support" }
                    }
                }
            }
        }
    }
}
