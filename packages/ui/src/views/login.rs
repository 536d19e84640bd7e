//! Email/password sign-in. Any non-empty pair is accepted.

use dioxus::prelude::*;

use crate::auth::{form_error, use_auth, use_session};
use crate::routes::{access, Access, Route};

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in: skip the form
    if let Access::Redirect(target) = access(&Route::Login {}, auth().guard()) {
        nav.replace(target);
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        match session.login(&email(), &password()) {
            Ok(_) => {
                nav.replace(Route::Dashboard {});
            }
            Err(e) => error.set(Some(form_error(&e, "Failed to log in"))),
        }
    };

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-card",
                div {
                    class: "auth-header",
                    div { class: "auth-logo", "🌱" }
                    h1 { "Welcome Back" }
                    p { "Log in to continue your farming journey" }
                }

                if let Some(msg) = error() {
                    div { class: "auth-error", "{msg}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,
                    div {
                        class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "your@email.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary auth-submit",
                        "Log In"
                    }
                }

                div {
                    class: "auth-alternate",
                    p { "Don't have an account?" }
                    Link { to: Route::Register {}, class: "btn btn-secondary", "Sign Up" }
                }
            }
        }
    }
}
