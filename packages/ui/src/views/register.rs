use dioxus::prelude::*;

use crate::auth::{form_error, use_auth, use_session, validate_registration};
use crate::routes::{access, Access, Route};

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut agreed = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    if let Access::Redirect(target) = access(&Route::Register {}, auth().guard()) {
        nav.replace(target);
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        if let Err(msg) = validate_registration(&password(), &confirm(), agreed()) {
            error.set(Some(msg.to_string()));
            return;
        }

        match session.register(&name(), &email(), &password()) {
            Ok(_) => {
                nav.replace(Route::Dashboard {});
            }
            Err(e) => error.set(Some(form_error(&e, "Failed to create an account"))),
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
                    h1 { "Join AgriFuture" }
                    p { "Create an account to start your farming journey" }
                }

                if let Some(msg) = error() {
                    div { class: "auth-error", "{msg}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,
                    div {
                        class: "form-group",
                        label { r#for: "name", "Full Name" }
                        input {
                            id: "name",
                            r#type: "text",
                            placeholder: "John Doe",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
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
                    div {
                        class: "form-group",
                        label { r#for: "confirm-password", "Confirm Password" }
                        input {
                            id: "confirm-password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{confirm}",
                            oninput: move |e| confirm.set(e.value()),
                        }
                    }
                    div {
                        class: "terms-agreement",
                        input {
                            id: "terms",
                            r#type: "checkbox",
                            checked: agreed(),
                            onchange: move |e| agreed.set(e.checked()),
                        }
                        label {
                            r#for: "terms",
                            "I agree to the "
                            a { href: "#", "Terms of Service" }
                            " and "
                            a { href: "#", "Privacy Policy" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary auth-submit",
                        "Sign Up"
                    }
                }

                div {
                    class: "auth-alternate",
                    p { "Already have an account?" }
                    Link { to: Route::Login {}, class: "btn btn-secondary", "Log In" }
                }
            }
        }
    }
}
