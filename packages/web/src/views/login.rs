//! Login page view with email/password form.

use api::{ApiClient, Credentials};
use dioxus::prelude::*;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in — straight to the dashboard
    if auth.authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let mut auth = auth;
            error.set(None);

            if email().trim().is_empty() || password().is_empty() {
                error.set(Some("Please enter both email and password".to_string()));
                return;
            }

            loading.set(true);
            let credentials = Credentials {
                email: email(),
                password: password(),
            };
            match ApiClient::new().login(&credentials).await {
                Ok(()) => {
                    auth.login();
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-container",
            div {
                class: "login-form-container",
                h1 { "Fire Warden Login" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                form {
                    class: "login-form",
                    onsubmit: handle_login,

                    div {
                        class: "form-group",
                        label { r#for: "email", "Email:" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: email(),
                            disabled: loading(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "password", "Password:" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: password(),
                            disabled: loading(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "login-button",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                div {
                    class: "login-footer",
                    p {
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Register" }
                    }
                }
            }
        }
    }
}
