//! Registration page view.

use api::{ApiClient, Registration};
use dioxus::prelude::*;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut staff_number = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in — straight to the dashboard
    if auth.authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let mut auth = auth;
            error.set(None);

            if email().is_empty()
                || password().is_empty()
                || first_name().is_empty()
                || last_name().is_empty()
                || staff_number().is_empty()
            {
                error.set(Some("Please fill in all required fields".to_string()));
                return;
            }

            if password() != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let registration = Registration {
                first_name: first_name(),
                last_name: last_name(),
                staff_number: staff_number(),
                email: email(),
                password: password(),
            };
            match ApiClient::new().register(&registration).await {
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
            class: "register-container",
            div {
                class: "register-form-container",
                h1 { "Fire Warden Registration" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                form {
                    class: "register-form",
                    onsubmit: handle_register,

                    div {
                        class: "form-group",
                        label { r#for: "first-name", "First Name:" }
                        input {
                            id: "first-name",
                            r#type: "text",
                            value: first_name(),
                            disabled: loading(),
                            oninput: move |evt| first_name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "last-name", "Last Name:" }
                        input {
                            id: "last-name",
                            r#type: "text",
                            value: last_name(),
                            disabled: loading(),
                            oninput: move |evt| last_name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "staff-number", "Staff Number:" }
                        input {
                            id: "staff-number",
                            r#type: "text",
                            value: staff_number(),
                            disabled: loading(),
                            oninput: move |evt| staff_number.set(evt.value()),
                        }
                    }

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

                    div {
                        class: "form-group",
                        label { r#for: "confirm-password", "Confirm Password:" }
                        input {
                            id: "confirm-password",
                            r#type: "password",
                            value: confirm_password(),
                            disabled: loading(),
                            oninput: move |evt| confirm_password.set(evt.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "register-button",
                        disabled: loading(),
                        if loading() { "Registering..." } else { "Register" }
                    }
                }

                div {
                    class: "register-footer",
                    p {
                        "Already have an account? "
                        Link { to: Route::Login {}, "Login" }
                    }
                }
            }
        }
    }
}
