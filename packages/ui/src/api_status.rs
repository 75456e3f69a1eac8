//! Startup connectivity probe.

use api::ApiClient;
use dioxus::prelude::*;

/// Banner shown when the backend cannot be reached at startup.
///
/// Probes the cheap `/locations` endpoint once on mount and renders nothing
/// while the probe is in flight or after it succeeds.
#[component]
pub fn ApiStatusBanner() -> Element {
    let mut failure = use_signal(|| Option::<String>::None);

    let _ = use_resource(move || async move {
        match ApiClient::new().get_all_locations().await {
            Ok(_) => failure.set(None),
            Err(err) => failure.set(Some(err.to_string())),
        }
    });

    match failure() {
        Some(message) => rsx! {
            div {
                class: "api-error-banner",
                "API connection failed: {message}"
                p { "Please make sure the backend server is running and correctly configured." }
            }
        },
        None => rsx! {},
    }
}
