//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod api_status;
pub use api_status::ApiStatusBanner;

mod auth;
pub use auth::{use_auth, AuthContext, AuthProvider, AuthState};

mod locations;
pub use locations::{use_locations, LocationProvider, LocationState, LocationStore};

mod warden_form;
pub use warden_form::{validate, FieldErrors, FormMode, WardenFields, WardenForm};

mod wardens;
pub use wardens::{use_wardens, WardenProvider, WardenState, WardenStore};
