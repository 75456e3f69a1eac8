//! # API crate — data layer for the fire-warden dashboard
//!
//! Everything the UI needs to talk to the outside world lives here, so the
//! component crates stay free of HTTP and storage concerns.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | REST client for the warden backend (`/wardens`, `/locations`, `/auth/*`) |
//! | [`config`] | Backend base URL, overridable at build time via `WARDEN_API_URL` |
//! | [`error`] | [`ApiError`] — server responses with a message vs. transport failures |
//! | [`models`] | Wire types (`Warden`, `WardenPayload`, …) and dashboard aggregates |
//! | [`session`] | The tab-scoped "logged in" flag behind the [`SessionStore`] trait |
//!
//! The backend is an external collaborator: records are created, mutated, and
//! destroyed server-side, and the client's copies are a cache refreshed by a
//! full re-fetch after every mutation.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Credentials, DashboardStats, DeleteConfirmation, Registration, Warden, WardenPayload,
    CAMPUS_LOCATIONS,
};
#[cfg(target_arch = "wasm32")]
pub use session::BrowserSession;
pub use session::{session_store, MemorySession, SessionStore};
