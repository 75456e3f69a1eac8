//! # Session-flag persistence
//!
//! The backend issues no token: "logged in" is a single boolean scoped to the
//! browser tab. The flag lives behind the [`SessionStore`] trait so the auth
//! context receives an injected persistence mechanism instead of touching
//! `sessionStorage` directly.
//!
//! Two implementations:
//!
//! | Impl | Platform | Backing |
//! |------|----------|---------|
//! | [`BrowserSession`] | wasm | `window.sessionStorage`, key `"isAuthenticated"` |
//! | [`MemorySession`] | native + tests | a shared atomic |
//!
//! Storage failures degrade to "logged out" rather than crashing the UI.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Storage key carrying the flag. The value is the literal string `"true"`;
/// logging out removes the key entirely.
const SESSION_KEY: &str = "isAuthenticated";

/// Persistence seam for the tab-scoped login flag.
pub trait SessionStore {
    /// Read the flag; absent or unreadable storage counts as logged out.
    fn is_authenticated(&self) -> bool;

    /// `true` persists the flag, `false` removes it.
    fn set_authenticated(&self, value: bool);
}

/// In-memory flag used on native builds and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    flag: Arc<AtomicBool>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn is_authenticated(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    fn set_authenticated(&self, value: bool) {
        self.flag.store(value, Ordering::SeqCst);
    }
}

/// `sessionStorage`-backed flag for the web platform.
///
/// Zero-size; the storage handle is looked up on every operation, the same
/// way the browser hands out cached connections.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

#[cfg(target_arch = "wasm32")]
impl BrowserSession {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSession {
    fn is_authenticated(&self) -> bool {
        Self::storage()
            .and_then(|s| s.get_item(SESSION_KEY).ok().flatten())
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    fn set_authenticated(&self, value: bool) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("sessionStorage unavailable; login flag not persisted");
            return;
        };
        let result = if value {
            storage.set_item(SESSION_KEY, "true")
        } else {
            storage.remove_item(SESSION_KEY)
        };
        if result.is_err() {
            tracing::warn!("failed to write login flag to sessionStorage");
        }
    }
}

/// The session store for the current platform.
pub fn session_store() -> impl SessionStore {
    #[cfg(target_arch = "wasm32")]
    {
        BrowserSession::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // One shared flag per process so repeated lookups agree.
        static SHARED: std::sync::OnceLock<MemorySession> = std::sync::OnceLock::new();
        SHARED.get_or_init(MemorySession::new).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_starts_cleared() {
        assert!(!MemorySession::new().is_authenticated());
    }

    #[test]
    fn login_and_logout_round_trip() {
        let session = MemorySession::new();

        session.set_authenticated(true);
        assert!(session.is_authenticated());

        session.set_authenticated(false);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_the_same_flag() {
        let session = MemorySession::new();
        let other = session.clone();

        session.set_authenticated(true);
        assert!(other.is_authenticated());
    }
}
