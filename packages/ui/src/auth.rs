//! Authentication context and hooks for the UI.
//!
//! There is no token protocol: "logged in" is one boolean seeded from the
//! session store at mount. Views and the route guard read this context, never
//! storage directly, and the persistence mechanism stays swappable behind
//! [`api::SessionStore`].

use api::{session_store, SessionStore};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

/// Copy handle over the auth state. `login`/`logout` flip the signal and
/// write through the session store in the same step.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: Signal<AuthState>,
}

impl AuthContext {
    /// Whether the current tab is treated as logged in.
    pub fn authenticated(&self) -> bool {
        self.state.read().authenticated
    }

    pub fn login(&mut self) {
        session_store().set_authenticated(true);
        self.state.set(AuthState {
            authenticated: true,
        });
    }

    pub fn logout(&mut self) {
        session_store().set_authenticated(false);
        self.state.set(AuthState {
            authenticated: false,
        });
    }
}

/// Get the current authentication context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let state = use_signal(|| AuthState {
        authenticated: session_store().is_authenticated(),
    });
    use_context_provider(|| AuthContext { state });

    rsx! {
        {children}
    }
}
