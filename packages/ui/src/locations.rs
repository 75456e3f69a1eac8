//! Location state store — the read-only sibling of
//! [`wardens`](crate::wardens). Fetched once on mount and never refreshed by
//! any mutation elsewhere.

use api::{ApiClient, CAMPUS_LOCATIONS};
use dioxus::prelude::*;

/// Snapshot of the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationState {
    pub locations: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Copy handle over the location list.
#[derive(Clone, Copy)]
pub struct LocationStore {
    state: Signal<LocationState>,
}

impl LocationStore {
    /// Current snapshot.
    pub fn state(&self) -> LocationState {
        self.state.read().clone()
    }

    /// Options for the form's location select: the fetched list once the
    /// backend has produced one, the canonical constant until then.
    pub fn options(&self) -> Vec<String> {
        let state = self.state.read();
        if state.locations.is_empty() {
            CAMPUS_LOCATIONS.iter().map(|s| s.to_string()).collect()
        } else {
            state.locations.clone()
        }
    }

    /// `GET /locations`.
    pub async fn fetch_all(&mut self) {
        self.state.with_mut(|s| {
            s.loading = true;
            s.error = None;
        });
        match ApiClient::new().get_all_locations().await {
            Ok(locations) => self.state.with_mut(|s| {
                s.locations = locations;
                s.error = None;
            }),
            Err(err) => {
                tracing::error!("fetching locations failed: {err}");
                self.state
                    .with_mut(|s| s.error = Some("Failed to fetch locations".to_string()));
            }
        }
        self.state.with_mut(|s| s.loading = false);
    }
}

/// Get the location store.
pub fn use_locations() -> LocationStore {
    use_context::<LocationStore>()
}

/// Provider component that loads the location list on mount.
#[component]
pub fn LocationProvider(children: Element) -> Element {
    let state = use_signal(|| LocationState {
        loading: true,
        ..Default::default()
    });
    let store = use_context_provider(|| LocationStore { state });

    let _ = use_resource(move || async move {
        let mut store = store;
        store.fetch_all().await;
    });

    rsx! {
        {children}
    }
}
