//! # Warden state store
//!
//! Context-provided cache of the backend's warden list plus the mutations
//! that keep it current. Every successful mutation ends with a full
//! re-fetch; there is no incremental patching, no optimistic update, and no
//! request de-duplication — overlapping operations race and the state
//! reflects whichever resolution lands last.
//!
//! Display errors are the static per-operation messages; the backend's own
//! message is logged and returned to the caller, never rendered from here.

use api::{ApiClient, ApiError, Warden, WardenPayload};
use dioxus::prelude::*;

/// Snapshot of the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WardenState {
    pub wardens: Vec<Warden>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Copy handle exposing the store operations.
#[derive(Clone, Copy)]
pub struct WardenStore {
    state: Signal<WardenState>,
}

fn client() -> ApiClient {
    ApiClient::new()
}

impl WardenStore {
    /// Current snapshot.
    pub fn state(&self) -> WardenState {
        self.state.read().clone()
    }

    /// `GET /wardens`, replacing the cached list. On failure the previous
    /// list stays in place and `error` carries the static message.
    pub async fn fetch_all(&mut self) {
        self.begin();
        match client().get_all_wardens().await {
            Ok(wardens) => self.state.with_mut(|s| {
                s.wardens = wardens;
                s.error = None;
            }),
            Err(err) => {
                tracing::error!("fetching wardens failed: {err}");
                self.state
                    .with_mut(|s| s.error = Some("Failed to fetch wardens".to_string()));
            }
        }
        self.state.with_mut(|s| s.loading = false);
    }

    /// `POST /wardens`, then resync the full list.
    pub async fn add(&mut self, payload: &WardenPayload) -> Result<(), ApiError> {
        self.begin();
        let result = client().add_warden(payload).await.map(|_| ());
        self.finish("Failed to add warden", result).await
    }

    /// `PUT /wardens/:staffNumber`, then resync the full list.
    pub async fn update(
        &mut self,
        staff_number: &str,
        payload: &WardenPayload,
    ) -> Result<(), ApiError> {
        self.begin();
        let result = client()
            .update_warden(staff_number, payload)
            .await
            .map(|_| ());
        self.finish("Failed to update warden", result).await
    }

    /// `DELETE /wardens/:staffNumber`, then resync the full list.
    pub async fn delete(&mut self, staff_number: &str) -> Result<(), ApiError> {
        self.begin();
        let result = client().delete_warden(staff_number).await.map(|_| ());
        self.finish("Failed to delete warden", result).await
    }

    fn begin(&mut self) {
        self.state.with_mut(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    /// Shared tail of every mutation: resync on success, record the static
    /// message on failure, always clear `loading`.
    async fn finish(
        &mut self,
        failure: &'static str,
        result: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                self.fetch_all().await;
                Ok(())
            }
            Err(err) => {
                tracing::error!("{failure}: {err}");
                self.state.with_mut(|s| {
                    s.error = Some(failure.to_string());
                    s.loading = false;
                });
                Err(err)
            }
        }
    }
}

/// Get the warden store.
pub fn use_wardens() -> WardenStore {
    use_context::<WardenStore>()
}

/// Provider component that owns the warden list and loads it on mount.
#[component]
pub fn WardenProvider(children: Element) -> Element {
    let state = use_signal(|| WardenState {
        loading: true,
        ..Default::default()
    });
    let store = use_context_provider(|| WardenStore { state });

    let _ = use_resource(move || async move {
        let mut store = store;
        store.fetch_all().await;
    });

    rsx! {
        {children}
    }
}
