//! # REST client for the warden backend
//!
//! [`ApiClient`] wraps the `/wardens`, `/locations`, and `/auth` endpoints.
//! Every method performs exactly one HTTP call — no retries, no timeout, no
//! backoff; a failed call is retried only when the user triggers the action
//! again. Non-2xx responses are translated into [`ApiError::Server`] carrying
//! the backend's `message` field when the body provides one.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::ApiError;
use crate::models::{Credentials, DeleteConfirmation, Registration, Warden, WardenPayload};

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client against the configured backend.
    pub fn new() -> Self {
        Self::with_base_url(config::base_url())
    }

    /// Client against a specific base URL. Tests point this at a loopback
    /// server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// `GET /wardens`
    pub async fn get_all_wardens(&self) -> Result<Vec<Warden>, ApiError> {
        let result = self.get_json("/wardens").await;
        if let Err(err) = &result {
            tracing::error!("error fetching wardens: {err}");
        }
        result
    }

    /// `GET /wardens/:staffNumber`
    pub async fn get_warden_by_staff_number(&self, staff_number: &str) -> Result<Warden, ApiError> {
        let result = self.get_json(&format!("/wardens/{staff_number}")).await;
        if let Err(err) = &result {
            tracing::error!("error fetching warden {staff_number}: {err}");
        }
        result
    }

    /// `POST /wardens`
    pub async fn add_warden(&self, payload: &WardenPayload) -> Result<Warden, ApiError> {
        let result = self.post_json("/wardens", payload).await;
        if let Err(err) = &result {
            tracing::error!("error adding warden: {err}");
        }
        result
    }

    /// `PUT /wardens/:staffNumber`
    pub async fn update_warden(
        &self,
        staff_number: &str,
        payload: &WardenPayload,
    ) -> Result<Warden, ApiError> {
        let result = self
            .put_json(&format!("/wardens/{staff_number}"), payload)
            .await;
        if let Err(err) = &result {
            tracing::error!("error updating warden {staff_number}: {err}");
        }
        result
    }

    /// `DELETE /wardens/:staffNumber`
    pub async fn delete_warden(&self, staff_number: &str) -> Result<DeleteConfirmation, ApiError> {
        let result = self.delete_json(&format!("/wardens/{staff_number}")).await;
        if let Err(err) = &result {
            tracing::error!("error deleting warden {staff_number}: {err}");
        }
        result
    }

    /// `GET /locations`
    pub async fn get_all_locations(&self) -> Result<Vec<String>, ApiError> {
        let result = self.get_json("/locations").await;
        if let Err(err) = &result {
            tracing::error!("error fetching locations: {err}");
        }
        result
    }

    /// `POST /auth/login` — any 2xx counts as success; the body is ignored
    /// because the backend issues no token.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let result = self.post_unit("/auth/login", credentials).await;
        if let Err(err) = &result {
            tracing::error!("login failed: {err}");
        }
        result
    }

    /// `POST /auth/register` — same contract as [`login`](Self::login).
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let result = self.post_unit("/auth/register", registration).await;
        if let Err(err) = &result {
            tracing::error!("registration failed: {err}");
        }
        result
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.delete(self.url(path)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        check(response).await?;
        Ok(())
    }
}

/// Pass 2xx responses through; otherwise extract the backend's `message`
/// field, falling back to a generic status line when the body is not JSON
/// or carries no message.
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Error: {}", status.as_u16())),
        Err(_) => format!("Server error: {}", status.as_u16()),
    };
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::{delete, get, post, put};
    use axum::{Json, Router};
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Option<Value>>>;

    fn sample_warden(staff_number: &str) -> Warden {
        Warden {
            staff_number: staff_number.to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            location: "Chapel".to_string(),
            entry_date_time: Utc::now(),
        }
    }

    fn sample_payload() -> WardenPayload {
        WardenPayload {
            staff_number: "S1".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            location: "Chapel".to_string(),
        }
    }

    /// Bind a loopback mock backend and return the base URL to point the
    /// client at.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn fetches_all_wardens() {
        let router = Router::new().route(
            "/api/wardens",
            get(|| async { Json(vec![sample_warden("S1"), sample_warden("S2")]) }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let wardens = client.get_all_wardens().await.unwrap();
        assert_eq!(wardens.len(), 2);
        assert_eq!(wardens[0].staff_number, "S1");
        assert_eq!(wardens[1].staff_number, "S2");
    }

    #[tokio::test]
    async fn fetches_a_single_warden_by_staff_number() {
        let router = Router::new().route(
            "/api/wardens/{staff_number}",
            get(|Path(staff_number): Path<String>| async move { Json(sample_warden(&staff_number)) }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let warden = client.get_warden_by_staff_number("S7").await.unwrap();
        assert_eq!(warden.staff_number, "S7");
    }

    async fn capture_add(State(seen): State<Captured>, Json(body): Json<Value>) -> impl IntoResponse {
        *seen.lock().unwrap() = Some(body);
        (StatusCode::CREATED, Json(sample_warden("S1")))
    }

    #[tokio::test]
    async fn add_warden_posts_the_exact_payload() {
        let seen: Captured = Arc::default();
        let router = Router::new()
            .route("/api/wardens", post(capture_add))
            .with_state(seen.clone());
        let client = ApiClient::with_base_url(serve(router).await);

        let created = client.add_warden(&sample_payload()).await.unwrap();
        assert_eq!(created.staff_number, "S1");

        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "staffNumber": "S1",
                "firstName": "Ann",
                "lastName": "Lee",
                "location": "Chapel"
            })
        );
    }

    async fn capture_update(
        State(seen): State<Captured>,
        Path(staff_number): Path<String>,
        Json(body): Json<Value>,
    ) -> impl IntoResponse {
        *seen.lock().unwrap() = Some(body);
        let mut warden = sample_warden(&staff_number);
        warden.location = "Medecroft".to_string();
        Json(warden)
    }

    #[tokio::test]
    async fn update_warden_puts_to_the_record_path() {
        let seen: Captured = Arc::default();
        let router = Router::new()
            .route("/api/wardens/{staff_number}", put(capture_update))
            .with_state(seen.clone());
        let client = ApiClient::with_base_url(serve(router).await);

        let mut payload = sample_payload();
        payload.location = "Medecroft".to_string();
        let updated = client.update_warden("S1", &payload).await.unwrap();
        assert_eq!(updated.location, "Medecroft");

        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(body["location"], "Medecroft");
    }

    #[tokio::test]
    async fn delete_returns_the_confirmation() {
        let router = Router::new().route(
            "/api/wardens/{staff_number}",
            delete(|| async { Json(serde_json::json!({"message": "Warden deleted"})) }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let confirmation = client.delete_warden("S1").await.unwrap();
        assert_eq!(confirmation.message.as_deref(), Some("Warden deleted"));
    }

    #[tokio::test]
    async fn delete_surfaces_the_server_message_on_404() {
        let router = Router::new().route(
            "/api/wardens/{staff_number}",
            delete(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(serde_json::json!({"message": "not found"})),
                )
            }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let err = client.delete_warden("S1").await.unwrap_err();
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_the_status_line() {
        let router = Router::new().route(
            "/api/wardens",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let err = client.get_all_wardens().await.unwrap_err();
        assert_eq!(err.to_string(), "Server error: 500");
    }

    #[tokio::test]
    async fn json_error_without_a_message_falls_back_to_the_error_line() {
        let router = Router::new().route(
            "/api/wardens",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({"detail": "nope"})),
                )
            }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let err = client.get_all_wardens().await.unwrap_err();
        assert_eq!(err.to_string(), "Error: 400");
    }

    #[tokio::test]
    async fn fetches_the_location_list() {
        let router = Router::new().route(
            "/api/locations",
            get(|| async { Json(vec!["Chapel".to_string(), "Medecroft".to_string()]) }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let locations = client.get_all_locations().await.unwrap();
        assert_eq!(locations, vec!["Chapel", "Medecroft"]);
    }

    #[tokio::test]
    async fn login_surfaces_the_backend_message() {
        let router = Router::new().route(
            "/api/auth/login",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({"message": "Invalid email or password"})),
                )
            }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let err = client
            .login(&Credentials {
                email: "ann@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[tokio::test]
    async fn login_succeeds_on_2xx_and_ignores_the_body() {
        let router = Router::new().route(
            "/api/auth/login",
            post(|| async { Json(serde_json::json!({"anything": "goes"})) }),
        );
        let client = ApiClient::with_base_url(serve(router).await);

        let result = client
            .login(&Credentials {
                email: "ann@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await;
        assert!(result.is_ok());
    }
}
