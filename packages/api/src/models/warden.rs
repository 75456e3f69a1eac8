//! # Warden wire types
//!
//! Request and response records exchanged with the backend, one explicit type
//! per endpoint body. All of them serialize camelCase to match the backend's
//! JSON, and the two warden shapes reject unknown fields so a drifting
//! backend schema fails loudly at the boundary instead of silently dropping
//! data.
//!
//! | Type | Direction | Endpoint |
//! |------|-----------|----------|
//! | [`Warden`] | response | `GET/POST/PUT /wardens…` |
//! | [`WardenPayload`] | request | `POST /wardens`, `PUT /wardens/:staffNumber` |
//! | [`DeleteConfirmation`] | response | `DELETE /wardens/:staffNumber` |
//! | [`Credentials`] | request | `POST /auth/login` |
//! | [`Registration`] | request | `POST /auth/register` |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A warden record as stored by the backend.
///
/// `staff_number` uniquely identifies the record and never changes after
/// creation; uniqueness is enforced by the backend, not here.
/// `entry_date_time` is assigned server-side on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Warden {
    pub staff_number: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub entry_date_time: DateTime<Utc>,
}

impl Warden {
    /// Display name, first name then last.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of a create or update call — the validated form fields, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WardenPayload {
    pub staff_number: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
}

/// Body of a successful delete.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a login call.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of a registration call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub staff_number: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warden_deserializes_from_backend_json() {
        let warden: Warden = serde_json::from_str(
            r#"{
                "staffNumber": "S1",
                "firstName": "Ann",
                "lastName": "Lee",
                "location": "Chapel",
                "entryDateTime": "2026-08-07T09:30:00.000Z"
            }"#,
        )
        .unwrap();
        assert_eq!(warden.staff_number, "S1");
        assert_eq!(warden.location, "Chapel");
        assert_eq!(warden.full_name(), "Ann Lee");
    }

    #[test]
    fn warden_rejects_unknown_fields() {
        let result = serde_json::from_str::<Warden>(
            r#"{
                "staffNumber": "S1",
                "firstName": "Ann",
                "lastName": "Lee",
                "location": "Chapel",
                "entryDateTime": "2026-08-07T09:30:00.000Z",
                "floor": 3
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn warden_rejects_missing_fields() {
        let result = serde_json::from_str::<Warden>(r#"{"staffNumber": "S1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn payload_serializes_camel_case() {
        let payload = WardenPayload {
            staff_number: "S1".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            location: "Chapel".into(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "staffNumber": "S1",
                "firstName": "Ann",
                "lastName": "Lee",
                "location": "Chapel"
            })
        );
    }
}
