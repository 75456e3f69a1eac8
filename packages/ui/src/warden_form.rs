//! # Warden form
//!
//! Controlled form for adding or editing a warden record. Validation is
//! presence-only: every field must be non-empty after trimming. The submit
//! handler receives the raw field values untouched — trimming stored data is
//! the backend's business.

use api::{Warden, WardenPayload};
use dioxus::prelude::*;

use crate::locations::use_locations;

/// Whether the form creates a new record or edits an existing one. Editing
/// keeps the staff number read-only so the identifier stays stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WardenFields {
    pub staff_number: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
}

impl WardenFields {
    /// Pre-fill from an existing record.
    pub fn from_warden(warden: &Warden) -> Self {
        Self {
            staff_number: warden.staff_number.clone(),
            first_name: warden.first_name.clone(),
            last_name: warden.last_name.clone(),
            location: warden.location.clone(),
        }
    }

    /// The field values as a request body, verbatim.
    pub fn into_payload(self) -> WardenPayload {
        WardenPayload {
            staff_number: self.staff_number,
            first_name: self.first_name,
            last_name: self.last_name,
            location: self.location,
        }
    }
}

/// Per-field validation messages. `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub staff_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub location: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.staff_number.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.location.is_none()
    }
}

/// Presence check over every field. Whitespace-only input counts as empty.
pub fn validate(fields: &WardenFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if fields.staff_number.trim().is_empty() {
        errors.staff_number = Some("Staff number is required".to_string());
    }
    if fields.first_name.trim().is_empty() {
        errors.first_name = Some("First name is required".to_string());
    }
    if fields.last_name.trim().is_empty() {
        errors.last_name = Some("Last name is required".to_string());
    }
    if fields.location.trim().is_empty() {
        errors.location = Some("Location is required".to_string());
    }
    errors
}

/// Controlled add/edit form. `on_submit` fires only with a payload that
/// passed validation; editing a field clears that field's error alone.
#[component]
pub fn WardenForm(
    #[props(default = FormMode::Add)] mode: FormMode,
    warden: Option<Warden>,
    on_submit: EventHandler<WardenPayload>,
) -> Element {
    let locations = use_locations();
    let mut fields = use_signal(move || match &warden {
        Some(w) if mode == FormMode::Edit => WardenFields::from_warden(w),
        _ => WardenFields::default(),
    });
    let mut errors = use_signal(FieldErrors::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = fields();
        let found = validate(&current);
        if found.is_empty() {
            errors.set(FieldErrors::default());
            on_submit.call(current.into_payload());
        } else {
            errors.set(found);
        }
    };

    rsx! {
        div {
            class: "warden-form-container",
            h2 {
                if mode == FormMode::Add { "Add New Warden" } else { "Update Warden" }
            }
            form {
                class: "warden-form",
                onsubmit: handle_submit,

                div {
                    class: "form-group",
                    label { r#for: "staff-number", "Staff Number" }
                    input {
                        id: "staff-number",
                        r#type: "text",
                        value: fields().staff_number,
                        disabled: mode == FormMode::Edit,
                        class: if errors().staff_number.is_some() { "error" },
                        oninput: move |evt| {
                            fields.with_mut(|f| f.staff_number = evt.value());
                            errors.with_mut(|e| e.staff_number = None);
                        },
                    }
                    if let Some(message) = errors().staff_number {
                        span { class: "error-message", "{message}" }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "first-name", "First Name" }
                    input {
                        id: "first-name",
                        r#type: "text",
                        value: fields().first_name,
                        class: if errors().first_name.is_some() { "error" },
                        oninput: move |evt| {
                            fields.with_mut(|f| f.first_name = evt.value());
                            errors.with_mut(|e| e.first_name = None);
                        },
                    }
                    if let Some(message) = errors().first_name {
                        span { class: "error-message", "{message}" }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "last-name", "Last Name" }
                    input {
                        id: "last-name",
                        r#type: "text",
                        value: fields().last_name,
                        class: if errors().last_name.is_some() { "error" },
                        oninput: move |evt| {
                            fields.with_mut(|f| f.last_name = evt.value());
                            errors.with_mut(|e| e.last_name = None);
                        },
                    }
                    if let Some(message) = errors().last_name {
                        span { class: "error-message", "{message}" }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "location", "Working Location" }
                    select {
                        id: "location",
                        value: fields().location,
                        class: if errors().location.is_some() { "error" },
                        onchange: move |evt| {
                            fields.with_mut(|f| f.location = evt.value());
                            errors.with_mut(|e| e.location = None);
                        },
                        option { value: "", "Select a location" }
                        for location in locations.options() {
                            option {
                                key: "{location}",
                                value: "{location}",
                                selected: fields().location == location,
                                "{location}"
                            }
                        }
                    }
                    if let Some(message) = errors().location {
                        span { class: "error-message", "{message}" }
                    }
                }

                button {
                    r#type: "submit",
                    class: "submit-button",
                    if mode == FormMode::Add { "Add Warden" } else { "Update Warden" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn filled() -> WardenFields {
        WardenFields {
            staff_number: "S1".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            location: "Chapel".to_string(),
        }
    }

    #[test]
    fn complete_fields_validate_cleanly() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn each_blank_field_gets_its_own_error() {
        let mut fields = filled();
        fields.first_name = String::new();
        let errors = validate(&fields);
        assert_eq!(errors.first_name.as_deref(), Some("First name is required"));
        assert!(errors.staff_number.is_none());
        assert!(errors.last_name.is_none());
        assert!(errors.location.is_none());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut fields = filled();
        fields.staff_number = "   ".to_string();
        let errors = validate(&fields);
        assert_eq!(
            errors.staff_number.as_deref(),
            Some("Staff number is required")
        );
    }

    #[test]
    fn missing_location_selection_is_an_error() {
        let mut fields = filled();
        fields.location = String::new();
        let errors = validate(&fields);
        assert_eq!(errors.location.as_deref(), Some("Location is required"));
    }

    #[test]
    fn payload_passes_fields_through_unmodified() {
        let mut fields = filled();
        fields.first_name = " Ann ".to_string();
        let payload = fields.clone().into_payload();
        assert_eq!(payload.staff_number, fields.staff_number);
        assert_eq!(payload.first_name, " Ann ");
        assert_eq!(payload.last_name, fields.last_name);
        assert_eq!(payload.location, fields.location);
    }

    #[test]
    fn prefill_copies_the_record() {
        let warden = Warden {
            staff_number: "S9".to_string(),
            first_name: "Rae".to_string(),
            last_name: "Kim".to_string(),
            location: "Medecroft".to_string(),
            entry_date_time: Utc::now(),
        };
        let fields = WardenFields::from_warden(&warden);
        assert_eq!(fields.staff_number, "S9");
        assert_eq!(fields.location, "Medecroft");
    }
}
