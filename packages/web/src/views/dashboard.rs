//! Dashboard view: aggregate tiles, the warden table, and the add/edit
//! forms wired to the warden store.

use api::{DashboardStats, Warden, WardenPayload};
use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;
use ui::icons::{FaPenToSquare, FaRightFromBracket, FaTrash};
use ui::{FormMode, Icon, WardenForm};

use crate::Route;

/// Format a server timestamp for the "Last Updated" column in the viewer's
/// local time.
fn format_entry_time(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%-d %B %Y, %H:%M")
        .to_string()
}

/// Blocking confirmation prompt. Non-wasm builds have no dialog to show and
/// proceed directly.
fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this warden?")
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let wardens = ui::use_wardens();
    let auth = ui::use_auth();
    let nav = use_navigator();
    let mut show_add_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Warden>::None);

    let state = wardens.state();
    let stats = DashboardStats::today(&state.wardens);

    let handle_add = move |payload: WardenPayload| {
        spawn(async move {
            let mut wardens = wardens;
            if wardens.add(&payload).await.is_ok() {
                show_add_form.set(false);
            }
        });
    };

    let handle_update = move |payload: WardenPayload| {
        spawn(async move {
            let Some(current) = editing() else { return };
            let mut wardens = wardens;
            // The path id is the record's existing staff number; it never changes.
            let _ = wardens.update(&current.staff_number, &payload).await;
            editing.set(None);
        });
    };

    let handle_edit = move |warden: Warden| {
        show_add_form.set(false);
        editing.set(Some(warden));
    };

    let handle_delete = move |staff_number: String| {
        if !confirm_delete() {
            return;
        }
        spawn(async move {
            let mut wardens = wardens;
            let _ = wardens.delete(&staff_number).await;
        });
    };

    let handle_logout = move |_| {
        let mut auth = auth;
        auth.logout();
        nav.push(Route::Login {});
    };

    rsx! {
        div {
            class: "dashboard-container",
            div {
                class: "dashboard-header",
                h1 { "Fire Wardens Dashboard" }
                div {
                    class: "header-buttons",
                    button {
                        class: "add-warden-btn",
                        onclick: move |_| {
                            editing.set(None);
                            show_add_form.set(!show_add_form());
                        },
                        if show_add_form() { "Cancel" } else { "Add New Warden" }
                    }
                    button {
                        class: "logout-button",
                        onclick: handle_logout,
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        "Logout"
                    }
                }
            }

            div {
                class: "stats-row",
                StatTile { label: "Total Wardens", value: stats.total }
                StatTile { label: "Locations Covered", value: stats.locations_covered }
                StatTile { label: "Active Today", value: stats.active_today }
            }

            if show_add_form() {
                div {
                    class: "add-warden-form",
                    WardenForm { mode: FormMode::Add, on_submit: handle_add }
                }
            }

            if let Some(current) = editing() {
                div {
                    class: "edit-form-container",
                    WardenForm {
                        // Keyed by record so switching rows resets the fields.
                        key: "{current.staff_number}",
                        mode: FormMode::Edit,
                        warden: current.clone(),
                        on_submit: handle_update,
                    }
                    button {
                        class: "cancel-button",
                        onclick: move |_| editing.set(None),
                        "Cancel"
                    }
                }
            } else if state.loading {
                div {
                    class: "loading-spinner",
                    div { class: "spinner" }
                }
            } else if let Some(err) = state.error {
                p { class: "error-message", "Error: {err}" }
            } else {
                div {
                    class: "wardens-table-container",
                    if state.wardens.is_empty() {
                        p { "No wardens registered yet." }
                    } else {
                        table {
                            class: "wardens-table",
                            thead {
                                tr {
                                    th { "Staff Number" }
                                    th { "Name" }
                                    th { "Location" }
                                    th { "Last Updated" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for warden in state.wardens.clone() {
                                    WardenRow {
                                        key: "{warden.staff_number}",
                                        warden: warden.clone(),
                                        on_edit: handle_edit,
                                        on_delete: handle_delete,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatTile(label: String, value: usize) -> Element {
    rsx! {
        div {
            class: "stat-tile",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[component]
fn WardenRow(
    warden: Warden,
    on_edit: EventHandler<Warden>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        tr {
            td { "{warden.staff_number}" }
            td { "{warden.full_name()}" }
            td { "{warden.location}" }
            td { "{format_entry_time(&warden.entry_date_time)}" }
            td {
                class: "action-buttons",
                button {
                    class: "edit-button",
                    onclick: {
                        let warden = warden.clone();
                        move |_| on_edit.call(warden.clone())
                    },
                    Icon { icon: FaPenToSquare, width: 12, height: 12 }
                    "Edit"
                }
                button {
                    class: "delete-button",
                    onclick: {
                        let staff_number = warden.staff_number.clone();
                        move |_| on_delete.call(staff_number.clone())
                    },
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    "Delete"
                }
            }
        }
    }
}
