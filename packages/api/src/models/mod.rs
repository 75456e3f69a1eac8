//! Wire types and derived aggregates.

mod stats;
mod warden;

pub use stats::DashboardStats;
pub use warden::{Credentials, DeleteConfirmation, Registration, Warden, WardenPayload};

/// Canonical campus location list, last entry included for staff working
/// remotely. The form offers the backend's `/locations` list when it has
/// arrived and falls back to this constant until then.
pub const CAMPUS_LOCATIONS: [&str; 16] = [
    "Alwyn Hall",
    "Beech Glade",
    "Bowers Building",
    "Burma Road Student Village",
    "Centre for Sport",
    "Chapel",
    "The Cottage",
    "Fred Wheeler Building",
    "Herbert Jarman Building",
    "King Alfred Centre",
    "Martial Rose Library",
    "Medecroft",
    "The Stripe",
    "Business School",
    "West Downs Centre",
    "Not on campus",
];
