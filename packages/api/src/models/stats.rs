//! Dashboard aggregates.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};

use super::Warden;

/// The three counts shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Every registered warden.
    pub total: usize,
    /// Distinct `location` values across the list.
    pub locations_covered: usize,
    /// Records whose last write happened on `today`, in the viewer's
    /// local time zone.
    pub active_today: usize,
}

impl DashboardStats {
    /// Derive the aggregates for `wardens` against an explicit local date.
    pub fn compute(wardens: &[Warden], today: NaiveDate) -> Self {
        let locations: HashSet<&str> = wardens.iter().map(|w| w.location.as_str()).collect();
        let active_today = wardens
            .iter()
            .filter(|w| w.entry_date_time.with_timezone(&Local).date_naive() == today)
            .count();
        Self {
            total: wardens.len(),
            locations_covered: locations.len(),
            active_today,
        }
    }

    /// Derive the aggregates against the current local date.
    pub fn today(wardens: &[Warden]) -> Self {
        Self::compute(wardens, Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn warden(staff_number: &str, location: &str, days_ago: i64) -> Warden {
        Warden {
            staff_number: staff_number.to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            location: location.to_string(),
            entry_date_time: Utc::now() - Duration::days(days_ago),
        }
    }

    #[test]
    fn empty_list_yields_zero_counts() {
        assert_eq!(
            DashboardStats::today(&[]),
            DashboardStats {
                total: 0,
                locations_covered: 0,
                active_today: 0
            }
        );
    }

    #[test]
    fn locations_covered_counts_distinct_values() {
        let wardens = vec![
            warden("S1", "Chapel", 0),
            warden("S2", "Chapel", 0),
            warden("S3", "Medecroft", 0),
        ];
        assert_eq!(DashboardStats::today(&wardens).locations_covered, 2);
    }

    #[test]
    fn active_today_ignores_older_entries() {
        let wardens = vec![
            warden("S1", "Chapel", 0),
            warden("S2", "Medecroft", 1),
            warden("S3", "The Stripe", 30),
        ];
        let stats = DashboardStats::today(&wardens);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active_today, 1);
    }
}
