//! Build configuration for calendar generation.

use chrono::Duration;

/// Fixed values that parameterize event and document generation.
///
/// The deployment this tool was written for publishes Chinese Super League
/// schedules, so the defaults carry its product tag and label.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// How long a single match blocks the calendar.
    pub match_duration: Duration,
    /// Domain tag appended to every UID.
    pub uid_domain: String,
    /// PRODID emitted in every calendar header.
    pub product_id: String,
    /// League label used in event descriptions.
    pub league_label: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            match_duration: Duration::hours(2),
            uid_domain: "csl-calendar".to_string(),
            product_id: "-//CSL Calendar//CN".to_string(),
            league_label: "中超联赛".to_string(),
        }
    }
}
