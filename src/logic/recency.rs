//! Activity recency helpers for dashboard cards

use chrono::{DateTime, Utc};

use crate::section::Section;

/// Most recent activity timestamp across a section slice, if any
pub fn latest_activity(sections: &[Section]) -> Option<DateTime<Utc>> {
    sections.iter().filter_map(|s| s.activity_timestamp()).max()
}

/// Render a timestamp relative to `now` ("5 minutes ago", "yesterday").
///
/// Timestamps in the future clamp to "just now"; clock skew between the two
/// parents' devices must not produce negative ages.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds().max(0);

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{} hours ago", seconds / 3_600)
    } else if seconds < 172_800 {
        "yesterday".to_string()
    } else {
        format!("{} days ago", seconds / 86_400)
    }
}
