//! Section workflow engine
//!
//! Owns the per-section collaboration view: who answered what, where the
//! conflicts are, and which section deserves the user's attention next.
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects — a function of the snapshot
//! - **Read-only**: State transitions happen in the form/session subsystem;
//!   this engine never mutates a section
//! - **Never raises**: A malformed record degrades to non-actionable rather
//!   than failing a dashboard render
//!
//! # Priority Ladder
//!
//! Evaluated top to bottom, first nonempty bucket wins:
//!
//! | Rank | Bucket | Ordering within bucket |
//! |------|------------------|------------------------------------|
//! | 1 | needs-resolution | input order (only while co-parent is online) |
//! | 2 | your-turn | most recent co-parent activity first |
//! | 3 | ready-to-start | lowest priority hint first |
//! | 4 | ready-to-sign | input order |
//!
//! The ladder favors synchronous conflict resolution while both parents are
//! present, then responding to the partner, then self-paced new work, then
//! low-effort signatures.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::section::Section;
use crate::types::SectionState;

/// Days of co-parent silence before the reminder affordance is offered
pub const DEFAULT_INACTIVITY_THRESHOLD_DAYS: i64 = 3;

/// Sections partitioned by workflow state.
///
/// Membership is mutually exclusive; unknown-state sections are absent from
/// every bucket, so the bucket totals may be less than the snapshot length.
#[derive(Debug, Default)]
pub struct SectionBuckets<'a> {
    pub ready_to_start: Vec<&'a Section>,
    pub your_turn: Vec<&'a Section>,
    pub waiting_on_them: Vec<&'a Section>,
    pub needs_resolution: Vec<&'a Section>,
    pub ready_to_sign: Vec<&'a Section>,
    pub complete: Vec<&'a Section>,
}

impl<'a> SectionBuckets<'a> {
    /// Total number of sections across all buckets (unknown states excluded)
    pub fn known_len(&self) -> usize {
        self.ready_to_start.len()
            + self.your_turn.len()
            + self.waiting_on_them.len()
            + self.needs_resolution.len()
            + self.ready_to_sign.len()
            + self.complete.len()
    }

    /// Returns true if no section landed in any bucket
    pub fn is_empty(&self) -> bool {
        self.known_len() == 0
    }
}

/// Partition a section snapshot by workflow state.
///
/// Input order is preserved within each bucket. Unknown-state sections are
/// dropped rather than reported as errors.
pub fn categorize(sections: &[Section]) -> SectionBuckets<'_> {
    let mut buckets = SectionBuckets::default();

    for section in sections {
        match section.state {
            SectionState::ReadyToStart => buckets.ready_to_start.push(section),
            SectionState::YourTurn => buckets.your_turn.push(section),
            SectionState::WaitingOnThem => buckets.waiting_on_them.push(section),
            SectionState::NeedsResolution => buckets.needs_resolution.push(section),
            SectionState::ReadyToSign => buckets.ready_to_sign.push(section),
            SectionState::Complete => buckets.complete.push(section),
            SectionState::Unknown => {
                debug!(id = %section.id, "section has unrecognized state, excluding from buckets");
            }
        }
    }

    buckets
}

/// Pick the section the "Continue" button should target.
///
/// Returns `None` when nothing is actionable (everything complete, or only
/// waiting on the co-parent).
pub fn priority_section(sections: &[Section], co_parent_online: bool) -> Option<&Section> {
    let buckets = categorize(sections);

    // 1. Live presence makes conflict resolution cheapest to do right now
    if co_parent_online {
        if let Some(&section) = buckets.needs_resolution.first() {
            return Some(section);
        }
    }

    // 2. Respond to the co-parent, freshest input first so it doesn't go stale
    if !buckets.your_turn.is_empty() {
        let mut freshest = buckets.your_turn[0];
        for &section in &buckets.your_turn[1..] {
            if section.activity_timestamp() > freshest.activity_timestamp() {
                freshest = section;
            }
        }
        return Some(freshest);
    }

    // 3. Self-paced new work, in author-controlled order
    if !buckets.ready_to_start.is_empty() {
        let mut next = buckets.ready_to_start[0];
        for &section in &buckets.ready_to_start[1..] {
            if section.priority.unwrap_or(0) < next.priority.unwrap_or(0) {
                next = section;
            }
        }
        return Some(next);
    }

    // 4. Quick wins: any signature unblocks progress
    if let Some(&section) = buckets.ready_to_sign.first() {
        return Some(section);
    }

    None
}

/// Check whether the co-parent has gone quiet on sections that are waiting
/// on them.
///
/// Gates the "send reminder" affordance. Only `waiting-on-them` sections
/// count — the user's own unfinished work never triggers a reminder.
pub fn is_co_parent_inactive(sections: &[Section], threshold_days: i64) -> bool {
    is_co_parent_inactive_at(sections, threshold_days, Utc::now())
}

/// Clock-explicit variant of [`is_co_parent_inactive`].
///
/// With no recorded activity on any waiting section, the co-parent is
/// treated as inactive: no evidence of activity is read as silence.
pub fn is_co_parent_inactive_at(
    sections: &[Section],
    threshold_days: i64,
    now: DateTime<Utc>,
) -> bool {
    let mut latest: Option<DateTime<Utc>> = None;
    let mut waiting_count = 0usize;

    for section in sections {
        if section.state != SectionState::WaitingOnThem {
            continue;
        }
        waiting_count += 1;
        if let Some(timestamp) = section.activity_timestamp() {
            latest = Some(latest.map_or(timestamp, |t| t.max(timestamp)));
        }
    }

    if waiting_count == 0 {
        return false;
    }

    match latest {
        Some(timestamp) => now.signed_duration_since(timestamp) >= Duration::days(threshold_days),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Activity;
    use crate::types::Actor;
    use chrono::TimeZone;

    fn section(id: &str, state: SectionState) -> Section {
        Section {
            id: id.into(),
            module_id: "m1".into(),
            module_name: "Module 1".into(),
            title: id.into(),
            description: String::new(),
            state,
            category: None,
            estimated_time: None,
            action_url: None,
            priority: None,
            last_activity: None,
            state_data: None,
        }
    }

    fn with_activity(mut s: Section, hour: u32) -> Section {
        s.last_activity = Some(Activity {
            by: Actor::Them,
            action: "answered".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 10, hour, 0, 0).unwrap(),
        });
        s
    }

    fn with_priority(mut s: Section, priority: u32) -> Section {
        s.priority = Some(priority);
        s
    }

    // =========================================================================
    // categorize
    // =========================================================================

    #[test]
    fn test_categorize_partitions_by_state() {
        let sections = vec![
            section("a", SectionState::ReadyToStart),
            section("b", SectionState::YourTurn),
            section("c", SectionState::WaitingOnThem),
            section("d", SectionState::NeedsResolution),
            section("e", SectionState::ReadyToSign),
            section("f", SectionState::Complete),
        ];
        let buckets = categorize(&sections);
        assert_eq!(buckets.ready_to_start.len(), 1);
        assert_eq!(buckets.your_turn.len(), 1);
        assert_eq!(buckets.waiting_on_them.len(), 1);
        assert_eq!(buckets.needs_resolution.len(), 1);
        assert_eq!(buckets.ready_to_sign.len(), 1);
        assert_eq!(buckets.complete.len(), 1);
        assert_eq!(buckets.known_len(), sections.len());
    }

    #[test]
    fn test_categorize_excludes_unknown_states() {
        let sections = vec![
            section("a", SectionState::ReadyToStart),
            section("b", SectionState::Unknown),
        ];
        let buckets = categorize(&sections);
        assert_eq!(buckets.known_len(), 1);
    }

    #[test]
    fn test_categorize_preserves_input_order() {
        let sections = vec![
            section("first", SectionState::YourTurn),
            section("second", SectionState::YourTurn),
        ];
        let buckets = categorize(&sections);
        assert_eq!(buckets.your_turn[0].id, "first");
        assert_eq!(buckets.your_turn[1].id, "second");
    }

    #[test]
    fn test_empty_snapshot_yields_empty_buckets() {
        let buckets = categorize(&[]);
        assert!(buckets.is_empty());
    }

    // =========================================================================
    // priority_section
    // =========================================================================

    #[test]
    fn test_priority_conflicts_win_when_online() {
        let sections = vec![
            section("turn", SectionState::YourTurn),
            section("conflict", SectionState::NeedsResolution),
        ];
        let pick = priority_section(&sections, true).unwrap();
        assert_eq!(pick.id, "conflict");
    }

    #[test]
    fn test_priority_conflicts_ignored_when_offline() {
        let sections = vec![
            section("turn", SectionState::YourTurn),
            section("conflict", SectionState::NeedsResolution),
        ];
        let pick = priority_section(&sections, false).unwrap();
        assert_eq!(pick.id, "turn");
    }

    #[test]
    fn test_priority_your_turn_picks_freshest_activity() {
        let sections = vec![
            with_activity(section("stale", SectionState::YourTurn), 8),
            with_activity(section("fresh", SectionState::YourTurn), 14),
        ];
        let pick = priority_section(&sections, false).unwrap();
        assert_eq!(pick.id, "fresh");
    }

    #[test]
    fn test_priority_your_turn_missing_timestamp_sorts_oldest() {
        let sections = vec![
            section("no-activity", SectionState::YourTurn),
            with_activity(section("dated", SectionState::YourTurn), 9),
        ];
        let pick = priority_section(&sections, false).unwrap();
        assert_eq!(pick.id, "dated");
    }

    #[test]
    fn test_priority_your_turn_tie_keeps_input_order() {
        let sections = vec![
            with_activity(section("first", SectionState::YourTurn), 9),
            with_activity(section("second", SectionState::YourTurn), 9),
        ];
        let pick = priority_section(&sections, false).unwrap();
        assert_eq!(pick.id, "first");
    }

    #[test]
    fn test_priority_ready_to_start_uses_priority_hint() {
        let sections = vec![
            with_priority(section("later", SectionState::ReadyToStart), 5),
            with_priority(section("soonest", SectionState::ReadyToStart), 1),
        ];
        let pick = priority_section(&sections, false).unwrap();
        assert_eq!(pick.id, "soonest");
    }

    #[test]
    fn test_priority_missing_hint_treated_as_zero() {
        let sections = vec![
            with_priority(section("hinted", SectionState::ReadyToStart), 2),
            section("unhinted", SectionState::ReadyToStart),
        ];
        let pick = priority_section(&sections, false).unwrap();
        assert_eq!(pick.id, "unhinted");
    }

    #[test]
    fn test_priority_ready_to_sign_is_last_resort() {
        let sections = vec![
            section("done", SectionState::Complete),
            section("sign-me", SectionState::ReadyToSign),
            section("waiting", SectionState::WaitingOnThem),
        ];
        let pick = priority_section(&sections, false).unwrap();
        assert_eq!(pick.id, "sign-me");
    }

    #[test]
    fn test_priority_none_when_nothing_actionable() {
        let sections = vec![
            section("done", SectionState::Complete),
            section("waiting", SectionState::WaitingOnThem),
            section("junk", SectionState::Unknown),
        ];
        assert!(priority_section(&sections, true).is_none());
    }

    // =========================================================================
    // is_co_parent_inactive
    // =========================================================================

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_inactive_false_without_waiting_sections() {
        let sections = vec![section("turn", SectionState::YourTurn)];
        assert!(!is_co_parent_inactive_at(&sections, 3, at(20)));
    }

    #[test]
    fn test_inactive_true_when_no_activity_recorded() {
        let sections = vec![section("waiting", SectionState::WaitingOnThem)];
        assert!(is_co_parent_inactive_at(&sections, 3, at(20)));
    }

    #[test]
    fn test_inactive_threshold_boundary_is_inclusive() {
        let mut waiting = section("waiting", SectionState::WaitingOnThem);
        waiting.last_activity = Some(Activity {
            by: Actor::Them,
            action: "answered".into(),
            timestamp: at(10),
        });
        let sections = vec![waiting];
        // exactly 3 days later
        assert!(is_co_parent_inactive_at(&sections, 3, at(13)));
        // one day short
        assert!(!is_co_parent_inactive_at(&sections, 3, at(12)));
    }

    #[test]
    fn test_inactive_uses_most_recent_waiting_activity() {
        let mut old = section("old", SectionState::WaitingOnThem);
        old.last_activity = Some(Activity {
            by: Actor::Them,
            action: "answered".into(),
            timestamp: at(1),
        });
        let mut recent = section("recent", SectionState::WaitingOnThem);
        recent.last_activity = Some(Activity {
            by: Actor::Them,
            action: "answered".into(),
            timestamp: at(14),
        });
        let sections = vec![old, recent];
        assert!(!is_co_parent_inactive_at(&sections, 3, at(15)));
    }

    #[test]
    fn test_inactive_ignores_activity_on_other_states() {
        // A fresh edit on the user's own section must not suppress the reminder
        let waiting = section("waiting", SectionState::WaitingOnThem);
        let busy = with_activity(section("turn", SectionState::YourTurn), 12);
        let sections = vec![waiting, busy];
        assert!(is_co_parent_inactive_at(&sections, 3, at(20)));
    }
}
