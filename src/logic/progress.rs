//! Plan completion counts
//!
//! Backs the progress bar and the per-category breakdown. A section moves
//! the bar once it reaches agreement (`ready-to-sign`, i.e. stage
//! `completed`) or is fully signed; everything still under negotiation
//! counts as not started.

use crate::section::Section;
use crate::types::{PlanStage, SectionCategory};

/// Completed/total counts for a progress display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completion {
    pub completed: usize,
    pub total: usize,
}

impl Completion {
    /// Percentage complete, 0 when the plan has no sections
    pub const fn percent(self) -> u8 {
        if self.total == 0 {
            0
        } else {
            (self.completed * 100 / self.total) as u8
        }
    }
}

/// Overall completion across the whole plan
pub fn completion(sections: &[Section]) -> Completion {
    let completed = sections
        .iter()
        .filter(|s| matches!(s.state.stage(), PlanStage::Completed | PlanStage::Signed))
        .count();
    Completion {
        completed,
        total: sections.len(),
    }
}

/// Completion restricted to one category.
///
/// Sections without a category count toward `Other`.
pub fn category_completion(sections: &[Section], category: SectionCategory) -> Completion {
    let mut result = Completion::default();
    for section in sections {
        if section.category_or_other() != category {
            continue;
        }
        result.total += 1;
        if matches!(section.state.stage(), PlanStage::Completed | PlanStage::Signed) {
            result.completed += 1;
        }
    }
    result
}

/// The pair's joint course progress.
///
/// The plan is only as far along as the parent who is furthest behind, so
/// this is the minimum of the two individual percentages.
#[inline]
pub const fn joint_progress(yours: u8, theirs: u8) -> u8 {
    if yours < theirs { yours } else { theirs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionState;

    fn section(id: &str, state: SectionState, category: Option<SectionCategory>) -> Section {
        Section {
            id: id.into(),
            module_id: "m1".into(),
            module_name: "Module 1".into(),
            title: id.into(),
            description: String::new(),
            state,
            category,
            estimated_time: None,
            action_url: None,
            priority: None,
            last_activity: None,
            state_data: None,
        }
    }

    #[test]
    fn test_completion_counts_agreed_and_signed() {
        let sections = vec![
            section("a", SectionState::ReadyToStart, None),
            section("b", SectionState::NeedsResolution, None),
            section("c", SectionState::ReadyToSign, None),
            section("d", SectionState::Complete, None),
        ];
        let result = completion(&sections);
        assert_eq!(result.completed, 2);
        assert_eq!(result.total, 4);
        assert_eq!(result.percent(), 50);
    }

    #[test]
    fn test_completion_empty_plan() {
        let result = completion(&[]);
        assert_eq!(result, Completion::default());
        assert_eq!(result.percent(), 0);
    }

    #[test]
    fn test_category_completion_filters() {
        let sections = vec![
            section("a", SectionState::Complete, Some(SectionCategory::Timesharing)),
            section("b", SectionState::YourTurn, Some(SectionCategory::Timesharing)),
            section("c", SectionState::Complete, Some(SectionCategory::Communication)),
        ];
        let result = category_completion(&sections, SectionCategory::Timesharing);
        assert_eq!(result.completed, 1);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_uncategorized_sections_count_as_other() {
        let sections = vec![section("a", SectionState::ReadyToSign, None)];
        let other = category_completion(&sections, SectionCategory::Other);
        assert_eq!(other.total, 1);
        assert_eq!(other.completed, 1);
        let timesharing = category_completion(&sections, SectionCategory::Timesharing);
        assert_eq!(timesharing.total, 0);
    }

    #[test]
    fn test_joint_progress_is_minimum() {
        assert_eq!(joint_progress(80, 45), 45);
        assert_eq!(joint_progress(30, 90), 30);
        assert_eq!(joint_progress(60, 60), 60);
    }
}
