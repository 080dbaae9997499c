//! coplan - parenting plan collaboration engines
//!
//! This library provides the two computational cores of the co-parenting
//! plan builder: the section workflow engine (who should work on what next)
//! and the custody schedule engine (rotation patterns and manual calendar
//! edits). Both are pure functions over caller-owned snapshots; the UI
//! shell supplies state and renders results.

pub mod cli;
pub mod engine;
pub mod error;
pub mod logic;
pub mod section;
pub mod snapshot;
pub mod types;

// Re-export main types for convenience
pub use engine::schedule::{
    apply_pattern, cycle_day, fill_range, swap_parents, DaySlot, DayTally, Parent,
    RotationPattern, ScheduleData, ScheduleDays, SlotParseError, MAX_DAY_INDEX,
};
pub use error::{CoplanError, Result};
pub use logic::progress::{category_completion, completion, joint_progress, Completion};
pub use logic::recency::{latest_activity, relative_time};
pub use logic::workflow::{
    categorize, is_co_parent_inactive, is_co_parent_inactive_at, priority_section,
    SectionBuckets, DEFAULT_INACTIVITY_THRESHOLD_DAYS,
};
pub use section::{Activity, Conflict, Section, SignatureStatus, StateData};
pub use snapshot::{ensure_consistent, validate, ConsistencyIssue, PlanSnapshot};
pub use types::{Actor, PlanStage, SectionCategory, SectionState};
