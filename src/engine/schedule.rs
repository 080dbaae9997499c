//! Custody Schedule Engine
//!
//! Translates a named rotation pattern into a grid of day→parent
//! assignments, and applies the discrete manual edits the calendar UI
//! offers: single-cell cycling, shift-click range fill, and whole-grid
//! parent swap.
//!
//! # Rotation Patterns
//!
//! Every pattern repeats on a two-week cycle; day 0 is Monday.
//!
//! | Pattern           | Even week                 | Odd week                  |
//! |-------------------|---------------------------|---------------------------|
//! | 2-2-5-5 / 2-2-3   | P1 MT, P2 WT, P1 F-Su     | P2 MT, P1 WT, P2 F-Su     |
//! | 3-4-4-3           | P1 M-W, P2 Th-Su          | P2 M-Th, P1 F-Su          |
//! | alternating-weeks | P1 all week               | P2 all week               |
//! | custom            | unassigned                | unassigned                |
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects — every operation takes a map
//!   and returns a new one, so stale snapshots held by the caller are never
//!   corrupted
//! - **Absence means unassigned**: A day with no entry has no parent; there
//!   is no explicit "empty" value in the map
//! - **Defensive bounds**: Out-of-range day indices no-op instead of
//!   panicking; coordinate validation belongs to the caller

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;
use tracing::debug;

/// Highest valid day index (Sunday; day 0 is Monday)
pub const MAX_DAY_INDEX: u8 = 6;

/// The two custody roles. Display labels live on [`ScheduleData`]; these
/// identifiers carry the assignment semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Parent {
    #[serde(rename = "parent1")]
    #[strum(serialize = "parent1")]
    Parent1,
    #[serde(rename = "parent2")]
    #[strum(serialize = "parent2")]
    Parent2,
}

impl Parent {
    /// The opposite role
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Parent1 => Self::Parent2,
            Self::Parent2 => Self::Parent1,
        }
    }
}

/// Errors parsing a composite day key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotParseError {
    #[error("day key must look like \"<week>-<day>\", got {0:?}")]
    Malformed(String),

    #[error("day index {0} is out of range (0-6)")]
    DayOutOfRange(u8),
}

/// One cell of the custody calendar: week row and day column.
///
/// Serializes as the composite string key `"<week>-<day>"` used by the
/// calendar interchange format (week ≥ 0, day 0=Monday … 6=Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DaySlot {
    pub week: u32,
    pub day: u8,
}

impl DaySlot {
    #[inline]
    pub const fn new(week: u32, day: u8) -> Self {
        Self { week, day }
    }

    /// Returns true if this slot falls inside a grid of `weeks` rows
    #[inline]
    pub const fn in_grid(self, weeks: u32) -> bool {
        self.week < weeks && self.day <= MAX_DAY_INDEX
    }
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.week, self.day)
    }
}

impl FromStr for DaySlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (week, day) = s
            .split_once('-')
            .ok_or_else(|| SlotParseError::Malformed(s.to_string()))?;
        let week: u32 = week
            .parse()
            .map_err(|_| SlotParseError::Malformed(s.to_string()))?;
        let day: u8 = day
            .parse()
            .map_err(|_| SlotParseError::Malformed(s.to_string()))?;
        if day > MAX_DAY_INDEX {
            return Err(SlotParseError::DayOutOfRange(day));
        }
        Ok(Self { week, day })
    }
}

impl Serialize for DaySlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DaySlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Day→parent assignments. A missing key means the day is unassigned.
pub type ScheduleDays = BTreeMap<DaySlot, Parent>;

/// The custody calendar document exchanged with the UI shell.
///
/// Parent names are display labels only; they never affect assignment
/// logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleData {
    #[serde(default)]
    pub days: ScheduleDays,
    #[serde(default = "default_parent1_name")]
    pub parent1_name: String,
    #[serde(default = "default_parent2_name")]
    pub parent2_name: String,
}

fn default_parent1_name() -> String {
    "Parent 1".to_string()
}

fn default_parent2_name() -> String {
    "Parent 2".to_string()
}

impl Default for ScheduleData {
    fn default() -> Self {
        Self {
            days: ScheduleDays::new(),
            parent1_name: default_parent1_name(),
            parent2_name: default_parent2_name(),
        }
    }
}

impl ScheduleData {
    /// Display name for a role
    pub fn name_of(&self, parent: Parent) -> &str {
        match parent {
            Parent::Parent1 => &self.parent1_name,
            Parent::Parent2 => &self.parent2_name,
        }
    }
}

/// Named rotation template, repeating on a two-week cycle.
///
/// `2-2-5-5` and `2-2-3` share the same day split; the two names reflect
/// different framings parents are taught in the course. `custom` (which
/// also parses from the empty string) assigns nothing and leaves the grid
/// to manual edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum RotationPattern {
    #[serde(rename = "2-2-5-5")]
    #[strum(serialize = "2-2-5-5")]
    TwoTwoFiveFive,
    #[serde(rename = "2-2-3")]
    #[strum(serialize = "2-2-3")]
    TwoTwoThree,
    #[serde(rename = "3-4-4-3")]
    #[strum(serialize = "3-4-4-3")]
    ThreeFourFourThree,
    #[serde(rename = "alternating-weeks")]
    #[strum(serialize = "alternating-weeks")]
    AlternatingWeeks,
    #[default]
    #[serde(rename = "custom", alias = "")]
    #[strum(serialize = "custom", serialize = "")]
    Custom,
}

impl RotationPattern {
    /// The parent this pattern puts in charge of a given cell, or `None`
    /// for unassigned.
    pub const fn assign(self, week: u32, day: u8) -> Option<Parent> {
        let flipped = week % 2 == 1;
        match self {
            Self::TwoTwoFiveFive | Self::TwoTwoThree => {
                // Mon-Tue / Wed-Thu / Fri-Sun blocks, roles swapping weekly
                let parent = if day <= 1 {
                    Parent::Parent1
                } else if day <= 3 {
                    Parent::Parent2
                } else {
                    Parent::Parent1
                };
                Some(if flipped { parent.other() } else { parent })
            }
            Self::ThreeFourFourThree => {
                let parent = if flipped {
                    if day <= 3 { Parent::Parent2 } else { Parent::Parent1 }
                } else if day <= 2 {
                    Parent::Parent1
                } else {
                    Parent::Parent2
                };
                Some(parent)
            }
            Self::AlternatingWeeks => {
                Some(if flipped { Parent::Parent2 } else { Parent::Parent1 })
            }
            Self::Custom => None,
        }
    }
}

// ============================================================================
// Grid Operations
// ============================================================================

/// Build the full grid for a pattern.
///
/// Recomputes every cell for `week ∈ [0, weeks)`, `day ∈ [0, 6]`. The result
/// replaces any existing grid wholesale: switching patterns discards manual
/// edits, and there is no undo within a session.
pub fn apply_pattern(pattern: RotationPattern, weeks: u32) -> ScheduleDays {
    let mut days = ScheduleDays::new();
    for week in 0..weeks {
        for day in 0..=MAX_DAY_INDEX {
            if let Some(parent) = pattern.assign(week, day) {
                days.insert(DaySlot::new(week, day), parent);
            }
        }
    }
    debug!(%pattern, weeks, assigned = days.len(), "applied rotation pattern");
    days
}

/// Cycle one cell: unassigned → parent1 → parent2 → unassigned.
///
/// The base manual-edit primitive, independent of any pattern. Out-of-range
/// day indices return the grid unchanged.
pub fn cycle_day(days: &ScheduleDays, slot: DaySlot) -> ScheduleDays {
    if slot.day > MAX_DAY_INDEX {
        return days.clone();
    }
    let mut next = days.clone();
    match days.get(&slot) {
        None => {
            next.insert(slot, Parent::Parent1);
        }
        Some(Parent::Parent1) => {
            next.insert(slot, Parent::Parent2);
        }
        Some(Parent::Parent2) => {
            next.remove(&slot);
        }
    }
    next
}

/// Assign every cell between `anchor` and `target` to `parent`.
///
/// The shift-click gesture: `anchor` is the remembered previous click,
/// `target` the shift-clicked cell; their order does not matter. Within a
/// single week the range covers only the days between the two clicks;
/// when the range spans multiple weeks every week in it fills Monday
/// through Sunday. Existing assignments inside the range are overwritten —
/// cycle logic does not apply here.
pub fn fill_range(
    days: &ScheduleDays,
    anchor: DaySlot,
    target: DaySlot,
    parent: Parent,
) -> ScheduleDays {
    let start_week = anchor.week.min(target.week);
    let end_week = anchor.week.max(target.week);
    let (start_day, end_day) = if anchor.week == target.week {
        (
            anchor.day.min(target.day).min(MAX_DAY_INDEX),
            anchor.day.max(target.day).min(MAX_DAY_INDEX),
        )
    } else {
        (0, MAX_DAY_INDEX)
    };

    let mut next = days.clone();
    for week in start_week..=end_week {
        for day in start_day..=end_day {
            next.insert(DaySlot::new(week, day), parent);
        }
    }
    next
}

/// Flip every assignment to the other parent; unassigned days stay
/// unassigned. Self-inverse, so applying it twice restores the input.
pub fn swap_parents(days: &ScheduleDays) -> ScheduleDays {
    days.iter()
        .map(|(&slot, &parent)| (slot, parent.other()))
        .collect()
}

/// Per-parent day counts for schedule summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTally {
    pub parent1: usize,
    pub parent2: usize,
}

impl DayTally {
    /// Count assigned days per parent across a grid
    pub fn of(days: &ScheduleDays) -> Self {
        let mut tally = Self::default();
        for parent in days.values() {
            match parent {
                Parent::Parent1 => tally.parent1 += 1,
                Parent::Parent2 => tally.parent2 += 1,
            }
        }
        tally
    }

    /// Total assigned days
    #[inline]
    pub const fn assigned(self) -> usize {
        self.parent1 + self.parent2
    }
}
