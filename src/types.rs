//! Type-safe domain enums for the parenting-plan engines
//!
//! This module replaces the stringly-typed state values of the JSON
//! interchange format with proper Rust enums that provide compile-time
//! validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which parent performed an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Actor {
    You,
    Them,
}

/// Per-section collaboration state.
///
/// The six-value model drives the dashboard. Data may also arrive in the
/// reduced three-value shape used by the category progress view
/// (`not-started`, `completed`, `signed`); those strings deserialize onto
/// the closest six-value variant. Anything else lands on `Unknown`, which
/// is excluded from every bucket so a single bad record cannot take down a
/// dashboard render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter)]
pub enum SectionState {
    /// Neither parent has begun
    #[strum(serialize = "ready-to-start")]
    ReadyToStart,

    /// Co-parent answered, you haven't
    #[strum(serialize = "your-turn")]
    YourTurn,

    /// You answered, they haven't
    #[strum(serialize = "waiting-on-them")]
    WaitingOnThem,

    /// Both answered differently
    #[strum(serialize = "needs-resolution")]
    NeedsResolution,

    /// Aligned/resolved, needs signatures
    #[strum(serialize = "ready-to-sign")]
    ReadyToSign,

    /// Both signed
    #[strum(serialize = "complete")]
    Complete,

    /// Unrecognized state string (non-actionable)
    #[strum(serialize = "unknown")]
    Unknown,
}

impl SectionState {
    /// Map a wire-format state string onto the closed state set.
    ///
    /// Accepts both the six-value dashboard strings and the reduced
    /// three-value progress strings; anything unrecognized becomes
    /// `Unknown` rather than an error.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "ready-to-start" | "not-started" => Self::ReadyToStart,
            "your-turn" => Self::YourTurn,
            "waiting-on-them" => Self::WaitingOnThem,
            "needs-resolution" => Self::NeedsResolution,
            "ready-to-sign" | "completed" => Self::ReadyToSign,
            "complete" | "signed" => Self::Complete,
            _ => Self::Unknown,
        }
    }

    /// Returns true if this state has a concrete next step for the user
    #[inline]
    pub const fn is_actionable(self) -> bool {
        matches!(
            self,
            Self::ReadyToStart | Self::YourTurn | Self::NeedsResolution | Self::ReadyToSign
        )
    }

    /// Project onto the coarse three-value stage used by progress views.
    ///
    /// Sections still being negotiated (including conflicts and unknown
    /// records) all read as not started; only agreement and signatures move
    /// the progress bar.
    pub const fn stage(self) -> PlanStage {
        match self {
            Self::ReadyToSign => PlanStage::Completed,
            Self::Complete => PlanStage::Signed,
            Self::ReadyToStart
            | Self::YourTurn
            | Self::WaitingOnThem
            | Self::NeedsResolution
            | Self::Unknown => PlanStage::NotStarted,
        }
    }

    /// Returns a human-readable description of this state
    pub const fn description(self) -> &'static str {
        match self {
            Self::ReadyToStart => "Ready to start",
            Self::YourTurn => "Your turn",
            Self::WaitingOnThem => "Waiting on them",
            Self::NeedsResolution => "Needs resolution",
            Self::ReadyToSign => "Ready to sign",
            Self::Complete => "Complete",
            Self::Unknown => "Unknown",
        }
    }
}

impl Serialize for SectionState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SectionState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&s))
    }
}

/// Coarse section stage for the category progress view.
///
/// `completed` means agreed and awaiting signatures; `signed` means done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum PlanStage {
    #[serde(rename = "not-started")]
    #[strum(serialize = "not-started")]
    NotStarted,
    #[serde(rename = "completed")]
    #[strum(serialize = "completed")]
    Completed,
    #[serde(rename = "signed")]
    #[strum(serialize = "signed")]
    Signed,
}

/// Legal topic grouping for the plan progress view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum SectionCategory {
    #[serde(rename = "timesharing")]
    #[strum(serialize = "timesharing")]
    Timesharing,
    #[serde(rename = "decision-making")]
    #[strum(serialize = "decision-making")]
    DecisionMaking,
    #[serde(rename = "communication")]
    #[strum(serialize = "communication")]
    Communication,
    #[default]
    #[serde(rename = "other")]
    #[strum(serialize = "other")]
    Other,
}

impl SectionCategory {
    /// Returns the display heading for this category
    pub const fn label(self) -> &'static str {
        match self {
            Self::Timesharing => "Timesharing Schedule",
            Self::DecisionMaking => "Decision-Making & Responsibilities",
            Self::Communication => "Communication & Information",
            Self::Other => "Final Considerations",
        }
    }

    /// Returns all categories in display order
    pub const fn all() -> &'static [Self] {
        &[
            Self::Timesharing,
            Self::DecisionMaking,
            Self::Communication,
            Self::Other,
        ]
    }
}
