//! Plan snapshot handling for loading and saving collaboration state.
//!
//! The snapshot is the JSON document the UI shell hands the engines once
//! per render: the full section list, the resolved co-parent presence flag,
//! and optionally the custody schedule being drafted. It is also the trust
//! boundary — past deserialization, the engines assume well-formed data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::schedule::ScheduleData;
use crate::error::{CoplanError, Result};
use crate::section::Section;
use crate::types::SectionState;

/// A point-in-time view of the whole plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Resolved by the external presence subsystem, never computed here
    #[serde(default)]
    pub co_parent_online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleData>,
}

impl PlanSnapshot {
    /// Load a snapshot from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&json)?;
        debug!(sections = snapshot.sections.len(), "loaded plan snapshot");
        Ok(snapshot)
    }

    /// Save a snapshot to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// A place where a section's state disagrees with its attached data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    /// `needs-resolution` with an empty conflict list
    MissingConflicts { section_id: String },
    /// `complete` without both signatures
    MissingSignatures { section_id: String },
    /// State string nobody recognizes
    UnknownState { section_id: String },
}

impl std::fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingConflicts { section_id } => {
                write!(f, "section {section_id} needs resolution but records no conflicts")
            }
            Self::MissingSignatures { section_id } => {
                write!(f, "section {section_id} is complete but not signed by both parents")
            }
            Self::UnknownState { section_id } => {
                write!(f, "section {section_id} has an unrecognized state")
            }
        }
    }
}

/// Report every place a section's state is inconsistent with its data.
///
/// State is assigned upstream and treated as authoritative; this check
/// reports disagreements, it never repairs them.
pub fn validate(sections: &[Section]) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();

    for section in sections {
        match section.state {
            SectionState::NeedsResolution => {
                if section.conflicts().is_empty() {
                    issues.push(ConsistencyIssue::MissingConflicts {
                        section_id: section.id.clone(),
                    });
                }
            }
            SectionState::Complete => {
                if !section.signatures().is_some_and(|s| s.both_signed()) {
                    issues.push(ConsistencyIssue::MissingSignatures {
                        section_id: section.id.clone(),
                    });
                }
            }
            SectionState::Unknown => {
                issues.push(ConsistencyIssue::UnknownState {
                    section_id: section.id.clone(),
                });
            }
            _ => {}
        }
    }

    issues
}

/// Like [`validate`], but folds findings into an error for callers that
/// only need pass/fail
pub fn ensure_consistent(sections: &[Section]) -> Result<()> {
    let issues = validate(sections);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(CoplanError::validation(format!(
            "{} consistency issue(s) found",
            issues.len()
        )))
    }
}
