//! Section data model for the parenting plan
//!
//! A section is one legal topic requiring joint input and eventual
//! signatures from both parents. The structs here mirror the JSON
//! interchange documents produced by the form/session subsystem; field
//! names serialize in camelCase to stay compatible with that format.
//!
//! The workflow engine treats all of this as a read-only snapshot: state
//! transitions happen upstream, never here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Actor, SectionCategory, SectionState};

/// A recorded action by one of the parents on a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub by: Actor,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

/// A field where the two parents' answers differ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub field: String,
    pub your_value: Value,
    pub their_value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_suggestion: Option<String>,
}

/// Signature progress for a section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureStatus {
    pub you: bool,
    pub them: bool,
}

impl SignatureStatus {
    /// Returns true once both parents have signed
    #[inline]
    pub const fn both_signed(self) -> bool {
        self.you && self.them
    }
}

/// Answer and negotiation data attached to a section.
///
/// Answer values are schemaless because each legal topic has its own form
/// shape; the engines never interpret them, only their presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_answer: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub their_answer: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<Conflict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_status: Option<SignatureStatus>,
    /// Cached legal paragraph rendered from the agreed answers (opaque here)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_text: Option<String>,
}

/// One legal topic within the parenting plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub module_id: String,
    pub module_name: String,
    pub title: String,
    pub description: String,
    pub state: SectionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SectionCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    /// Author-controlled ordering hint within ready-to-start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<Activity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_data: Option<StateData>,
}

impl Section {
    /// Timestamp of the most recent recorded activity, if any
    #[inline]
    pub fn activity_timestamp(&self) -> Option<DateTime<Utc>> {
        self.last_activity.as_ref().map(|a| a.timestamp)
    }

    /// Unresolved conflicts, or an empty slice when none are recorded
    pub fn conflicts(&self) -> &[Conflict] {
        self.state_data
            .as_ref()
            .map(|data| data.conflicts.as_slice())
            .unwrap_or_default()
    }

    /// Signature progress, if the section has reached the signing phase
    pub fn signatures(&self) -> Option<SignatureStatus> {
        self.state_data.as_ref().and_then(|data| data.signature_status)
    }

    /// Category for progress grouping; uncategorized sections group under
    /// final considerations
    #[inline]
    pub fn category_or_other(&self) -> SectionCategory {
        self.category.unwrap_or_default()
    }
}
