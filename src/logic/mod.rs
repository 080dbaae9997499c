//! Logic modules — derives "what should happen next" from collaboration state.
//!
//! The logic layer is a read-only view over a `Section` snapshot: it buckets
//! sections by state, picks the one action most worth doing now, and answers
//! the recency questions the dashboard asks.
//!
//! # Modules
//!
//! - `workflow` — State bucketing, next-action priority, co-parent inactivity
//! - `progress` — Completion counts for the plan and per-category views
//! - `recency` — Latest-activity lookup and relative-time display strings

pub mod progress;
pub mod recency;
pub mod workflow;
