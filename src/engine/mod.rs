//! Engine modules — turns a chosen rotation pattern into day-level custody
//! assignments.
//!
//! The engine layer sits between configuration (which rotation the parents
//! picked) and presentation (the calendar grid). It generates and edits the
//! day→parent map; it never renders it.

pub mod schedule;
