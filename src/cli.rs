use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::schedule::RotationPattern;
use crate::logic::workflow::DEFAULT_INACTIVITY_THRESHOLD_DAYS;

/// coplan - parenting plan collaboration engines
#[derive(Parser)]
#[command(name = "coplan")]
#[command(about = "Inspect parenting-plan collaboration state and custody schedules")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show categorized sections and the suggested next action
    Dashboard {
        /// Path to a plan snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Treat the co-parent as currently online (overrides the snapshot)
        #[arg(long)]
        online: bool,

        /// Days of co-parent silence before suggesting a reminder
        #[arg(long, default_value_t = DEFAULT_INACTIVITY_THRESHOLD_DAYS)]
        threshold_days: i64,
    },
    /// Generate a custody calendar from a rotation pattern
    Schedule {
        /// Rotation pattern: 2-2-5-5, 2-2-3, 3-4-4-3, alternating-weeks, custom
        #[arg(short, long, default_value = "custom")]
        pattern: RotationPattern,

        /// Number of weeks to generate
        #[arg(short, long, default_value_t = 4)]
        weeks: u32,

        /// Swap parent roles after generating
        #[arg(long)]
        swap: bool,
    },
    /// Check a plan snapshot for state/data consistency
    Validate {
        /// Path to a plan snapshot JSON file
        snapshot: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_schedule_command() {
        let cli = Cli::try_parse_from(["coplan", "schedule", "--pattern", "2-2-5-5", "--weeks", "2"])
            .unwrap();
        match cli.command {
            Commands::Schedule { pattern, weeks, swap } => {
                assert_eq!(pattern, RotationPattern::TwoTwoFiveFive);
                assert_eq!(weeks, 2);
                assert!(!swap);
            }
            _ => panic!("expected schedule command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_pattern() {
        assert!(Cli::try_parse_from(["coplan", "schedule", "--pattern", "week-on-week-off"]).is_err());
    }

    #[test]
    fn test_cli_dashboard_defaults() {
        let cli = Cli::try_parse_from(["coplan", "dashboard", "--snapshot", "plan.json"]).unwrap();
        match cli.command {
            Commands::Dashboard { online, threshold_days, .. } => {
                assert!(!online);
                assert_eq!(threshold_days, DEFAULT_INACTIVITY_THRESHOLD_DAYS);
            }
            _ => panic!("expected dashboard command"),
        }
    }
}
