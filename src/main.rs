//! coplan - entry point for the plan inspection CLI
//!
//! A thin shell over the library engines: loads a snapshot, asks the
//! engines what matters, and prints the answer. All real decisions live in
//! the library.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use coplan::cli::{Cli, Commands};
use coplan::engine::schedule::{
    apply_pattern, swap_parents, DaySlot, DayTally, Parent, RotationPattern, ScheduleData,
    ScheduleDays, MAX_DAY_INDEX,
};
use coplan::logic::progress::{category_completion, completion};
use coplan::logic::recency::relative_time;
use coplan::logic::workflow::{categorize, is_co_parent_inactive, priority_section};
use coplan::snapshot::{validate, PlanSnapshot};
use coplan::types::SectionCategory;

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Commands::Dashboard {
            snapshot,
            online,
            threshold_days,
        } => run_dashboard(&snapshot, online, threshold_days),
        Commands::Schedule {
            pattern,
            weeks,
            swap,
        } => run_schedule(pattern, weeks, swap),
        Commands::Validate { snapshot } => run_validate(&snapshot),
    }
}

fn load_snapshot(path: &Path) -> Option<PlanSnapshot> {
    let result = PlanSnapshot::load_from_file(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()));
    match result {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("✗ {:#}", e);
            None
        }
    }
}

fn run_dashboard(path: &Path, online_flag: bool, threshold_days: i64) -> ExitCode {
    let Some(snapshot) = load_snapshot(path) else {
        return ExitCode::FAILURE;
    };
    let online = online_flag || snapshot.co_parent_online;
    info!(online, sections = snapshot.sections.len(), "rendering dashboard");

    let buckets = categorize(&snapshot.sections);
    println!("Sections ({} total)", snapshot.sections.len());
    print_bucket("Needs resolution", &buckets.needs_resolution);
    print_bucket("Your turn", &buckets.your_turn);
    print_bucket("Ready to start", &buckets.ready_to_start);
    print_bucket("Ready to sign", &buckets.ready_to_sign);
    print_bucket("Waiting on them", &buckets.waiting_on_them);
    print_bucket("Complete", &buckets.complete);

    let skipped = snapshot.sections.len() - buckets.known_len();
    if skipped > 0 {
        println!("  ({} section(s) with unrecognized state skipped)", skipped);
    }

    let overall = completion(&snapshot.sections);
    println!();
    println!(
        "Plan progress: {} of {} sections complete ({}%)",
        overall.completed,
        overall.total,
        overall.percent()
    );
    for &category in SectionCategory::all() {
        let progress = category_completion(&snapshot.sections, category);
        if progress.total > 0 {
            println!(
                "  {:<36} {} of {}",
                category.label(),
                progress.completed,
                progress.total
            );
        }
    }

    println!();
    match priority_section(&snapshot.sections, online) {
        Some(section) => {
            println!("Up next: {} [{}]", section.title, section.state.description());
            if let Some(timestamp) = section.activity_timestamp() {
                println!("  last activity {}", relative_time(timestamp, chrono::Utc::now()));
            }
        }
        None => println!("Up next: nothing actionable right now"),
    }

    if is_co_parent_inactive(&snapshot.sections, threshold_days) {
        println!(
            "Reminder: your co-parent has been quiet for {}+ days on sections waiting on them",
            threshold_days
        );
    }

    ExitCode::SUCCESS
}

fn print_bucket(label: &str, sections: &[&coplan::section::Section]) {
    println!("  {:<18} {}", format!("{label}:"), sections.len());
    for section in sections {
        println!("    - {}", section.title);
    }
}

fn run_schedule(pattern: RotationPattern, weeks: u32, swap: bool) -> ExitCode {
    info!(%pattern, weeks, swap, "generating schedule");
    let mut days = apply_pattern(pattern, weeks);
    if swap {
        days = swap_parents(&days);
    }
    let schedule = ScheduleData { days, ..Default::default() };

    print!("{}", render_grid(&schedule.days, weeks));

    let tally = DayTally::of(&schedule.days);
    println!();
    println!(
        "{}: {} days, {}: {} days",
        schedule.name_of(Parent::Parent1),
        tally.parent1,
        schedule.name_of(Parent::Parent2),
        tally.parent2
    );

    ExitCode::SUCCESS
}

/// Render the grid as fixed-width text, one row per week
fn render_grid(days: &ScheduleDays, weeks: u32) -> String {
    let mut out = String::from("        ");
    for label in DAY_LABELS {
        out.push_str(&format!("{:>4}", label));
    }
    out.push('\n');

    for week in 0..weeks {
        out.push_str(&format!("Week {:<3}", week + 1));
        for day in 0..=MAX_DAY_INDEX {
            let cell = match days.get(&DaySlot::new(week, day)) {
                Some(Parent::Parent1) => "P1",
                Some(Parent::Parent2) => "P2",
                None => "--",
            };
            out.push_str(&format!("{:>4}", cell));
        }
        out.push('\n');
    }
    out
}

fn run_validate(path: &Path) -> ExitCode {
    let Some(snapshot) = load_snapshot(path) else {
        return ExitCode::FAILURE;
    };

    let issues = validate(&snapshot.sections);
    if issues.is_empty() {
        info!("snapshot is consistent");
        println!("✓ Snapshot is consistent ({} sections)", snapshot.sections.len());
        ExitCode::SUCCESS
    } else {
        error!(count = issues.len(), "snapshot has consistency issues");
        for issue in &issues {
            eprintln!("✗ {}", issue);
        }
        ExitCode::FAILURE
    }
}
