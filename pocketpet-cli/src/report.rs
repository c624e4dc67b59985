//! Console and JSON rendering of the pet.
use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::{DateTime, Local};
use colored::{ColoredString, Colorize};
use pocketpet_game::{ActionOutcome, Expression, PetState, PetView, StatusTier};
use serde::Serialize;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
}

#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    pet: &'a PetState,
    day: u64,
    expression: Expression,
    tiers: BTreeMap<&'static str, StatusTier>,
    daytime: bool,
    message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ActionReport<'a> {
    action: &'a str,
    accepted: bool,
    message: &'static str,
    follow_up: Option<&'static str>,
    status: StatusReport<'a>,
}

fn status_report<'a>(pet: &'a PetState, view: &PetView) -> StatusReport<'a> {
    StatusReport {
        pet,
        day: view.day,
        expression: view.expression,
        tiers: view.stats.iter().map(|s| (s.label, s.tier)).collect(),
        daytime: view.daytime,
        message: view.message,
    }
}

fn tint(text: String, tier: StatusTier) -> ColoredString {
    match tier {
        StatusTier::Good => text.green(),
        StatusTier::Warning => text.yellow(),
        StatusTier::Critical => text.red(),
    }
}

fn bar(percent: i64) -> String {
    let filled = usize::try_from(percent.clamp(0, 100) / 5).unwrap_or(0);
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

fn format_timestamp(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms).map_or_else(
        || ms.to_string(),
        |ts| {
            ts.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    )
}

/// Render the current pet.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_status(
    pet: &PetState,
    view: &PetView,
    format: ReportFormat,
) -> anyhow::Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&status_report(pet, view))?),
        ReportFormat::Console => Ok(console_status(pet, view)),
    }
}

/// Render the result of an action.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_action(
    action: &str,
    outcome: &ActionOutcome,
    view: &PetView,
    format: ReportFormat,
) -> anyhow::Result<String> {
    let follow_up = outcome.effect.follow_up.map(|f| f.message);
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&ActionReport {
            action,
            accepted: outcome.accepted,
            message: outcome.effect.message,
            follow_up,
            status: status_report(&outcome.state, view),
        })?),
        ReportFormat::Console => {
            let mut out = String::new();
            let bubble = format!("💬 {}", outcome.effect.message);
            let bubble = if outcome.accepted {
                bubble.bright_cyan()
            } else {
                bubble.yellow()
            };
            let _ = writeln!(out, "{bubble}");
            if let Some(message) = follow_up {
                let _ = writeln!(out, "{}", format!("💬 {message}").cyan());
            }
            out.push_str(&console_status(&outcome.state, view));
            Ok(out)
        }
    }
}

fn console_status(pet: &PetState, view: &PetView) -> String {
    let mut out = String::new();
    let sky = if view.daytime { "☀️" } else { "🌙" };
    let _ = writeln!(
        out,
        "{} {}  {}",
        view.expression.emoji(),
        pet.name.bright_magenta().bold(),
        sky
    );
    let _ = writeln!(
        out,
        "Level {} • Day {} • EXP {}/100",
        view.level, view.day, view.exp
    );
    for line in &view.stats {
        let _ = writeln!(
            out,
            "  {:<10} {} {}",
            line.label,
            tint(bar(line.percent), line.tier),
            tint(format!("{:>3}%", line.percent), line.tier)
        );
    }
    let _ = writeln!(
        out,
        "{}",
        format!("Last update: {}", format_timestamp(pet.last_update)).dimmed()
    );
    out
}
