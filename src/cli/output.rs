//! Terminal rendering of sweep progress and results.

use colored::Colorize;

use crate::config::ResolvedConfig;
use crate::sweep::{SweepEvent, SweepReport};

/// One-line description of what is about to be scanned.
pub fn scan_banner(config: &ResolvedConfig) -> String {
    if config.global {
        format!(
            "Scanning global skills for {} agents",
            config.agents.len()
        )
    } else {
        format!("Scanning project skills in {}", config.cwd.display())
    }
}

/// Render one event as a line of text, or `None` for silent events.
pub fn format_event(event: &SweepEvent) -> Option<String> {
    let line = match event {
        SweepEvent::ScanCompleted {
            skills,
            occurrences,
        } => {
            if *skills == 0 {
                return None;
            }
            format!(
                "{} Found {} skills ({} installations)",
                "•".blue(),
                skills.to_string().bold(),
                occurrences
            )
        }
        SweepEvent::SkillRemoved {
            skill,
            agent_label,
            path,
        } => format!(
            "{} Removed {} from {} {}",
            "✓".green(),
            skill.cyan(),
            agent_label,
            path.display().to_string().dimmed()
        ),
        SweepEvent::DirectoryRemoved {
            kind,
            agent_label,
            path,
        } => format!(
            "{} Removed empty {kind} for {agent_label} {}",
            "✓".green(),
            path.display().to_string().dimmed()
        ),
        SweepEvent::RemovalFailed(failure) => {
            let subject = if failure.skill.is_empty() {
                failure.kind.to_string()
            } else {
                failure.skill.clone()
            };
            format!(
                "{} Failed to remove {} ({}) at {}: {}",
                "✗".red(),
                subject.cyan(),
                failure.agent_label,
                failure.path.display(),
                failure.message
            )
        }
        SweepEvent::CleanupSkipped { kind, count } => {
            format!("{} Left {count} empty {kind} path(s) in place", "•".yellow())
        }
    };
    Some(line)
}

pub fn print_event(event: SweepEvent) {
    if let Some(line) = format_event(&event) {
        match event {
            SweepEvent::RemovalFailed(_) => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

pub fn format_summary(report: &SweepReport) -> String {
    if report.removed_count() == 0 && !report.has_failures() {
        return "Nothing was removed".to_string();
    }
    let mut summary = format!(
        "Removed {} skill installations",
        report.removed_skills.len()
    );
    let dirs = report.removed_skills_dirs.len() + report.removed_agent_dirs.len();
    if dirs > 0 {
        summary.push_str(&format!(" and {dirs} empty directories"));
    }
    if report.has_failures() {
        summary.push_str(&format!(", {} failed", report.failures.len()));
    }
    if report.aborted {
        summary.push_str(" (cleanup cancelled)");
    }
    summary
}

pub fn print_summary(report: &SweepReport) {
    let summary = format_summary(report);
    if report.has_failures() {
        println!("{}", summary.yellow());
    } else {
        println!("{}", summary.green());
    }
}
