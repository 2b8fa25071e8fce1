//! Interactive removal of skills and of the directories they leave empty.
//!
//! A sweep runs strictly sequential phases:
//! 1. the operator selects skill names,
//! 2. every installation of each selected skill is deleted,
//! 3. skills directories left without visible entries are collected,
//! 4. after one confirmation those directories are deleted,
//! 5. agent directories left without visible entries are collected,
//! 6. after a second confirmation those are deleted.
//!
//! Every deletion is attempted once; a failure is reported and the sweep
//! moves on.

mod filesystem;
mod report;

pub use report::{DeletionFailure, DeletionKind, SweepEvent, SweepOutcome, SweepReport};

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::prompt::{Prompt, PromptOutcome, SelectOption};
use crate::skills::{discover, SkillsMap};

use filesystem::{is_visibly_empty, remove_path};

/// Callback receiving sweep progress.
pub type EventSink = Arc<dyn Fn(SweepEvent) + Send + Sync>;

const SELECT_MESSAGE: &str = "Select skills to remove";

/// An agent whose skills were deleted during this sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchedAgent {
    pub agent_label: String,
    pub skills_dir: PathBuf,
    pub agent_dir: PathBuf,
}

/// A directory found empty and offered for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupTarget {
    pub agent_label: String,
    pub path: PathBuf,
}

/// Drives discovery, selection and deletion for one resolved configuration.
pub struct SkillSweeper {
    config: ResolvedConfig,
    event_sink: Option<EventSink>,
}

impl SkillSweeper {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            event_sink: None,
        }
    }

    pub fn with_event_sink(mut self, sink: EventSink) -> Self {
        self.event_sink = Some(sink);
        self
    }

    /// Scan all agents and group results by skill name.
    pub fn discover(&self) -> SkillsMap {
        let skills = discover(&self.config);
        self.emit(SweepEvent::ScanCompleted {
            skills: skills.len(),
            occurrences: skills.occurrence_count(),
        });
        skills
    }

    /// Run the full sweep: discover, select, delete, clean up.
    pub fn run(&self, prompt: &mut dyn Prompt) -> Result<SweepOutcome> {
        let skills = self.discover();
        if skills.is_empty() {
            return Ok(SweepOutcome::NoSkills);
        }

        let options = selection_options(&skills);
        let selected = match prompt.select_many(SELECT_MESSAGE, &options)? {
            PromptOutcome::Answered(selected) => selected,
            PromptOutcome::Cancelled => {
                debug!("skill selection cancelled");
                return Ok(SweepOutcome::Cancelled);
            }
        };

        self.sweep(&skills, &selected, prompt)
            .map(SweepOutcome::Completed)
    }

    /// Phases 2 to 6 for an already made selection.
    pub fn sweep(
        &self,
        skills: &SkillsMap,
        selected: &[String],
        prompt: &mut dyn Prompt,
    ) -> Result<SweepReport> {
        let mut report = SweepReport::default();

        let touched = self.remove_skills(skills, selected, &mut report);
        if touched.is_empty() {
            return Ok(report);
        }

        let empty_skills_dirs = self.find_empty_skills_dirs(&touched);
        if !self.confirm_and_remove(
            DeletionKind::SkillsDirectory,
            &empty_skills_dirs,
            prompt,
            &mut report,
        )? {
            report.aborted = true;
            return Ok(report);
        }

        let empty_agent_dirs = self.find_empty_agent_dirs(&touched);
        if !self.confirm_and_remove(
            DeletionKind::AgentDirectory,
            &empty_agent_dirs,
            prompt,
            &mut report,
        )? {
            report.aborted = true;
        }

        Ok(report)
    }

    /// Delete every installation of the selected skills.
    ///
    /// Returns the agents involved, first occurrence per agent directory.
    pub fn remove_skills(
        &self,
        skills: &SkillsMap,
        selected: &[String],
        report: &mut SweepReport,
    ) -> Vec<TouchedAgent> {
        let mut touched: Vec<TouchedAgent> = Vec::new();

        for name in selected {
            let Some(records) = skills.get(name) else {
                debug!(skill = %name, "selected skill is not in the scan results");
                continue;
            };

            for record in records {
                if !touched.iter().any(|agent| agent.agent_dir == record.agent_dir) {
                    touched.push(TouchedAgent {
                        agent_label: record.agent_label.clone(),
                        skills_dir: record.skills_dir.clone(),
                        agent_dir: record.agent_dir.clone(),
                    });
                }

                match remove_path(&record.skill_dir) {
                    Ok(()) => {
                        report.removed_skills.push(record.skill_dir.clone());
                        self.emit(SweepEvent::SkillRemoved {
                            skill: name.clone(),
                            agent_label: record.agent_label.clone(),
                            path: record.skill_dir.clone(),
                        });
                    }
                    Err(error) => self.record_failure(
                        &mut report.failures,
                        DeletionFailure {
                            kind: DeletionKind::Skill,
                            skill: name.clone(),
                            agent_label: record.agent_label.clone(),
                            path: record.skill_dir.clone(),
                            message: error.to_string(),
                        },
                    ),
                }
            }
        }

        touched
    }

    /// Skills directories of `touched` agents that have no visible entries.
    pub fn find_empty_skills_dirs(&self, touched: &[TouchedAgent]) -> Vec<CleanupTarget> {
        self.find_empty(touched, |agent| &agent.skills_dir)
    }

    /// Agent directories of `touched` agents that have no visible entries.
    pub fn find_empty_agent_dirs(&self, touched: &[TouchedAgent]) -> Vec<CleanupTarget> {
        self.find_empty(touched, |agent| &agent.agent_dir)
    }

    fn find_empty<F>(&self, touched: &[TouchedAgent], dir_of: F) -> Vec<CleanupTarget>
    where
        F: Fn(&TouchedAgent) -> &PathBuf,
    {
        let mut targets: Vec<CleanupTarget> = Vec::new();
        for agent in touched {
            let dir = dir_of(agent);
            if targets.iter().any(|target| &target.path == dir) {
                continue;
            }
            if self.config.is_protected(dir) {
                debug!(dir = %dir.display(), "not offering protected directory for cleanup");
                continue;
            }
            if is_visibly_empty(dir) {
                targets.push(CleanupTarget {
                    agent_label: agent.agent_label.clone(),
                    path: dir.clone(),
                });
            }
        }
        targets
    }

    /// Returns `false` when the operator cancelled the confirmation.
    fn confirm_and_remove(
        &self,
        kind: DeletionKind,
        targets: &[CleanupTarget],
        prompt: &mut dyn Prompt,
        report: &mut SweepReport,
    ) -> Result<bool> {
        if targets.is_empty() {
            return Ok(true);
        }

        match prompt.confirm(&cleanup_message(kind, targets))? {
            PromptOutcome::Cancelled => {
                debug!(%kind, "cleanup confirmation cancelled");
                return Ok(false);
            }
            PromptOutcome::Answered(false) => {
                self.emit(SweepEvent::CleanupSkipped {
                    kind,
                    count: targets.len(),
                });
                return Ok(true);
            }
            PromptOutcome::Answered(true) => {}
        }

        for target in targets {
            match remove_path(&target.path) {
                Ok(()) => {
                    let removed = match kind {
                        DeletionKind::AgentDirectory => &mut report.removed_agent_dirs,
                        _ => &mut report.removed_skills_dirs,
                    };
                    removed.push(target.path.clone());
                    self.emit(SweepEvent::DirectoryRemoved {
                        kind,
                        agent_label: target.agent_label.clone(),
                        path: target.path.clone(),
                    });
                }
                Err(error) => self.record_failure(
                    &mut report.failures,
                    DeletionFailure {
                        kind,
                        skill: String::new(),
                        agent_label: target.agent_label.clone(),
                        path: target.path.clone(),
                        message: error.to_string(),
                    },
                ),
            }
        }
        Ok(true)
    }

    fn record_failure(&self, failures: &mut Vec<DeletionFailure>, failure: DeletionFailure) {
        warn!(
            kind = %failure.kind,
            agent = %failure.agent_label,
            path = %failure.path.display(),
            error = %failure.message,
            "deletion failed"
        );
        failures.push(failure.clone());
        self.emit(SweepEvent::RemovalFailed(failure));
    }

    fn emit(&self, event: SweepEvent) {
        if let Some(sink) = &self.event_sink {
            sink(event);
        }
    }
}

/// One selectable entry per skill, hinting at the agents that have it.
pub fn selection_options(skills: &SkillsMap) -> Vec<SelectOption> {
    skills
        .names()
        .map(|name| SelectOption {
            value: name.to_string(),
            label: name.to_string(),
            hint: Some(skills.agent_labels(name).join(", ")),
        })
        .collect()
}

fn cleanup_message(kind: DeletionKind, targets: &[CleanupTarget]) -> String {
    let heading = match kind {
        DeletionKind::AgentDirectory => "These agent directories are now empty:",
        _ => "These skills directories are now empty:",
    };
    let mut message = heading.to_string();
    for target in targets {
        message.push_str(&format!(
            "\n  {}: {}",
            target.agent_label,
            target.path.display()
        ));
    }
    message.push_str("\nDelete them?");
    message
}
