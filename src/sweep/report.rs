use std::path::PathBuf;

use strum::Display;

/// What kind of directory a deletion targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DeletionKind {
    #[strum(serialize = "skill")]
    Skill,
    #[strum(serialize = "skills directory")]
    SkillsDirectory,
    #[strum(serialize = "agent directory")]
    AgentDirectory,
}

/// One deletion that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub kind: DeletionKind,
    /// Skill name for skill deletions, empty otherwise.
    pub skill: String,
    pub agent_label: String,
    pub path: PathBuf,
    pub message: String,
}

/// Progress notifications published while a sweep runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepEvent {
    ScanCompleted {
        skills: usize,
        occurrences: usize,
    },
    SkillRemoved {
        skill: String,
        agent_label: String,
        path: PathBuf,
    },
    DirectoryRemoved {
        kind: DeletionKind,
        agent_label: String,
        path: PathBuf,
    },
    RemovalFailed(DeletionFailure),
    /// The operator declined a cleanup confirmation.
    CleanupSkipped {
        kind: DeletionKind,
        count: usize,
    },
}

/// Everything a completed sweep changed on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub removed_skills: Vec<PathBuf>,
    pub removed_skills_dirs: Vec<PathBuf>,
    pub removed_agent_dirs: Vec<PathBuf>,
    pub failures: Vec<DeletionFailure>,
    /// Set when a cleanup confirmation was cancelled and the remaining
    /// phases were not run.
    pub aborted: bool,
}

impl SweepReport {
    pub fn removed_count(&self) -> usize {
        self.removed_skills.len() + self.removed_skills_dirs.len() + self.removed_agent_dirs.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// How a sweep ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Nothing to offer; no prompt was shown.
    NoSkills,
    /// The operator cancelled skill selection; nothing was touched.
    Cancelled,
    Completed(SweepReport),
}
