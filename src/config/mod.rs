//! Per-invocation configuration: which skills directory to scan for each agent.

mod environment;

pub use environment::AgentEnvironment;

use std::path::{Path, PathBuf};

use crate::agents::{AgentId, AgentRegistry};

/// Runtime options supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Scan global configuration trees instead of the working directory.
    pub global: bool,
}

/// One agent with its concrete directories for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAgent {
    pub id: AgentId,
    pub display_name: String,
    /// Directory that directly contains the agent's skill directories.
    pub skills_dir: PathBuf,
    /// Parent of `skills_dir`.
    pub agent_dir: PathBuf,
}

/// Read-only configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub cwd: PathBuf,
    pub global: bool,
    /// Agents to scan, in registry order. Agents without a directory for the
    /// selected mode are absent.
    pub agents: Vec<ResolvedAgent>,
    /// Directories that must never be offered for deletion.
    pub protected_dirs: Vec<PathBuf>,
}

impl ResolvedConfig {
    pub fn agent(&self, id: AgentId) -> Option<&ResolvedAgent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    /// Whether `path` is the working directory, one of its ancestors, or home.
    pub fn is_protected(&self, path: &Path) -> bool {
        self.protected_dirs.iter().any(|dir| dir == path)
    }
}

/// Compute the directory to scan for every agent.
///
/// Pure path arithmetic: no filesystem access. In global mode agents that do
/// not support a global directory are skipped.
pub fn resolve(
    registry: &AgentRegistry,
    options: ResolveOptions,
    cwd: &Path,
    home: &Path,
) -> ResolvedConfig {
    let agents = registry
        .iter()
        .filter_map(|descriptor| {
            let skills_dir = if options.global {
                descriptor.global_skills_dir.clone()?
            } else {
                cwd.join(&descriptor.project_skills_dir)
            };
            let agent_dir = skills_dir
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| skills_dir.clone());
            Some(ResolvedAgent {
                id: descriptor.id,
                display_name: descriptor.display_name.clone(),
                skills_dir,
                agent_dir,
            })
        })
        .collect();

    let mut protected_dirs: Vec<PathBuf> = cwd.ancestors().map(Path::to_path_buf).collect();
    if !protected_dirs.iter().any(|dir| dir == home) {
        protected_dirs.push(home.to_path_buf());
    }

    ResolvedConfig {
        cwd: cwd.to_path_buf(),
        global: options.global,
        agents,
        protected_dirs,
    }
}
