use std::collections::{BTreeMap, HashSet};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::agents::AgentId;
use crate::config::ResolvedConfig;

/// Marker file that turns a directory into a skill.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// One discovered `SKILL.md` and the directories derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillOccurrence {
    /// Agent whose scan found this file first.
    pub agent: AgentId,
    pub skill_md_path: PathBuf,
    /// Parent of `skill_md_path`; removed when the skill is deleted.
    pub skill_dir: PathBuf,
    /// Agent skills directory the file was found under.
    pub skills_dir: PathBuf,
    /// Parent of `skills_dir`.
    pub agent_dir: PathBuf,
}

impl SkillOccurrence {
    /// Name of the directory holding `SKILL.md`.
    pub fn skill_name(&self) -> String {
        self.skill_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Scan results for all agents: skill name to distinct occurrences.
///
/// Occurrences are unique by `skill_md_path`; the first agent to report a
/// path keeps it, so agents sharing a directory do not double-count.
#[derive(Debug, Clone, Default)]
pub struct RawSkillMap {
    skills: BTreeMap<String, Vec<SkillOccurrence>>,
    seen_paths: HashSet<PathBuf>,
}

impl RawSkillMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence. Returns `false` when its path was already known.
    pub fn insert(&mut self, occurrence: SkillOccurrence) -> bool {
        if !self.seen_paths.insert(occurrence.skill_md_path.clone()) {
            return false;
        }
        self.skills
            .entry(occurrence.skill_name())
            .or_default()
            .push(occurrence);
        true
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&[SkillOccurrence]> {
        self.skills.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<SkillOccurrence>)> {
        self.skills.iter()
    }

    pub(crate) fn into_inner(self) -> BTreeMap<String, Vec<SkillOccurrence>> {
        self.skills
    }
}

/// Find every `SKILL.md` below `dir`, at any depth, sorted.
///
/// A missing or unreadable directory yields no results. Symlinked
/// directories are followed, so a skill reached through a link reports a
/// path inside `dir` even though its contents live elsewhere.
pub fn scan_skill_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut builder = WalkBuilder::new(dir);
    builder.follow_links(true);
    builder.hidden(false);
    builder.ignore(false);
    builder.git_ignore(false);
    builder.git_exclude(false);
    builder.git_global(false);
    builder.parents(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                let is_file = entry
                    .file_type()
                    .map(|file_type| file_type.is_file())
                    .unwrap_or(false);
                if is_file && entry.file_name() == OsStr::new(SKILL_FILE_NAME) {
                    files.push(entry.into_path());
                }
            }
            Err(error) => {
                warn!(dir = %dir.display(), %error, "skipping unreadable entry while scanning for skills");
            }
        }
    }

    files.sort();
    files
}

/// Scan every resolved agent and merge the findings.
pub fn scan_agents(config: &ResolvedConfig) -> RawSkillMap {
    let mut raw = RawSkillMap::new();

    for agent in &config.agents {
        let files = scan_skill_files(&agent.skills_dir);
        let mut added = 0usize;
        for skill_md_path in files {
            let Some(skill_dir) = skill_md_path.parent().map(Path::to_path_buf) else {
                continue;
            };
            if skill_dir == agent.skills_dir {
                debug!(path = %skill_md_path.display(), "ignoring SKILL.md outside a skill directory");
                continue;
            }

            let occurrence = SkillOccurrence {
                agent: agent.id,
                skill_md_path,
                skill_dir,
                skills_dir: agent.skills_dir.clone(),
                agent_dir: agent.agent_dir.clone(),
            };
            if raw.insert(occurrence) {
                added += 1;
            }
        }

        if added > 0 {
            debug!(
                agent = %agent.id,
                dir = %agent.skills_dir.display(),
                added,
                "scanned agent skills directory"
            );
        }
    }

    raw
}
