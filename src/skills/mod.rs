//! Skill discovery: scanning agent directories and grouping results by name.

pub mod aggregate;
pub mod sanitize;
pub mod scanner;

pub use aggregate::{aggregate, SkillRecord, SkillsMap};
pub use sanitize::{sanitize_name, UNNAMED_SKILL};
pub use scanner::{scan_agents, scan_skill_files, RawSkillMap, SkillOccurrence, SKILL_FILE_NAME};

use crate::config::ResolvedConfig;

/// Scan every agent in `config` and aggregate the results.
pub fn discover(config: &ResolvedConfig) -> SkillsMap {
    aggregate(scan_agents(config))
}
