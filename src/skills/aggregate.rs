use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::agents::AgentId;
use crate::skills::sanitize::sanitize_name;
use crate::skills::scanner::RawSkillMap;

/// One place a skill is installed, with everything needed to delete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecord {
    pub agent: AgentId,
    /// Sanitized base name of `agent_dir`, used for display.
    pub agent_label: String,
    pub skill_md_path: PathBuf,
    pub skill_dir: PathBuf,
    pub skills_dir: PathBuf,
    pub agent_dir: PathBuf,
}

/// Skill name to its installations, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsMap {
    skills: BTreeMap<String, Vec<SkillRecord>>,
}

impl SkillsMap {
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&[SkillRecord]> {
        self.skills.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.skills.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<SkillRecord>)> {
        self.skills.iter()
    }

    /// Total number of installations across all skills.
    pub fn occurrence_count(&self) -> usize {
        self.skills.values().map(Vec::len).sum()
    }

    /// Distinct agent labels a skill is installed under, in scan order.
    pub fn agent_labels(&self, name: &str) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for record in self.get(name).unwrap_or_default() {
            if !labels.contains(&record.agent_label.as_str()) {
                labels.push(&record.agent_label);
            }
        }
        labels
    }
}

/// Label each raw occurrence with its sanitized agent name.
pub fn aggregate(raw: RawSkillMap) -> SkillsMap {
    let skills: BTreeMap<String, Vec<SkillRecord>> = raw
        .into_inner()
        .into_iter()
        .map(|(name, occurrences)| {
            let records = occurrences
                .into_iter()
                .map(|occurrence| SkillRecord {
                    agent: occurrence.agent,
                    agent_label: agent_label(&occurrence.agent_dir),
                    skill_md_path: occurrence.skill_md_path,
                    skill_dir: occurrence.skill_dir,
                    skills_dir: occurrence.skills_dir,
                    agent_dir: occurrence.agent_dir,
                })
                .collect();
            (name, records)
        })
        .collect();

    debug!(skills = skills.len(), "aggregated scan results");
    SkillsMap { skills }
}

fn agent_label(agent_dir: &Path) -> String {
    let base = agent_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    sanitize_name(&base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::scanner::SkillOccurrence;
    use pretty_assertions::assert_eq;

    fn occurrence(agent: AgentId, agent_dir: &str, skill: &str) -> SkillOccurrence {
        let agent_dir = PathBuf::from(agent_dir);
        let skills_dir = agent_dir.join("skills");
        let skill_dir = skills_dir.join(skill);
        SkillOccurrence {
            agent,
            skill_md_path: skill_dir.join("SKILL.md"),
            skill_dir,
            skills_dir,
            agent_dir,
        }
    }

    #[test]
    fn records_carry_labels_and_all_deletion_paths() {
        let mut raw = RawSkillMap::new();
        raw.insert(occurrence(AgentId::ClaudeCode, "/p/.claude", "greet"));

        let map = aggregate(raw);
        let records = map.get("greet").unwrap();

        assert_eq!(
            records,
            &[SkillRecord {
                agent: AgentId::ClaudeCode,
                agent_label: "claude".to_string(),
                skill_md_path: PathBuf::from("/p/.claude/skills/greet/SKILL.md"),
                skill_dir: PathBuf::from("/p/.claude/skills/greet"),
                skills_dir: PathBuf::from("/p/.claude/skills"),
                agent_dir: PathBuf::from("/p/.claude"),
            }]
        );
    }

    #[test]
    fn identical_paths_from_two_agents_merge_into_one_record() {
        let mut raw = RawSkillMap::new();
        assert!(raw.insert(occurrence(AgentId::Amp, "/p/.agents", "greet")));
        assert!(!raw.insert(occurrence(AgentId::KimiCli, "/p/.agents", "greet")));

        let map = aggregate(raw);
        assert_eq!(map.len(), 1);
        assert_eq!(map.occurrence_count(), 1);
        assert_eq!(map.get("greet").unwrap()[0].agent, AgentId::Amp);
    }

    #[test]
    fn occurrences_keep_scan_order_within_a_skill() {
        let mut raw = RawSkillMap::new();
        raw.insert(occurrence(AgentId::Trae, "/p/.trae", "greet"));
        raw.insert(occurrence(AgentId::Cursor, "/p/.cursor", "greet"));
        raw.insert(occurrence(AgentId::Cursor, "/p/.cursor", "sort"));

        let map = aggregate(raw);
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["greet", "sort"]);
        assert_eq!(map.agent_labels("greet"), vec!["trae", "cursor"]);
        assert_eq!(map.occurrence_count(), 3);
    }

    #[test]
    fn unusual_agent_directory_names_are_sanitized() {
        let mut raw = RawSkillMap::new();
        raw.insert(occurrence(AgentId::Pi, "/p/My Agent!!", "greet"));

        let map = aggregate(raw);
        assert_eq!(map.get("greet").unwrap()[0].agent_label, "my-agent");
    }
}
