//! Static table of supported coding agents and where they keep skills.

use std::path::{Path, PathBuf};

use strum::{Display, EnumString};

use crate::config::AgentEnvironment;

/// Canonical identifiers for every agent whose skills can be swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum AgentId {
    Amp,
    Antigravity,
    Augment,
    ClaudeCode,
    Openclaw,
    Cline,
    Codebuddy,
    Codex,
    CommandCode,
    Continue,
    Crush,
    Cursor,
    Droid,
    GeminiCli,
    GithubCopilot,
    Goose,
    Junie,
    IflowCli,
    Kilo,
    KimiCli,
    KiroCli,
    Kode,
    Mcpjam,
    MistralVibe,
    Mux,
    Opencode,
    Openhands,
    Pi,
    Qoder,
    QwenCode,
    Replit,
    Roo,
    Trae,
    TraeCn,
    Windsurf,
    Zencoder,
    Neovate,
    Pochi,
    Adal,
}

impl AgentId {
    /// All agents in registry order.
    pub const ALL: [AgentId; 39] = [
        Self::Amp,
        Self::Antigravity,
        Self::Augment,
        Self::ClaudeCode,
        Self::Openclaw,
        Self::Cline,
        Self::Codebuddy,
        Self::Codex,
        Self::CommandCode,
        Self::Continue,
        Self::Crush,
        Self::Cursor,
        Self::Droid,
        Self::GeminiCli,
        Self::GithubCopilot,
        Self::Goose,
        Self::Junie,
        Self::IflowCli,
        Self::Kilo,
        Self::KimiCli,
        Self::KiroCli,
        Self::Kode,
        Self::Mcpjam,
        Self::MistralVibe,
        Self::Mux,
        Self::Opencode,
        Self::Openhands,
        Self::Pi,
        Self::Qoder,
        Self::QwenCode,
        Self::Replit,
        Self::Roo,
        Self::Trae,
        Self::TraeCn,
        Self::Windsurf,
        Self::Zencoder,
        Self::Neovate,
        Self::Pochi,
        Self::Adal,
    ];

    /// Human-readable product name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Amp => "Amp",
            Self::Antigravity => "Antigravity",
            Self::Augment => "Augment",
            Self::ClaudeCode => "Claude Code",
            Self::Openclaw => "OpenClaw",
            Self::Cline => "Cline",
            Self::Codebuddy => "CodeBuddy",
            Self::Codex => "Codex",
            Self::CommandCode => "Command Code",
            Self::Continue => "Continue",
            Self::Crush => "Crush",
            Self::Cursor => "Cursor",
            Self::Droid => "Droid",
            Self::GeminiCli => "Gemini CLI",
            Self::GithubCopilot => "GitHub Copilot",
            Self::Goose => "Goose",
            Self::Junie => "Junie",
            Self::IflowCli => "iFlow CLI",
            Self::Kilo => "Kilo Code",
            Self::KimiCli => "Kimi Code CLI",
            Self::KiroCli => "Kiro CLI",
            Self::Kode => "Kode",
            Self::Mcpjam => "MCPJam",
            Self::MistralVibe => "Mistral Vibe",
            Self::Mux => "Mux",
            Self::Opencode => "OpenCode",
            Self::Openhands => "OpenHands",
            Self::Pi => "Pi",
            Self::Qoder => "Qoder",
            Self::QwenCode => "Qwen Code",
            Self::Replit => "Replit",
            Self::Roo => "Roo Code",
            Self::Trae => "Trae",
            Self::TraeCn => "Trae CN",
            Self::Windsurf => "Windsurf",
            Self::Zencoder => "Zencoder",
            Self::Neovate => "Neovate",
            Self::Pochi => "Pochi",
            Self::Adal => "AdaL",
        }
    }

    /// Skills directory relative to a project root.
    pub const fn project_skills_dir(self) -> &'static str {
        match self {
            Self::Amp | Self::KimiCli => ".agents/skills",
            Self::Antigravity | Self::Replit => ".agent/skills",
            Self::Augment => ".augment/rules",
            Self::ClaudeCode => ".claude/skills",
            Self::Openclaw => "skills",
            Self::Cline => ".cline/skills",
            Self::Codebuddy => ".codebuddy/skills",
            Self::Codex => ".codex/skills",
            Self::CommandCode => ".commandcode/skills",
            Self::Continue => ".continue/skills",
            Self::Crush => ".crush/skills",
            Self::Cursor => ".cursor/skills",
            Self::Droid => ".factory/skills",
            Self::GeminiCli => ".gemini/skills",
            Self::GithubCopilot => ".github/skills",
            Self::Goose => ".goose/skills",
            Self::Junie => ".junie/skills",
            Self::IflowCli => ".iflow/skills",
            Self::Kilo => ".kilocode/skills",
            Self::KiroCli => ".kiro/skills",
            Self::Kode => ".kode/skills",
            Self::Mcpjam => ".mcpjam/skills",
            Self::MistralVibe => ".vibe/skills",
            Self::Mux => ".mux/skills",
            Self::Opencode => ".opencode/skills",
            Self::Openhands => ".openhands/skills",
            Self::Pi => ".pi/skills",
            Self::Qoder => ".qoder/skills",
            Self::QwenCode => ".qwen/skills",
            Self::Roo => ".roo/skills",
            Self::Trae | Self::TraeCn => ".trae/skills",
            Self::Windsurf => ".windsurf/skills",
            Self::Zencoder => ".zencoder/skills",
            Self::Neovate => ".neovate/skills",
            Self::Pochi => ".pochi/skills",
            Self::Adal => ".adal/skills",
        }
    }

    /// Global skills directory, or `None` when the agent only supports
    /// project-local skills.
    pub fn global_skills_dir(self, env: &AgentEnvironment) -> Option<PathBuf> {
        let home = env.home();
        let dir = match self {
            Self::Amp => env.config_home().join("agents/skills"),
            Self::Antigravity => home.join(".gemini/antigravity/skills"),
            Self::ClaudeCode => env.claude_home().join("skills"),
            Self::Openclaw => openclaw_global_dir(home),
            Self::Codex => env.codex_home().join("skills"),
            Self::Crush => home.join(".config/crush/skills"),
            Self::GithubCopilot => home.join(".copilot/skills"),
            Self::Goose => env.config_home().join("goose/skills"),
            Self::KimiCli => home.join(".config/agents/skills"),
            Self::Opencode => env.config_home().join("opencode/skills"),
            Self::Pi => home.join(".pi/agent/skills"),
            Self::Replit => return None,
            Self::TraeCn => home.join(".trae-cn/skills"),
            Self::Windsurf => home.join(".codeium/windsurf/skills"),
            other => home.join(other.project_skills_dir()),
        };
        Some(dir)
    }
}

fn openclaw_global_dir(home: &Path) -> PathBuf {
    for legacy in [".openclaw", ".clawdbot"] {
        if home.join(legacy).exists() {
            return home.join(legacy).join("skills");
        }
    }
    home.join(".moltbot/skills")
}

/// One registry row: where an agent keeps its skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDescriptor {
    pub id: AgentId,
    pub display_name: String,
    /// Skills directory relative to the working directory.
    pub project_skills_dir: PathBuf,
    /// Absolute global skills directory; `None` means "not supported".
    pub global_skills_dir: Option<PathBuf>,
}

impl AgentDescriptor {
    pub fn new(
        id: AgentId,
        display_name: impl Into<String>,
        project_skills_dir: impl Into<PathBuf>,
        global_skills_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            project_skills_dir: project_skills_dir.into(),
            global_skills_dir,
        }
    }
}

/// Immutable agent table, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    agents: Vec<AgentDescriptor>,
}

impl AgentRegistry {
    /// Build the full table of known agents for the given environment.
    pub fn from_environment(env: &AgentEnvironment) -> Self {
        let agents = AgentId::ALL
            .iter()
            .map(|&id| {
                AgentDescriptor::new(
                    id,
                    id.display_name(),
                    id.project_skills_dir(),
                    id.global_skills_dir(env),
                )
            })
            .collect();
        Self { agents }
    }

    /// Build a registry from explicit rows. Order is preserved.
    pub fn from_descriptors(agents: Vec<AgentDescriptor>) -> Self {
        Self { agents }
    }

    pub fn get(&self, id: AgentId) -> Option<&AgentDescriptor> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentDescriptor> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
