//! Tests for environment-driven agent directory resolution.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use skill_sweep::agents::{AgentId, AgentRegistry};
use skill_sweep::config::{resolve, AgentEnvironment, ResolveOptions};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 3] = ["XDG_CONFIG_HOME", "CODEX_HOME", "CLAUDE_CONFIG_DIR"];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn from_env_honours_directory_overrides() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    std::env::set_var("XDG_CONFIG_HOME", "/xdg");
    std::env::set_var("CODEX_HOME", "/codex");
    std::env::set_var("CLAUDE_CONFIG_DIR", "/claude");

    let env = AgentEnvironment::from_env();

    assert_eq!(env.config_home(), PathBuf::from("/xdg"));
    assert_eq!(env.codex_home(), PathBuf::from("/codex"));
    assert_eq!(env.claude_home(), PathBuf::from("/claude"));
    assert_eq!(
        AgentId::Opencode.global_skills_dir(&env),
        Some(PathBuf::from("/xdg/opencode/skills"))
    );
    assert_eq!(
        AgentId::Codex.global_skills_dir(&env),
        Some(PathBuf::from("/codex/skills"))
    );
}

#[test]
fn from_env_ignores_blank_overrides() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::set_var(key, "   ");
    }

    let env = AgentEnvironment::from_env();

    assert_eq!(env.config_home(), env.home().join(".config"));
    assert_eq!(env.codex_home(), env.home().join(".codex"));
    assert_eq!(env.claude_home(), env.home().join(".claude"));
}

#[test]
fn resolved_global_config_uses_environment_roots() {
    let env = AgentEnvironment::new(PathBuf::from("/home/u")).with_claude_home("/cfg/claude");
    let registry = AgentRegistry::from_environment(&env);

    let config = resolve(
        &registry,
        ResolveOptions { global: true },
        &PathBuf::from("/work/project"),
        env.home(),
    );

    let claude = config.agent(AgentId::ClaudeCode).unwrap();
    assert_eq!(claude.skills_dir, PathBuf::from("/cfg/claude/skills"));
    assert_eq!(claude.agent_dir, PathBuf::from("/cfg/claude"));
    assert!(config.is_protected(&PathBuf::from("/home/u")));
    assert!(config.is_protected(&PathBuf::from("/work")));
}
