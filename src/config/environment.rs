use std::path::{Path, PathBuf};

/// Home and configuration roots used to locate global skill directories.
///
/// Read once at startup; nothing else in the crate touches the process
/// environment afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentEnvironment {
    home: PathBuf,
    config_home: PathBuf,
    codex_home: PathBuf,
    claude_home: PathBuf,
}

impl AgentEnvironment {
    /// Environment rooted at `home` with every override unset.
    pub fn new(home: PathBuf) -> Self {
        Self {
            config_home: home.join(".config"),
            codex_home: home.join(".codex"),
            claude_home: home.join(".claude"),
            home,
        }
    }

    /// Resolve from the process environment (loading `.env` first).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(user_home_dir(), |key| std::env::var(key).ok())
    }

    /// Resolve using an arbitrary variable lookup.
    ///
    /// `XDG_CONFIG_HOME`, `CODEX_HOME` and `CLAUDE_CONFIG_DIR` are honoured
    /// when set to a non-blank value.
    pub fn from_lookup<F>(home: PathBuf, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut env = Self::new(home);
        if let Some(dir) = non_blank("XDG_CONFIG_HOME") {
            env.config_home = PathBuf::from(dir);
        }
        if let Some(dir) = non_blank("CODEX_HOME") {
            env.codex_home = PathBuf::from(dir);
        }
        if let Some(dir) = non_blank("CLAUDE_CONFIG_DIR") {
            env.claude_home = PathBuf::from(dir);
        }
        env
    }

    pub fn with_config_home(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_home = dir.into();
        self
    }

    pub fn with_codex_home(mut self, dir: impl Into<PathBuf>) -> Self {
        self.codex_home = dir.into();
        self
    }

    pub fn with_claude_home(mut self, dir: impl Into<PathBuf>) -> Self {
        self.claude_home = dir.into();
        self
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    pub fn codex_home(&self) -> &Path {
        &self.codex_home
    }

    pub fn claude_home(&self) -> &Path {
        &self.claude_home
    }
}

fn user_home_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
