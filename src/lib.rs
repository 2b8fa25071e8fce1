//! skill-sweep: find and remove coding-agent skills.
//!
//! Coding agents keep reusable skills as directories containing a `SKILL.md`
//! file, each agent under its own directory (`.claude/skills`,
//! `.cursor/skills`, `~/.codex/skills`, ...). This crate scans every known
//! location, groups what it finds by skill name and removes the skills an
//! operator selects, offering to clean up directories left empty.
//!
//! # Quick Start
//!
//! ```no_run
//! use skill_sweep::agents::AgentRegistry;
//! use skill_sweep::config::{resolve, AgentEnvironment, ResolveOptions};
//! use skill_sweep::skills::discover;
//!
//! # fn example() -> skill_sweep::error::Result<()> {
//! let env = AgentEnvironment::from_env();
//! let registry = AgentRegistry::from_environment(&env);
//! let cwd = std::env::current_dir()?;
//! let config = resolve(&registry, ResolveOptions::default(), &cwd, env.home());
//!
//! for (name, records) in discover(&config).iter() {
//!     println!("{name}: {} installations", records.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod config;
pub mod error;
pub mod prompt;
pub mod skills;
pub mod sweep;

#[cfg(feature = "cli")]
pub mod cli;
