//! CLI entry point for skill-sweep.

pub mod errors;
pub mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::ResolveOptions;

/// Remove agent skills from this project or from your global agent config
#[derive(Parser, Debug)]
#[command(name = "skill-sweep", version, about = "Find and remove agent skills")]
pub struct Cli {
    /// Scan global agent directories instead of the current project
    #[arg(short, long)]
    pub global: bool,
}

impl Cli {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            global: self.global,
        }
    }
}

/// Install a stderr tracing subscriber; `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
