//! skill-sweep binary entry point.

use std::sync::Arc;

use clap::Parser;
use skill_sweep::agents::AgentRegistry;
use skill_sweep::cli::{self, errors, output, Cli};
use skill_sweep::config::{resolve, AgentEnvironment};
use skill_sweep::error::Result;
use skill_sweep::prompt::TerminalPrompt;
use skill_sweep::sweep::{SkillSweeper, SweepOutcome};

fn main() {
    let args = Cli::parse();
    cli::init_tracing();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", errors::format_error_help(&e));
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> Result<()> {
    let env = AgentEnvironment::from_env();
    let registry = AgentRegistry::from_environment(&env);
    let cwd = std::env::current_dir()?;
    let config = resolve(&registry, args.resolve_options(), &cwd, env.home());

    println!("{}", output::scan_banner(&config));

    let sweeper = SkillSweeper::new(config).with_event_sink(Arc::new(output::print_event));
    let mut prompt = TerminalPrompt::new();

    match sweeper.run(&mut prompt)? {
        SweepOutcome::NoSkills => println!("No skills found."),
        SweepOutcome::Cancelled => println!("Cancelled."),
        SweepOutcome::Completed(report) => output::print_summary(&report),
    }

    Ok(())
}
