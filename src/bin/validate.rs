use clap::Parser;
use gridlore::config::{Config, DanglingPolicy};
use gridlore::store::{loader, validate_records};
use anyhow::Result;

#[derive(Parser, Debug)]
#[command(name = "validate")]
#[command(about = "Validate the compiled-in Gridlore dataset (exit code 1 on defects)")]
struct Args {
    /// Treat dangling relation ids as errors
    #[arg(short, long)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.gridlore.log_level.as_str())
    ).init();
    log::info!("Configuration: {}", config.describe_source());

    let policy = if args.strict {
        DanglingPolicy::Deny
    } else {
        config.validation.dangling_references
    };
    log::info!("Validating dataset (dangling references: {:?})", policy);

    let agents = loader::builtin_agents()?;
    let guardians = loader::builtin_guardians()?;
    log::info!("Parsed {} agents and {} guardians", agents.len(), guardians.len());

    let mut report = validate_records(&agents, policy);
    report.merge(validate_records(&guardians, policy));

    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for error in &report.errors {
        println!("error: {}", error);
    }

    println!(
        "\n{} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );

    if !report.is_ok() {
        std::process::exit(1);
    }

    Ok(())
}
