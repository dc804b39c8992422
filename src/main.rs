//! soloinstall - Main entry point
//!
//! Loads a provisioning config and runs it against the mounted target, or
//! prints the plan in dry-run mode.

use anyhow::{Context, Result};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use soloinstall::cli::{Cli, Commands};
use soloinstall::types::ProfileType;
use soloinstall::{ChrootSession, DryRunSession, Profile, ProvisioningConfig, provision};

/// Initialize the logger; `RUST_LOG` overrides the default `info` level.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed: {:?}", cli);

    match cli.command {
        Commands::Profiles { category } => list_profiles(category),
        Commands::Validate { config } => validate_config(&config),
        Commands::Install {
            config,
            target,
            json,
        } => {
            if cli.dry_run || json {
                run_dry(&config, json)
            } else {
                run_install(&config, &target)
            }
        }
    }
}

fn list_profiles(category: Option<ProfileType>) -> Result<()> {
    for group in ProfileType::iter().filter(|c| category.is_none_or(|wanted| wanted == *c)) {
        let profiles: Vec<Profile> = Profile::builtin().filter(|p| p.category() == group).collect();
        if profiles.is_empty() {
            continue;
        }

        println!("{}:", group.heading());
        for profile in profiles {
            let greeter = profile
                .default_greeter_type()
                .map(|g| g.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:<10} {:<15} {}",
                profile.to_string(),
                greeter,
                profile.description()
            );
        }
        println!();
    }
    Ok(())
}

fn validate_config(path: &Path) -> Result<()> {
    info!("Validating configuration file: {:?}", path);
    let config = ProvisioningConfig::load_from_file(path)?;
    match config.validate() {
        Ok(()) => {
            info!("Configuration validation successful");
            println!("✓ Configuration file is valid: {:?}", path);
            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {}", e);
            eprintln!("✗ Configuration validation failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_dry(path: &Path, json: bool) -> Result<()> {
    let config = ProvisioningConfig::load_from_file(path)?;
    let mut session = DryRunSession::new();
    provision(&mut session, &config)?;

    if json {
        let plan = serde_json::to_string_pretty(session.actions())
            .context("Failed to serialize plan")?;
        println!("{}", plan);
    } else {
        for (step, action) in session.actions().iter().enumerate() {
            println!("{:>3}. {}", step + 1, action);
        }
    }
    Ok(())
}

fn run_install(path: &Path, target: &Path) -> Result<()> {
    let config = ProvisioningConfig::load_from_file(path)?;
    if !target.is_dir() {
        anyhow::bail!("Target root {:?} is not a directory", target);
    }

    let mut session = ChrootSession::new(target);
    info!("Provisioning {:?} from {:?}", session.target(), path);
    provision(&mut session, &config)
        .with_context(|| format!("Provisioning {:?} failed", target))?;

    println!("✓ Provisioning completed successfully");
    Ok(())
}
