use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::ProfileType;

/// soloinstall - Profile and application provisioning for Arch Linux
#[derive(Parser, Debug)]
#[command(name = "soloinstall")]
#[command(about = "Install a desktop profile and optional applications into a new system")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: print the actions that would run without touching the
    /// target system.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in profiles
    Profiles {
        /// Only show profiles of this category (e.g. desktop-env, server)
        #[arg(short, long)]
        category: Option<ProfileType>,
    },
    /// Validate a provisioning configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
    /// Provision a mounted target system
    Install {
        /// Path to the provisioning configuration file
        #[arg(short, long)]
        config: PathBuf,

        /// Root of the mounted target system
        #[arg(short, long, default_value = "/mnt")]
        target: PathBuf,

        /// Print the plan as JSON (implies --dry-run)
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
