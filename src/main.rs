// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Allow println! in main.rs for CLI user-facing output (show, validate, env-names)
#![allow(clippy::print_stdout)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use confsync::config::{env_name, ScalarKind};
use confsync::{save_config_file, AppConfig, ConfigFlags, ConfigLoader, EnvFields};

#[derive(Parser)]
#[command(name = "confsync")]
#[command(about = "Load a configuration file and apply environment variable overrides")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nrustc: ",
    env!("CONFSYNC_RUSTC_VERSION"),
))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file, or a directory to search
    /// (defaults to the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base name of the configuration file when searching a directory
    /// (defaults to "config")
    #[arg(short, long, global = true)]
    name: Option<String>,

    /// Load environment variables from this file before loading the config
    /// (defaults to a .env file next to the configuration)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(flatten)]
    flags: ConfigFlags,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration (default if no subcommand specified)
    Show,

    /// Validate a configuration file without falling back to defaults
    Validate,

    /// Write a configuration file with the built-in defaults
    Init {
        /// Output path; the extension selects the format
        #[arg(short, long, default_value = "config.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List configuration fields and the environment variables that override them
    EnvNames,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref().unwrap_or(Path::new(""));
    let name = cli.name.as_deref().unwrap_or_default();

    let env_file_loaded = load_env_file(cli.env_file.as_deref(), config_path)?;
    init_logging();
    if let Some(path) = env_file_loaded {
        info!("Loaded environment variables from {}", path.display());
    }

    match cli.command {
        Some(Commands::Show) | None => show_config(name, config_path, &cli.flags),
        Some(Commands::Validate) => validate_config(name, config_path),
        Some(Commands::Init { output, force }) => init_config(&output, force),
        Some(Commands::EnvNames) => {
            print_env_names();
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load an explicit env file, or a `.env` next to the configuration if present.
fn load_env_file(explicit: Option<&Path>, config_path: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        dotenvy::from_path(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
        return Ok(Some(path.to_path_buf()));
    }

    let config_dir = if config_path.is_dir() {
        Some(config_path)
    } else {
        config_path.parent()
    };
    let env_file = match config_dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(".env"),
        _ => PathBuf::from(".env"),
    };
    if !env_file.exists() {
        return Ok(None);
    }

    match dotenvy::from_path(&env_file) {
        Ok(()) => Ok(Some(env_file)),
        Err(e) => {
            eprintln!("Warning: Failed to load .env file: {e}");
            Ok(None)
        }
    }
}

/// Load the configuration, falling back to defaults on any failure, then apply flags.
fn show_config(name: &str, config_path: &Path, flags: &ConfigFlags) -> Result<()> {
    let loader = ConfigLoader::new();
    let mut config: AppConfig = match loader.load(name, config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Error loading config: {e}. Using defaults.");
            loader
                .load_defaults()
                .context("Failed to build default configuration")?
        }
    };

    flags.apply(&mut config);
    debug!("Resolved configuration: {config:?}");

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Validate a configuration file
fn validate_config(name: &str, config_path: &Path) -> Result<()> {
    match ConfigLoader::new().load::<AppConfig>(name, config_path) {
        Ok(_) => {
            println!("[OK] Configuration is valid");
            Ok(())
        }
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    }
}

fn init_config(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "Configuration file '{}' already exists. Use --force to overwrite.",
            output.display()
        );
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    save_config_file(&AppConfig::default(), output)?;
    info!("Default configuration written to {}", output.display());
    Ok(())
}

fn print_env_names() {
    for field in AppConfig::fields() {
        let kind = field.kind();
        let note = match kind {
            ScalarKind::String | ScalarKind::Integer | ScalarKind::Boolean => "",
            ScalarKind::Float | ScalarKind::Composite => " (not overridden)",
        };
        println!(
            "{:<12} {:<10} {}{note}",
            field.name,
            kind,
            env_name(field.name)
        );
    }
}
