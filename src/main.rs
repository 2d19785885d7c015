mod cli;

use avinfo::{config, output, probe};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "avinfo=debug,avinfo_probe=debug".to_string()
        } else {
            "avinfo=info,avinfo_probe=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Probe {
            files,
            json,
            pretty,
            view,
            log_level,
        } => {
            let mut config = config::load_config_or_default(cli.config.as_deref())?;
            if let Some(format) = Commands::format_override(json, pretty) {
                config.output.format = format;
            }
            if let Some(view) = view {
                config.output.view = view;
            }
            if let Some(level) = log_level {
                config.probe.log_level = level;
            }
            config::validate_config(&config)?;

            probe_files(&files, &config)
        }
        Commands::Versions { json } => {
            let versions = probe::LibraryVersions::current();
            println!("{}", output::render_versions(&versions, json)?);
            Ok(())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
    }
}

fn probe_files(files: &[PathBuf], config: &config::Config) -> Result<()> {
    let mut failed = 0usize;

    for (i, file) in files.iter().enumerate() {
        tracing::debug!("Probing {:?}", file);
        let report = probe::probe_file(file, config);
        if !report.is_ok() {
            tracing::warn!("{}: {}", file.display(), report.error.trim_end());
            failed += 1;
        }

        if i > 0 && !config.output.format.is_json() {
            println!();
        }
        println!("{}", output::render_report(&report, &config.output)?);
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files could not be probed", failed, files.len());
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_settings(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            print_settings(&config::Config::default());
        }
    }

    Ok(())
}

fn print_settings(config: &config::Config) {
    println!("  FFmpeg log level: {:?}", config.probe.log_level);
    println!("  Output format: {:?}", config.output.format);
    println!("  Report view: {:?}", config.output.view);
}
