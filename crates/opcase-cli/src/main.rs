use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use opcase_core::config::{self, CONFIG_FILE_NAME, OpcaseConfig};
use opcase_core::rewrite_file;

#[derive(Parser)]
#[command(
    name = "opcase",
    about = "Rewrite OpenAPI operationIds from snake_case to camelCase",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// OpenAPI JSON file to read [default: openapi.json]
    input: Option<PathBuf>,

    /// Where to write the rewritten spec [default: openapi_modified.json]
    output: Option<PathBuf>,

    /// Config file to load instead of `.opcase.yaml`. The default file is
    /// skipped when both INPUT and OUTPUT are given; an explicit `--config`
    /// is always loaded.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default `.opcase.yaml`
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { force }) => {
            let config_path = cli
                .config
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
            cmd_init(&config_path, force)
        }
        None => cmd_rewrite(cli.config.as_deref(), cli.input, cli.output),
    }
}

/// Load the config for a rewrite run. With both paths on the command line the
/// default config file is not consulted; only an explicit `--config` is read.
fn resolve_config(
    explicit: Option<&Path>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<OpcaseConfig> {
    let path = match explicit {
        Some(path) => path,
        None if input.is_some() && output.is_some() => return Ok(OpcaseConfig::default()),
        None => Path::new(CONFIG_FILE_NAME),
    };
    Ok(config::load_config(path)?.unwrap_or_default())
}

fn cmd_rewrite(
    config_path: Option<&Path>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = resolve_config(config_path, input.as_deref(), output.as_deref())?;
    let input = input.unwrap_or(cfg.input);
    let output = output.unwrap_or(cfg.output);
    log::debug!(
        "rewriting {} -> {} ({:?})",
        input.display(),
        output.display(),
        cfg.segment_case
    );

    let summary = rewrite_file(&input, &output, cfg.segment_case)
        .with_context(|| format!("failed to rewrite {}", input.display()))?;

    eprintln!(
        "Renamed {} of {} operationIds",
        summary.renamed, summary.operations
    );
    eprintln!("  wrote {}", output.display());
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
