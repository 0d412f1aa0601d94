use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use pet_oracle::cli::handlers::{self, CommandContext, GenerateParams};
use pet_oracle::cli::{Cli, Commands};
use pet_oracle::config::OracleConfig;
use pet_oracle::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let cwd = std::env::current_dir()?;

    match command {
        Commands::Generate {
            pet_type,
            personality,
            quirks,
            save,
            registry,
            json,
        } => {
            let ctx = load_context(&cwd, registry, cli.seed)?;
            handlers::handle_generate(
                &ctx,
                GenerateParams {
                    pet_type,
                    personality,
                    quirks,
                    save,
                    json,
                },
            )
        }
        Commands::List { registry, json } => {
            let ctx = load_context(&cwd, registry, cli.seed)?;
            handlers::handle_list(&ctx, json)
        }
    }
}

fn load_context(
    cwd: &Path,
    registry: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<CommandContext> {
    let config = OracleConfig::load(cwd)
        .context("Failed to load pet-oracle configuration")?
        .with_overrides(registry, seed);
    tracing::debug!(registry = %config.registry.display(), seed = ?config.seed, "Resolved config");
    Ok(CommandContext::new(config))
}
