//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::path::Path;

use anyhow::{anyhow, Context};
use log::LevelFilter;
use tokio::fs;

use crate::{
    cli::{Cli, Commands, InitArgs},
    config::{get_base_config, Config},
    logger::init_logger,
};

mod cli;
mod command;
mod config;
mod constants;
mod logger;
mod prompt;
mod table;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::init();
    let config_path = cli.get_config_path();

    if let Commands::Init(ref args) = cli.command {
        init_logger(cli.common.log_level.unwrap_or(LevelFilter::Info))?;
        return init(&cli, args, &config_path).await;
    }

    let mut config = Config::load_from_file(&config_path).await.with_context(|| {
        anyhow!(
            "Failed to load config from {}. Run `init` to create one.",
            config_path.display()
        )
    })?;
    let level = match cli.common.log_level {
        Some(level) => level,
        None => config.log_level()?,
    };
    init_logger(level)?;
    cli.common.overrides.apply(&mut config);

    let mut storefront = command::connect(&config)?;
    let succeeded = command::handle_command(cli.command, &mut storefront).await?;
    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}

async fn init(cli: &Cli, args: &InitArgs, config_path: &Path) -> anyhow::Result<()> {
    if config_path.exists() {
        if args.force {
            log::warn!("Overwriting existing config file at {}", config_path.display());
        } else {
            log::info!("Config file exists at {}", config_path.display());
            return Ok(());
        }
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let mut config = get_base_config()?;
    cli.common.overrides.apply(&mut config);
    let file = fs::File::create(config_path)
        .await
        .with_context(|| anyhow!("Failed to open config path {}", config_path.display()))?;
    config.write(file).await.context("Writing config failed")?;
    let config_path = config_path
        .canonicalize()
        .context("Failed to canonicalize config path")?;
    log::info!("Config file created at {}", config_path.display());
    Ok(())
}
