//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::path::PathBuf;

use clap::Parser;
use digital_goods_storefront::Address;
use log::LevelFilter;
use url::Url;

use crate::{
    config::Config,
    constants::{DEFAULT_BASE_DIR, DEFAULT_CONFIG_FILE_NAME, WALLET_DAEMON_TOKEN_ENV},
};

#[derive(Debug, Clone, Parser)]
#[clap(about = "Browse, buy and list digital goods")]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonCli,
    #[clap(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }

    /// A relative `--config-path` is resolved against the base directory.
    pub fn get_config_path(&self) -> PathBuf {
        match self.common.config_path {
            Some(ref path) if path.is_absolute() => path.clone(),
            Some(ref path) => self.common.base_dir.join(path),
            None => self.common.base_dir.join(DEFAULT_CONFIG_FILE_NAME),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct CommonCli {
    #[clap(short = 'b', long, parse(from_os_str), default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,
    #[clap(short = 'c', long, parse(from_os_str))]
    pub config_path: Option<PathBuf>,
    /// Overrides the configured log level (off, error, warn, info, debug, trace)
    #[clap(long)]
    pub log_level: Option<LevelFilter>,
    #[clap(flatten)]
    pub overrides: Overrides,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init(InitArgs),
    /// Show the digital goods that are currently for sale
    List,
    /// Show the digital goods whose name contains a search term
    Search(SearchArgs),
    /// Buy a digital good with the connected wallet
    Buy(BuyArgs),
    /// Show the access link of a digital good you own
    Access(AccessArgs),
    /// List a new digital good for sale
    Create(CreateArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Overwrite the config file even if it exists
    #[clap(long)]
    pub force: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SearchArgs {
    /// Case-insensitive part of the name. Prompted for if omitted.
    pub term: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BuyArgs {
    pub listing_id: u64,
    /// Number of units to buy. Prompted for if omitted.
    #[clap(short = 'q', long)]
    pub quantity: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AccessArgs {
    pub listing_id: u64,
}

/// Any field that is not given is prompted for.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    #[clap(long)]
    pub name: Option<String>,
    #[clap(long)]
    pub description: Option<String>,
    #[clap(long)]
    pub category: Option<String>,
    /// Price per unit in ether, e.g. 0.05
    #[clap(long)]
    pub lister_price: Option<String>,
    #[clap(long)]
    pub total_supply: Option<String>,
    #[clap(long)]
    pub preview_link: Option<String>,
    #[clap(long)]
    pub access_link: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Overrides {
    #[clap(long)]
    pub indexer_url: Option<Url>,
    #[clap(long)]
    pub wallet_daemon_url: Option<Url>,
    #[clap(long, env = WALLET_DAEMON_TOKEN_ENV, hide_env_values = true)]
    pub wallet_daemon_token: Option<String>,
    #[clap(long)]
    pub contract_address: Option<Address>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref url) = self.indexer_url {
            log::info!("Overriding indexer url to {}", url);
            config.indexer_graphql_url = url.clone();
        }
        if let Some(ref url) = self.wallet_daemon_url {
            log::info!("Overriding wallet daemon url to {}", url);
            config.wallet_daemon_jrpc_url = url.clone();
        }
        if let Some(ref token) = self.wallet_daemon_token {
            config.wallet_daemon_token = Some(token.clone());
        }
        if let Some(address) = self.contract_address {
            log::info!("Overriding contract address to {}", address);
            config.contract_address = address;
        }
    }
}
