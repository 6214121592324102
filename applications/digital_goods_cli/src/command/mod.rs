//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

mod access;
mod browse;
mod buy;
mod create;

use std::fmt::Display;

use anyhow::{anyhow, bail};
use digital_goods_indexer_client::IndexerGraphQLClient;
use digital_goods_storefront::{
    listing::{visible_listings, Listing, ListingId},
    outcome::Outcome,
    Storefront,
};
use digital_goods_wallet_client::{gateway::WalletDaemonGateway, WalletDaemonClient};

use crate::{cli::Commands, config::Config, table::ListingTable};

pub type CliStorefront = Storefront<IndexerGraphQLClient, WalletDaemonClient, WalletDaemonGateway, ListingTable>;

pub fn connect(config: &Config) -> anyhow::Result<CliStorefront> {
    let indexer = IndexerGraphQLClient::connect(config.indexer_graphql_url.clone())?;
    let wallet = WalletDaemonClient::connect(
        config.wallet_daemon_jrpc_url.clone(),
        config.wallet_daemon_token.clone(),
    )?;
    let gateway = WalletDaemonGateway::new(wallet.clone(), config.contract_address);
    Ok(Storefront::new(indexer, wallet, gateway, ListingTable))
}

/// Runs a storefront command. Returns false if the workflow reported a failure.
pub async fn handle_command(command: Commands, storefront: &mut CliStorefront) -> anyhow::Result<bool> {
    match command {
        Commands::Init(_) => bail!("init runs before the storefront is connected"),
        Commands::List => {
            browse::handle_list(storefront).await;
            Ok(true)
        },
        Commands::Search(args) => {
            browse::handle_search(args, storefront).await?;
            Ok(true)
        },
        Commands::Buy(args) => buy::handle(args, storefront).await,
        Commands::Access(args) => access::handle(args, storefront).await,
        Commands::Create(args) => create::handle(args, storefront).await,
    }
}

/// Looks a listing up in the set the storefront currently shows.
async fn find_listing(storefront: &CliStorefront, listing_id: u64) -> anyhow::Result<Listing> {
    let listing_id = ListingId::new(listing_id);
    let listings = storefront.indexer().fetch_all_digital_goods().await?;
    visible_listings(listings)
        .into_iter()
        .find(|l| l.id == listing_id)
        .ok_or_else(|| anyhow!("Digital good {} is not listed or is sold out", listing_id))
}

fn report<T: Display>(outcome: &Outcome<T>) -> bool {
    println!("{}", outcome.message());
    outcome.is_success()
}
