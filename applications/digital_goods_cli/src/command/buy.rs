//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use crate::{
    cli::BuyArgs,
    command::{find_listing, report, CliStorefront},
    prompt::Prompt,
};

pub async fn handle(args: BuyArgs, storefront: &mut CliStorefront) -> anyhow::Result<bool> {
    let listing = find_listing(storefront, args.listing_id).await?;
    println!(
        "{} ({} left, {} ETH each)",
        listing.name,
        listing.remaining_supply,
        listing
            .buyer_unit_price()
            .map(|p| p.to_ether_string())
            .unwrap_or_else(|| "-".to_string())
    );
    let quantity = Prompt::new("Enter the quantity you would like to purchase:")
        .with_value(args.quantity)
        .ask()?;
    let outcome = storefront.purchase(&listing, &quantity).await;
    Ok(report(&outcome))
}
