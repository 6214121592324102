//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use crate::{
    cli::AccessArgs,
    command::{find_listing, report, CliStorefront},
};

pub async fn handle(args: AccessArgs, storefront: &mut CliStorefront) -> anyhow::Result<bool> {
    let listing = find_listing(storefront, args.listing_id).await?;
    let outcome = storefront.get_access_link(&listing).await;
    Ok(report(&outcome))
}
