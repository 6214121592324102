//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use crate::{cli::SearchArgs, command::CliStorefront, prompt::Prompt};

pub async fn handle_list(storefront: &mut CliStorefront) {
    storefront.refresh().await;
}

pub async fn handle_search(args: SearchArgs, storefront: &mut CliStorefront) -> anyhow::Result<()> {
    let term = Prompt::new("Search digital goods by name:").with_value(args.term).ask()?;
    storefront.search(&term).await;
    Ok(())
}
