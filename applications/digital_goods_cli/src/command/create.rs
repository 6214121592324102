//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use digital_goods_storefront::listing::ListingForm;

use crate::{
    cli::CreateArgs,
    command::{report, CliStorefront},
    prompt::{Prompt, PromptError},
};

pub async fn handle(args: CreateArgs, storefront: &mut CliStorefront) -> anyhow::Result<bool> {
    let form = prompt_form(args)?;
    let outcome = storefront.create_listing(&form).await;
    Ok(report(&outcome))
}

/// Price and supply are passed through as typed. The workflow validates them.
fn prompt_form(args: CreateArgs) -> Result<ListingForm, PromptError> {
    Ok(ListingForm {
        name: Prompt::new("Name:").with_value(args.name).ask()?,
        description: Prompt::new("Description:")
            .with_value(args.description)
            .with_default("")
            .ask()?,
        category: Prompt::new("Category:").with_value(args.category).with_default("").ask()?,
        lister_price: Prompt::new("Price per unit (ETH):").with_value(args.lister_price).ask()?,
        total_supply: Prompt::new("Total supply:").with_value(args.total_supply).ask()?,
        preview_link: Prompt::new("Preview link:")
            .with_value(args.preview_link)
            .with_default("")
            .ask()?,
        access_link: Prompt::new("Access link:").with_value(args.access_link).ask()?,
    })
}
