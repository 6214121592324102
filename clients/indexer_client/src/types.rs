//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use digital_goods_storefront::{
    listing::{Listing, ListingId},
    Address,
    Amount,
};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalGoodsResponse {
    pub digital_goods: Vec<DigitalGood>,
}

/// A listing as the subgraph returns it. BigInt fields arrive as decimal strings.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalGood {
    #[serde_as(as = "DisplayFromStr")]
    pub token_id: u64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub lister: Address,
    pub lister_price: Amount,
    #[serde_as(as = "DisplayFromStr")]
    pub remaining_supply: u64,
    pub preview_link: String,
}

impl From<DigitalGood> for Listing {
    fn from(good: DigitalGood) -> Self {
        Listing {
            id: ListingId::new(good.token_id),
            name: good.name,
            description: good.description,
            category: good.category,
            lister: good.lister,
            unit_price: good.lister_price,
            remaining_supply: good.remaining_supply,
            preview_link: good.preview_link,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariables {
    pub search_term: String,
}
