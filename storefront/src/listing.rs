//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, Address, Amount};

/// The maximum number of listings the storefront shows at once.
pub const LISTING_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(u64);

impl ListingId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A digital good as reported by the indexer. Only the contract changes `remaining_supply`; we never mutate a listing
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub lister: Address,
    pub unit_price: Amount,
    pub remaining_supply: u64,
    pub preview_link: String,
}

impl Listing {
    /// The price per unit a buyer pays, including the markup. `None` if the price overflows.
    pub fn buyer_unit_price(&self) -> Option<Amount> {
        self.unit_price.checked_with_markup()
    }
}

/// Brings a result set in line with what the storefront shows: listings with remaining supply only, newest (highest
/// id) first, capped at [LISTING_PAGE_SIZE].
pub fn visible_listings(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.retain(|l| l.remaining_supply > 0);
    listings.sort_by(|a, b| b.id.cmp(&a.id));
    listings.truncate(LISTING_PAGE_SIZE);
    listings
}

/// Raw input for a new listing, exactly as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub lister_price: String,
    pub total_supply: String,
    pub preview_link: String,
    pub access_link: String,
}

/// A validated listing ready to be sent to the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub name: String,
    pub description: String,
    pub category: String,
    /// Price per unit in wei, without markup
    pub price: Amount,
    pub total_supply: u64,
    pub preview_link: String,
    pub access_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub listing_id: ListingId,
    pub unit_price: Amount,
    pub quantity: u64,
    pub buyer: Address,
    /// Value attached to the call: `unit_price * quantity` plus markup
    pub total_payment: Amount,
}

impl PurchaseRequest {
    pub fn new(listing: &Listing, quantity: u64, buyer: Address) -> Result<Self, ValidationError> {
        let total_payment = listing
            .unit_price
            .checked_mul(quantity)
            .and_then(|total| total.checked_with_markup())
            .ok_or(ValidationError::AmountOverflow)?;

        Ok(Self {
            listing_id: listing.id,
            unit_price: listing.unit_price,
            quantity,
            buyer,
            total_payment,
        })
    }
}

/// Identifies a submitted (not necessarily confirmed) transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionHandle(String);

impl SubmissionHandle {
    pub fn new<T: Into<String>>(transaction_hash: T) -> Self {
        Self(transaction_hash.into())
    }

    pub fn transaction_hash(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
