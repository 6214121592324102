//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use async_trait::async_trait;

use crate::{
    error::GatewayError,
    listing::{Listing, ListingId, NewListing, PurchaseRequest, SubmissionHandle},
    Address,
};

/// Read access to the indexed listing data.
#[async_trait]
pub trait ListingIndexer: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Listings with remaining supply, newest first.
    async fn fetch_listings(&mut self) -> Result<Vec<Listing>, Self::Error>;
    /// Same as [ListingIndexer::fetch_listings], filtered by a case-insensitive match on the name.
    async fn search_listings(&mut self, term: &str) -> Result<Vec<Listing>, Self::Error>;
}

#[async_trait]
pub trait WalletSession: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The connected account, or `None` if no wallet is connected.
    async fn current_address(&mut self) -> Result<Option<Address>, Self::Error>;
}

/// Calls into the digital goods contract on behalf of an account.
#[async_trait]
pub trait ContractGateway: Send {
    async fn get_access_link(
        &mut self,
        from: &Address,
        listing_id: ListingId,
    ) -> Result<Option<String>, GatewayError>;
    async fn buy_nft(&mut self, request: &PurchaseRequest) -> Result<SubmissionHandle, GatewayError>;
    async fn list_nft(&mut self, from: &Address, listing: &NewListing) -> Result<SubmissionHandle, GatewayError>;
}

/// Displays the current set of listings.
pub trait ListingView: Send {
    fn render(&mut self, listings: &[Listing]);
}
