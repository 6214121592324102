//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use log::*;

use crate::{
    error::StorefrontError,
    listing::{visible_listings, Listing, ListingForm, PurchaseRequest, SubmissionHandle},
    outcome::{AccessLink, Outcome, PendingTransaction, TransactionKind},
    traits::{ContractGateway, ListingIndexer, ListingView, WalletSession},
    validation::validate_quantity,
    Address,
};

const LOG_TARGET: &str = "digital_goods::storefront::workflow";

/// Runs the storefront workflows against injected collaborators.
///
/// Each workflow validates its input before touching the network, reports every failure as an [Outcome] and, for
/// contract writes, refreshes the rendered listings once the call settles.
pub struct Storefront<TIndexer, TWallet, TGateway, TView> {
    indexer: TIndexer,
    wallet: TWallet,
    gateway: TGateway,
    view: TView,
}

impl<TIndexer, TWallet, TGateway, TView> Storefront<TIndexer, TWallet, TGateway, TView>
where
    TIndexer: ListingIndexer,
    TWallet: WalletSession,
    TGateway: ContractGateway,
    TView: ListingView,
{
    pub fn new(indexer: TIndexer, wallet: TWallet, gateway: TGateway, view: TView) -> Self {
        Self {
            indexer,
            wallet,
            gateway,
            view,
        }
    }

    pub fn indexer(&self) -> &TIndexer {
        &self.indexer
    }

    pub fn wallet(&self) -> &TWallet {
        &self.wallet
    }

    pub fn gateway(&self) -> &TGateway {
        &self.gateway
    }

    pub fn view(&self) -> &TView {
        &self.view
    }

    /// Fetches all listings and renders them. Indexer failures render an empty table. Returns the rendered listings.
    pub async fn refresh(&mut self) -> Vec<Listing> {
        let listings = match self.indexer.fetch_listings().await {
            Ok(listings) => visible_listings(listings),
            Err(err) => {
                warn!(target: LOG_TARGET, "Error fetching listings: {}", err);
                vec![]
            },
        };
        self.view.render(&listings);
        listings
    }

    /// Fetches listings whose name contains `term` (case-insensitive) and renders them.
    pub async fn search(&mut self, term: &str) -> Vec<Listing> {
        let listings = match self.indexer.search_listings(term).await {
            Ok(listings) => visible_listings(listings),
            Err(err) => {
                warn!(target: LOG_TARGET, "Error searching listings for '{}': {}", term, err);
                vec![]
            },
        };
        self.view.render(&listings);
        listings
    }

    /// Buys `quantity_input` units of `listing` with the connected wallet.
    pub async fn purchase(&mut self, listing: &Listing, quantity_input: &str) -> Outcome<PendingTransaction> {
        let request = match self.prepare_purchase(listing, quantity_input).await {
            Ok(request) => request,
            Err(err) => {
                info!(target: LOG_TARGET, "Purchase of listing {} rejected: {}", listing.id, err);
                return Outcome::Failure(err);
            },
        };

        info!(
            target: LOG_TARGET,
            "Sending buyNFT for listing {} (quantity {}, value {} wei) from {}",
            request.listing_id,
            request.quantity,
            request.total_payment,
            request.buyer
        );
        let result = self.gateway.buy_nft(&request).await;
        let outcome = self.settle(TransactionKind::Purchase, result.map_err(Into::into));
        self.refresh().await;
        outcome
    }

    /// Fetches the access link of a listing the connected wallet owns. This is a read-only call.
    pub async fn get_access_link(&mut self, listing: &Listing) -> Outcome<AccessLink> {
        let from = match self.require_wallet().await {
            Ok(address) => address,
            Err(err) => return Outcome::Failure(err),
        };

        match self.gateway.get_access_link(&from, listing.id).await {
            Ok(Some(link)) if !link.is_empty() => Outcome::Success(AccessLink(link)),
            Ok(_) => Outcome::Failure(StorefrontError::AccessLinkNotFound),
            Err(err) => {
                error!(target: LOG_TARGET, "Error getting access link for listing {}: {}", listing.id, err);
                Outcome::Failure(err.into())
            },
        }
    }

    /// Validates the form and lists a new digital good from the connected wallet.
    pub async fn create_listing(&mut self, form: &ListingForm) -> Outcome<PendingTransaction> {
        let new_listing = match form.validate() {
            Ok(listing) => listing,
            Err(err) => {
                info!(target: LOG_TARGET, "Listing rejected: {}", err);
                return Outcome::Failure(err.into());
            },
        };
        let from = match self.require_wallet().await {
            Ok(address) => address,
            Err(err) => return Outcome::Failure(err),
        };

        info!(
            target: LOG_TARGET,
            "Sending listNFT '{}' (price {} wei, supply {}) from {}",
            new_listing.name,
            new_listing.price,
            new_listing.total_supply,
            from
        );
        let result = self.gateway.list_nft(&from, &new_listing).await;
        let outcome = self.settle(TransactionKind::Listing, result.map_err(Into::into));
        self.refresh().await;
        outcome
    }

    async fn prepare_purchase(
        &mut self,
        listing: &Listing,
        quantity_input: &str,
    ) -> Result<PurchaseRequest, StorefrontError> {
        let quantity = validate_quantity(listing, quantity_input)?;
        let buyer = self.require_wallet().await?;
        let request = PurchaseRequest::new(listing, quantity, buyer)?;
        Ok(request)
    }

    async fn require_wallet(&mut self) -> Result<Address, StorefrontError> {
        match self.wallet.current_address().await {
            Ok(Some(address)) => Ok(address),
            Ok(None) => Err(StorefrontError::WalletNotConnected),
            Err(err) => {
                warn!(target: LOG_TARGET, "Unable to determine the connected wallet: {}", err);
                Err(StorefrontError::WalletNotConnected)
            },
        }
    }

    fn settle(
        &self,
        kind: TransactionKind,
        result: Result<SubmissionHandle, StorefrontError>,
    ) -> Outcome<PendingTransaction> {
        match result {
            Ok(handle) => {
                info!(target: LOG_TARGET, "{:?} transaction sent: {}", kind, handle);
                Outcome::Success(PendingTransaction { kind, handle })
            },
            Err(err) => {
                error!(target: LOG_TARGET, "{:?} transaction failed: {}", kind, err);
                Outcome::Failure(err)
            },
        }
    }
}
