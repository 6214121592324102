//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use async_trait::async_trait;
use digital_goods_storefront::{
    error::GatewayError,
    listing::{Listing, ListingId, NewListing, PurchaseRequest, SubmissionHandle},
    traits::{ContractGateway, ListingIndexer, ListingView, WalletSession},
    Address,
    Amount,
    Storefront,
};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FakeError(pub String);

pub type TestStorefront = Storefront<FakeIndexer, FakeWallet, FakeGateway, RecordingView>;

pub fn buyer() -> Address {
    Address::from_array([0xb0; 20])
}

pub fn listing(id: u64, unit_price: u64, remaining_supply: u64) -> Listing {
    Listing {
        id: ListingId::new(id),
        name: format!("Digital good {}", id),
        description: "A digital good".to_string(),
        category: "ebooks".to_string(),
        lister: Address::from_array([0x11; 20]),
        unit_price: Amount::from(unit_price),
        remaining_supply,
        preview_link: format!("https://example.com/{}/preview", id),
    }
}

pub fn storefront(listings: Vec<Listing>) -> TestStorefront {
    Storefront::new(
        FakeIndexer::new(listings),
        FakeWallet::connected(buyer()),
        FakeGateway::default(),
        RecordingView::default(),
    )
}

#[derive(Debug, Default)]
pub struct FakeIndexer {
    pub listings: Vec<Listing>,
    pub fail: bool,
    pub fetch_count: usize,
    pub search_terms: Vec<String>,
}

impl FakeIndexer {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl ListingIndexer for FakeIndexer {
    type Error = FakeError;

    async fn fetch_listings(&mut self) -> Result<Vec<Listing>, Self::Error> {
        self.fetch_count += 1;
        if self.fail {
            return Err(FakeError("indexer unavailable".to_string()));
        }
        Ok(self.listings.clone())
    }

    async fn search_listings(&mut self, term: &str) -> Result<Vec<Listing>, Self::Error> {
        self.search_terms.push(term.to_string());
        if self.fail {
            return Err(FakeError("indexer unavailable".to_string()));
        }
        let term = term.to_lowercase();
        Ok(self
            .listings
            .iter()
            .filter(|l| l.name.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct FakeWallet {
    pub address: Option<Address>,
    pub fail: bool,
    pub lookups: usize,
}

impl FakeWallet {
    pub fn connected(address: Address) -> Self {
        Self {
            address: Some(address),
            ..Default::default()
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletSession for FakeWallet {
    type Error = FakeError;

    async fn current_address(&mut self) -> Result<Option<Address>, Self::Error> {
        self.lookups += 1;
        if self.fail {
            return Err(FakeError("wallet daemon unreachable".to_string()));
        }
        Ok(self.address)
    }
}

#[derive(Debug, Default)]
pub struct FakeGateway {
    pub access_link: Option<String>,
    pub fail_with: Option<String>,
    pub purchases: Vec<PurchaseRequest>,
    pub new_listings: Vec<(Address, NewListing)>,
    pub access_requests: Vec<(Address, ListingId)>,
}

impl FakeGateway {
    pub fn call_count(&self) -> usize {
        self.purchases.len() + self.new_listings.len() + self.access_requests.len()
    }

    fn result<T>(&self, value: T) -> Result<T, GatewayError> {
        match self.fail_with {
            Some(ref message) => Err(GatewayError::new(message.clone())),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl ContractGateway for FakeGateway {
    async fn get_access_link(
        &mut self,
        from: &Address,
        listing_id: ListingId,
    ) -> Result<Option<String>, GatewayError> {
        self.access_requests.push((*from, listing_id));
        self.result(self.access_link.clone())
    }

    async fn buy_nft(&mut self, request: &PurchaseRequest) -> Result<SubmissionHandle, GatewayError> {
        self.purchases.push(request.clone());
        self.result(SubmissionHandle::new("0xbuy"))
    }

    async fn list_nft(&mut self, from: &Address, listing: &NewListing) -> Result<SubmissionHandle, GatewayError> {
        self.new_listings.push((*from, listing.clone()));
        self.result(SubmissionHandle::new("0xlist"))
    }
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub renders: Vec<Vec<Listing>>,
}

impl ListingView for RecordingView {
    fn render(&mut self, listings: &[Listing]) {
        self.renders.push(listings.to_vec());
    }
}
