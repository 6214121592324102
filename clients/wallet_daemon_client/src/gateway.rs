//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use async_trait::async_trait;
use digital_goods_storefront::{
    error::GatewayError,
    listing::{ListingId, NewListing, PurchaseRequest, SubmissionHandle},
    traits::ContractGateway,
    Address,
    Amount,
};
use log::*;
use serde_json::{json, Value};

use crate::{
    types::{ContractCallRequest, ContractSubmitRequest},
    WalletDaemonClient,
};

const LOG_TARGET: &str = "digital_goods::wallet_client::gateway";

pub const GET_ACCESS_LINK_FN: &str = "getAccessLink";
pub const BUY_NFT_FN: &str = "buyNFT";
pub const LIST_NFT_FN: &str = "listNFT";

/// Calls the digital goods contract through the wallet daemon, which signs writes with the caller's account.
#[derive(Debug, Clone)]
pub struct WalletDaemonGateway {
    client: WalletDaemonClient,
    contract_address: Address,
}

impl WalletDaemonGateway {
    pub fn new(client: WalletDaemonClient, contract_address: Address) -> Self {
        Self {
            client,
            contract_address,
        }
    }

    pub fn contract_address(&self) -> &Address {
        &self.contract_address
    }

    async fn submit(
        &mut self,
        function: &str,
        from: &Address,
        args: Vec<Value>,
        value: Option<Amount>,
    ) -> Result<SubmissionHandle, GatewayError> {
        let resp = self
            .client
            .submit_contract_call(ContractSubmitRequest {
                contract_address: self.contract_address,
                function: function.to_string(),
                args,
                from: *from,
                value,
            })
            .await?;
        debug!(target: LOG_TARGET, "{} submitted as {}", function, resp.transaction_hash);
        Ok(SubmissionHandle::new(resp.transaction_hash))
    }
}

#[async_trait]
impl ContractGateway for WalletDaemonGateway {
    async fn get_access_link(
        &mut self,
        from: &Address,
        listing_id: ListingId,
    ) -> Result<Option<String>, GatewayError> {
        let resp = self
            .client
            .call_contract(ContractCallRequest {
                contract_address: self.contract_address,
                function: GET_ACCESS_LINK_FN.to_string(),
                args: vec![json!(listing_id.to_string())],
                from: *from,
            })
            .await?;

        match resp.result {
            Value::Null => Ok(None),
            Value::String(link) => Ok(Some(link)),
            other => Err(GatewayError::new(format!(
                "Unexpected {} result: {}",
                GET_ACCESS_LINK_FN, other
            ))),
        }
    }

    async fn buy_nft(&mut self, request: &PurchaseRequest) -> Result<SubmissionHandle, GatewayError> {
        let args = vec![
            json!(request.listing_id.to_string()),
            json!(request.unit_price.to_string()),
            json!(request.quantity.to_string()),
        ];
        self.submit(BUY_NFT_FN, &request.buyer, args, Some(request.total_payment))
            .await
    }

    async fn list_nft(&mut self, from: &Address, listing: &NewListing) -> Result<SubmissionHandle, GatewayError> {
        let args = vec![
            json!(listing.name),
            json!(listing.description),
            json!(listing.category),
            json!(listing.price.to_string()),
            json!(listing.total_supply.to_string()),
            json!(listing.preview_link),
            json!(listing.access_link),
        ];
        self.submit(LIST_NFT_FN, from, args, None).await
    }
}
