//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

pub mod error;
pub mod gateway;
pub mod types;

use std::borrow::Borrow;

use async_trait::async_trait;
use digital_goods_storefront::{traits::WalletSession, Address};
use log::*;
use reqwest::{
    header::{self, HeaderMap, HeaderValue, AUTHORIZATION},
    IntoUrl,
    Url,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

use crate::{
    error::WalletDaemonClientError,
    types::{
        AccountsGetActiveRequest,
        AccountsGetActiveResponse,
        ContractCallRequest,
        ContractCallResponse,
        ContractSubmitRequest,
        ContractSubmitResponse,
    },
};

const LOG_TARGET: &str = "digital_goods::wallet_client";

#[derive(Debug, Clone)]
pub struct WalletDaemonClient {
    client: reqwest::Client,
    endpoint: Url,
    request_id: i64,
    token: Option<String>,
}

impl WalletDaemonClient {
    pub fn connect<T: IntoUrl>(endpoint: T, token: Option<String>) -> Result<Self, WalletDaemonClientError> {
        let client = reqwest::Client::builder()
            .default_headers({
                let mut headers = HeaderMap::with_capacity(1);
                headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
                headers
            })
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into_url()?,
            request_id: 0,
            token,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn get_active_account(&mut self) -> Result<AccountsGetActiveResponse, WalletDaemonClientError> {
        self.send_request("accounts.get_active", &AccountsGetActiveRequest {})
            .await
    }

    pub async fn call_contract<T: Borrow<ContractCallRequest>>(
        &mut self,
        request: T,
    ) -> Result<ContractCallResponse, WalletDaemonClientError> {
        self.send_request("contracts.call", request.borrow()).await
    }

    pub async fn submit_contract_call<T: Borrow<ContractSubmitRequest>>(
        &mut self,
        request: T,
    ) -> Result<ContractSubmitResponse, WalletDaemonClientError> {
        self.send_request("contracts.submit", request.borrow()).await
    }

    fn next_request_id(&mut self) -> i64 {
        self.request_id += 1;
        self.request_id
    }

    async fn jrpc_call(&mut self, method: &str, params: &Value) -> Result<Value, WalletDaemonClientError> {
        let request_json = json!(
            {
                "jsonrpc": "2.0",
                "id": self.next_request_id(),
                "method": method,
                "params": params,
            }
        );
        debug!(target: LOG_TARGET, "Calling {} on {}", method, self.endpoint);
        let mut builder = self.client.post(self.endpoint.clone());
        if let Some(token) = &self.token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        let resp = builder.body(request_json.to_string()).send().await?;
        let val = resp.json().await?;
        jsonrpc_result(val)
    }

    async fn send_request<T: Serialize, R: DeserializeOwned>(
        &mut self,
        method: &str,
        params: &T,
    ) -> Result<R, WalletDaemonClientError> {
        let params = serde_json::to_value(params).map_err(|e| WalletDaemonClientError::SerializeRequest {
            source: e,
            method: method.to_string(),
        })?;
        let resp = self.jrpc_call(method, &params).await?;
        serde_json::from_value(resp).map_err(|e| WalletDaemonClientError::DeserializeResponse {
            source: e,
            method: method.to_string(),
        })
    }
}

#[async_trait]
impl WalletSession for WalletDaemonClient {
    type Error = WalletDaemonClientError;

    async fn current_address(&mut self) -> Result<Option<Address>, Self::Error> {
        let resp = self.get_active_account().await?;
        Ok(resp.address)
    }
}

fn jsonrpc_result(val: Value) -> Result<Value, WalletDaemonClientError> {
    if let Some(err) = val.get("error") {
        let code = err.get("code").and_then(|c| c.as_i64()).unwrap_or(-1);
        let message = err.get("message").and_then(|m| m.as_str()).unwrap_or("Unknown error");
        return Err(WalletDaemonClientError::RequestFailedWithStatus {
            code,
            message: message.to_string(),
        });
    }

    let result = val
        .get("result")
        .ok_or_else(|| WalletDaemonClientError::InvalidResponse {
            message: "Missing result field".to_string(),
        })?;
    Ok(result.clone())
}
