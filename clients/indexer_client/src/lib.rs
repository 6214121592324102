//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

pub mod error;
pub mod queries;
pub mod types;

use async_trait::async_trait;
use digital_goods_storefront::{listing::Listing, traits::ListingIndexer};
use log::*;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    IntoUrl,
    Url,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

use crate::{
    error::IndexerClientError,
    queries::{FETCH_ALL_DIGITAL_GOODS, FETCH_FILTERED_DIGITAL_GOODS},
    types::{DigitalGoodsResponse, SearchVariables},
};

const LOG_TARGET: &str = "digital_goods::indexer_client";

#[derive(Debug, Clone)]
pub struct IndexerGraphQLClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl IndexerGraphQLClient {
    pub fn connect<T: IntoUrl>(endpoint: T) -> Result<Self, IndexerClientError> {
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
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Up to 20 listings with remaining supply, highest token id first.
    pub async fn fetch_all_digital_goods(&self) -> Result<Vec<Listing>, IndexerClientError> {
        let resp: DigitalGoodsResponse = self.send_request(FETCH_ALL_DIGITAL_GOODS, None::<&()>).await?;
        Ok(resp.digital_goods.into_iter().map(Into::into).collect())
    }

    /// Same as [Self::fetch_all_digital_goods], restricted to names containing `search_term` (case-insensitive).
    pub async fn search_digital_goods(&self, search_term: &str) -> Result<Vec<Listing>, IndexerClientError> {
        let variables = SearchVariables {
            search_term: search_term.to_string(),
        };
        let resp: DigitalGoodsResponse = self
            .send_request(FETCH_FILTERED_DIGITAL_GOODS, Some(&variables))
            .await?;
        Ok(resp.digital_goods.into_iter().map(Into::into).collect())
    }

    pub async fn send_request<V: Serialize, R: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<&V>,
    ) -> Result<R, IndexerClientError> {
        let variables = variables
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| IndexerClientError::SerializeRequest {
                query: query_name(query),
                source: e,
            })?;
        let body = json!({
            "query": query,
            "variables": variables
        });
        debug!(target: LOG_TARGET, "Sending {} to {}", query_name(query), self.endpoint);
        let resp = self
            .client
            .post(self.endpoint.clone())
            .body(body.to_string())
            .send()
            .await?;
        let val = resp.json::<Value>().await?;
        let data = graphql_data(val)?;
        serde_json::from_value::<R>(data).map_err(|e| IndexerClientError::DeserializeResponse {
            source: e,
            query: query_name(query),
        })
    }
}

#[async_trait]
impl ListingIndexer for IndexerGraphQLClient {
    type Error = IndexerClientError;

    async fn fetch_listings(&mut self) -> Result<Vec<Listing>, Self::Error> {
        self.fetch_all_digital_goods().await
    }

    async fn search_listings(&mut self, term: &str) -> Result<Vec<Listing>, Self::Error> {
        self.search_digital_goods(term).await
    }
}

fn graphql_data(val: Value) -> Result<Value, IndexerClientError> {
    if let Some(errors) = val.get("errors").and_then(|e| e.as_array()).filter(|e| !e.is_empty()) {
        let message = errors
            .iter()
            .map(|e| e.get("message").and_then(|m| m.as_str()).unwrap_or("Unknown error"))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(IndexerClientError::QueryFailed { message });
    }
    if let Some(err) = val.get("error") {
        let message = err
            .get("message")
            .and_then(|m| m.as_str())
            .or_else(|| err.as_str())
            .unwrap_or("Unknown error");
        return Err(IndexerClientError::QueryFailed {
            message: message.to_string(),
        });
    }

    match val.get("data") {
        Some(Value::Null) | None => Err(IndexerClientError::InvalidResponse {
            message: "Missing data field".to_string(),
        }),
        Some(data) => Ok(data.clone()),
    }
}

/// The operation name of a query, for error messages and logs.
fn query_name(query: &str) -> String {
    query
        .split_whitespace()
        .skip_while(|w| *w != "query")
        .nth(1)
        .map(|name| name.split('(').next().unwrap_or(name).to_string())
        .unwrap_or_else(|| "<anonymous>".to_string())
}
