//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

#[derive(Debug, thiserror::Error)]
pub enum IndexerClientError {
    #[error("Failed to deserialize response for query {query}: {source}")]
    DeserializeResponse { source: serde_json::Error, query: String },
    #[error("Failed to serialize request for query {query}: {source}")]
    SerializeRequest { query: String, source: serde_json::Error },
    #[error("Failed to send request: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },
    #[error("GraphQL query failed: {message}")]
    QueryFailed { message: String },
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}
