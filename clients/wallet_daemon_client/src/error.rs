//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use digital_goods_storefront::error::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum WalletDaemonClientError {
    #[error("Failed to deserialize response for method {method}: {source}")]
    DeserializeResponse { source: serde_json::Error, method: String },
    #[error("Failed to serialize request for method {method}: {source}")]
    SerializeRequest { method: String, source: serde_json::Error },
    #[error("Failed to send request: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },
    #[error("Request failed: code: {code} message: {message}")]
    RequestFailedWithStatus { code: i64, message: String },
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}

impl From<WalletDaemonClientError> for GatewayError {
    fn from(err: WalletDaemonClientError) -> Self {
        match err {
            // Keep the daemon's message untouched so that revert reasons can be extracted from it
            WalletDaemonClientError::RequestFailedWithStatus { message, .. } => GatewayError::new(message),
            err => GatewayError::new(err.to_string()),
        }
    }
}
