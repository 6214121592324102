//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN_ERROR_REASON: &str = "Unknown error";
pub const CONNECT_WALLET_MESSAGE: &str = "Please connect your wallet before continuing.";
pub const ACCESS_LINK_NOT_FOUND_MESSAGE: &str = "No access link found for this NFT.";

/// Rejected user input. These are always raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Quantity must be a positive integer.")]
    InvalidQuantity,
    #[error("Not enough supply available.")]
    InsufficientSupply { available: u64 },
    #[error("Total supply must be a positive integer.")]
    InvalidTotalSupply,
    #[error("Total supply is too large.")]
    TotalSupplyTooLarge,
    #[error("Lister price must be a positive value.")]
    InvalidListerPrice,
    #[error("Lister price has too many decimal places.")]
    ListerPriceTooPrecise,
    #[error("Payment amount is too large.")]
    AmountOverflow,
}

/// A failed contract call. The message is whatever the wallet daemon (or the transport) reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    message: String,
}

impl GatewayError {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the revert reason from messages of the form `... reason="<reason>" ...`.
    ///
    /// This depends on the upstream error format. If that format changes, the reason silently falls back to
    /// [UNKNOWN_ERROR_REASON].
    pub fn reason(&self) -> Option<&str> {
        static REASON: Lazy<Regex> = Lazy::new(|| Regex::new(r#"reason="(.+?)""#).expect("valid regex"));
        REASON
            .captures(&self.message)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorefrontError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Wallet is not connected")]
    WalletNotConnected,
    #[error("Contract call failed: {0}")]
    ContractCall(#[from] GatewayError),
    #[error("No access link returned")]
    AccessLinkNotFound,
}

impl StorefrontError {
    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::WalletNotConnected => CONNECT_WALLET_MESSAGE.to_string(),
            Self::ContractCall(err) => format!("Error: {}", err.reason().unwrap_or(UNKNOWN_ERROR_REASON)),
            Self::AccessLinkNotFound => ACCESS_LINK_NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_extracts_the_first_reason() {
        let err = GatewayError::new(
            r#"execution reverted (reason="insufficient funds", method="estimateGas", reason="other")"#,
        );
        assert_eq!(err.reason(), Some("insufficient funds"));
        assert_eq!(
            StorefrontError::from(err).user_message(),
            "Error: insufficient funds"
        );
    }

    #[test]
    fn it_falls_back_to_unknown_error() {
        let err = GatewayError::new("connection refused");
        assert_eq!(err.reason(), None);
        assert_eq!(StorefrontError::from(err).user_message(), "Error: Unknown error");

        let err = GatewayError::new(r#"reason="" code=1"#);
        assert_eq!(StorefrontError::from(err).user_message(), "Error: Unknown error");
    }

    #[test]
    fn validation_messages_are_shown_verbatim() {
        let err = StorefrontError::from(ValidationError::InsufficientSupply { available: 2 });
        assert_eq!(err.user_message(), "Not enough supply available.");
        assert_eq!(
            StorefrontError::from(ValidationError::InvalidQuantity).user_message(),
            "Quantity must be a positive integer."
        );
    }
}
