//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::fmt;

use crate::{error::StorefrontError, listing::SubmissionHandle};

/// The reported result of a workflow. Workflows never return errors directly; every failure ends up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(StorefrontError),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn failure(&self) -> Option<&StorefrontError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<T, StorefrontError> {
        match self {
            Self::Success(v) => Ok(v),
            Self::Failure(err) => Err(err),
        }
    }
}

impl<T: fmt::Display> Outcome<T> {
    /// The message shown to the user.
    pub fn message(&self) -> String {
        match self {
            Self::Success(v) => v.to_string(),
            Self::Failure(err) => err.user_message(),
        }
    }
}

impl<T> From<Result<T, StorefrontError>> for Outcome<T> {
    fn from(result: Result<T, StorefrontError>) -> Self {
        match result {
            Ok(v) => Self::Success(v),
            Err(err) => Self::Failure(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Purchase,
    Listing,
}

/// A contract write that was submitted but may not be confirmed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    pub kind: TransactionKind,
    pub handle: SubmissionHandle,
}

impl fmt::Display for PendingTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TransactionKind::Purchase => write!(
                f,
                "Buying Digital Good...Please check back after the transaction has been confirmed on the blockchain \
                 to access your Digital Good"
            ),
            TransactionKind::Listing => write!(
                f,
                "Listing Digital Good...Please check back after the transaction has been confirmed on the blockchain \
                 to view your Digital Good"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLink(pub String);

impl fmt::Display for AccessLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Access link: {}", self.0)
    }
}
