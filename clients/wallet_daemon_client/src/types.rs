//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use digital_goods_storefront::{Address, Amount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsGetActiveRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsGetActiveResponse {
    pub address: Option<Address>,
}

/// A read-only contract call, evaluated by the daemon without submitting a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractCallRequest {
    pub contract_address: Address,
    pub function: String,
    pub args: Vec<serde_json::Value>,
    pub from: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractCallResponse {
    pub result: serde_json::Value,
}

/// A state-changing contract call. The daemon signs it with the `from` account and submits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractSubmitRequest {
    pub contract_address: Address,
    pub function: String,
    pub args: Vec<serde_json::Value>,
    pub from: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Amount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractSubmitResponse {
    pub transaction_hash: String,
}
