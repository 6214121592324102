//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

pub const DEFAULT_BASE_DIR: &str = "data/storefront/";
pub const DEFAULT_CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_INDEXER_GRAPHQL_URL: &str = "https://api.studio.thegraph.com/query/45217/digital-good/v0.0.1";
pub const DEFAULT_WALLET_DAEMON_JRPC_URL: &str = "http://127.0.0.1:9000/json_rpc";
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0xfB7fC51E7051930461A62b9969b644E5554B1039";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const WALLET_DAEMON_TOKEN_ENV: &str = "DIGITAL_GOODS_WALLET_DAEMON_TOKEN";
