//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::{path::Path, str::FromStr};

use anyhow::Context;
use digital_goods_storefront::Address;
use log::LevelFilter;
use tokio::{
    fs::File,
    io,
    io::{AsyncReadExt, AsyncWriteExt},
};
use url::Url;

use crate::constants::{
    DEFAULT_CONTRACT_ADDRESS,
    DEFAULT_INDEXER_GRAPHQL_URL,
    DEFAULT_LOG_LEVEL,
    DEFAULT_WALLET_DAEMON_JRPC_URL,
};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// The GraphQL endpoint of the digital goods indexer
    pub indexer_graphql_url: Url,

    /// The JSON-RPC endpoint of the wallet daemon that signs contract calls
    pub wallet_daemon_jrpc_url: Url,

    /// Bearer token sent to the wallet daemon, if it requires one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_daemon_token: Option<String>,

    /// The address of the digital goods contract
    pub contract_address: Address,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Config {
    pub async fn load_from_file<P: AsRef<Path>>(file: P) -> anyhow::Result<Self> {
        let mut file = File::open(file).await?;
        Self::load_from_reader(&mut file).await
    }

    pub async fn load_from_reader<R: io::AsyncRead + Unpin>(reader: &mut R) -> anyhow::Result<Self> {
        let mut s = String::new();
        reader.read_to_string(&mut s).await?;
        let config = toml::from_str(&s)?;
        Ok(config)
    }

    pub(crate) async fn write<W: io::AsyncWrite + Unpin>(&self, mut writer: W) -> anyhow::Result<()> {
        let toml = toml::to_string_pretty(self)?;
        writer.write_all(toml.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }

    pub fn log_level(&self) -> anyhow::Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level).with_context(|| format!("Invalid log_level '{}'", self.log_level))
    }
}

pub fn get_base_config() -> anyhow::Result<Config> {
    Ok(Config {
        indexer_graphql_url: DEFAULT_INDEXER_GRAPHQL_URL.parse()?,
        wallet_daemon_jrpc_url: DEFAULT_WALLET_DAEMON_JRPC_URL.parse()?,
        wallet_daemon_token: None,
        contract_address: DEFAULT_CONTRACT_ADDRESS.parse()?,
        log_level: default_log_level(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_writes_and_loads_the_base_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = get_base_config().unwrap();
        config.wallet_daemon_token = Some("secret".to_string());

        let file = File::create(&path).await.unwrap();
        config.write(file).await.unwrap();

        let loaded = Config::load_from_file(&path).await.unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.contract_address.to_string(),
            "0xfb7fc51e7051930461a62b9969b644e5554b1039"
        );
    }

    #[tokio::test]
    async fn optional_fields_have_defaults() {
        let toml = r#"
            indexer_graphql_url = "http://localhost:8000/graphql"
            wallet_daemon_jrpc_url = "http://localhost:9000/json_rpc"
            contract_address = "0x0101010101010101010101010101010101010101"
        "#;
        let config = Config::load_from_reader(&mut toml.as_bytes()).await.unwrap();
        assert_eq!(config.wallet_daemon_token, None);
        assert_eq!(config.log_level().unwrap(), LevelFilter::Info);
    }

    #[tokio::test]
    async fn it_rejects_a_bad_contract_address() {
        let toml = r#"
            indexer_graphql_url = "http://localhost:8000/graphql"
            wallet_daemon_jrpc_url = "http://localhost:9000/json_rpc"
            contract_address = "0x1234"
        "#;
        assert!(Config::load_from_reader(&mut toml.as_bytes()).await.is_err());
    }

    #[test]
    fn it_parses_the_log_level() {
        let mut config = get_base_config().unwrap();
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level().unwrap(), LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert!(config.log_level().is_err());
    }
}
