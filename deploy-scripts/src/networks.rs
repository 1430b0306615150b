//! The static table of networks the contracts can be deployed to, along with
//! the block explorer metadata used to verify them

use std::{
    env,
    fmt::{self, Display},
};

use alloy::primitives::Address;
use clap::ValueEnum;
use serde::Serialize;

use crate::constants::{
    BASE_SEPOLIA_CHAIN_ID, BASE_SEPOLIA_EXPLORER_API_KEY, BASE_SEPOLIA_EXPLORER_API_URL,
    BASE_SEPOLIA_EXPLORER_BROWSER_URL, BASE_SEPOLIA_RPC_URL, EXPLORER_ADDRESS_PATH_SEGMENT,
    EXPLORER_API_KEY_ENV_SUFFIX, FUJI_CHAIN_ID, FUJI_EXPLORER_API_KEY, FUJI_EXPLORER_API_URL,
    FUJI_EXPLORER_BROWSER_URL, FUJI_RPC_URL, OP_SEPOLIA_CHAIN_ID, OP_SEPOLIA_EXPLORER_API_KEY,
    OP_SEPOLIA_EXPLORER_API_URL, OP_SEPOLIA_EXPLORER_BROWSER_URL, OP_SEPOLIA_RPC_URL,
    PLACEHOLDER_API_KEY, PRIVATE_KEY_ENV_VAR,
};

/// The networks the contracts can be deployed to
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    /// Optimism Sepolia
    #[value(alias = "opSepolia")]
    OpSepolia,
    /// Base Sepolia
    #[value(alias = "baseSepolia")]
    BaseSepolia,
    /// Avalanche Fuji C-chain
    Fuji,
}

impl Network {
    /// Every supported network
    pub const ALL: [Network; 3] = [Network::OpSepolia, Network::BaseSepolia, Network::Fuji];

    /// The configuration name of the network
    pub fn name(&self) -> &'static str {
        match self {
            Network::OpSepolia => "opSepolia",
            Network::BaseSepolia => "baseSepolia",
            Network::Fuji => "fuji",
        }
    }

    /// The well-known chain ID of the network
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::OpSepolia => OP_SEPOLIA_CHAIN_ID,
            Network::BaseSepolia => BASE_SEPOLIA_CHAIN_ID,
            Network::Fuji => FUJI_CHAIN_ID,
        }
    }

    /// The environment variable overriding this network's explorer API key
    pub fn explorer_api_key_env_var(&self) -> String {
        let prefix = match self {
            Network::OpSepolia => "OP_SEPOLIA",
            Network::BaseSepolia => "BASE_SEPOLIA",
            Network::Fuji => "FUJI",
        };
        format!("{prefix}{EXPLORER_API_KEY_ENV_SUFFIX}")
    }

    /// Build the profile of this network, reading overrides from the process
    /// environment
    pub fn profile(&self) -> NetworkProfile {
        self.profile_with_env(|key| env::var(key).ok())
    }

    /// Build the profile of this network, reading overrides through `lookup`
    pub fn profile_with_env(&self, lookup: impl Fn(&str) -> Option<String>) -> NetworkProfile {
        let (rpc_url, api_key, api_url, browser_url) = match self {
            Network::OpSepolia => (
                OP_SEPOLIA_RPC_URL,
                OP_SEPOLIA_EXPLORER_API_KEY,
                OP_SEPOLIA_EXPLORER_API_URL,
                OP_SEPOLIA_EXPLORER_BROWSER_URL,
            ),
            Network::BaseSepolia => (
                BASE_SEPOLIA_RPC_URL,
                BASE_SEPOLIA_EXPLORER_API_KEY,
                BASE_SEPOLIA_EXPLORER_API_URL,
                BASE_SEPOLIA_EXPLORER_BROWSER_URL,
            ),
            Network::Fuji => (
                FUJI_RPC_URL,
                FUJI_EXPLORER_API_KEY,
                FUJI_EXPLORER_API_URL,
                FUJI_EXPLORER_BROWSER_URL,
            ),
        };

        // An empty override counts as unset, a placeholder is never used
        let api_key = lookup(&self.explorer_api_key_env_var())
            .filter(|key| !key.trim().is_empty())
            .or_else(|| Some(api_key.to_string()))
            .filter(|key| is_usable_api_key(key));

        NetworkProfile {
            name: self.name().to_string(),
            rpc_url: rpc_url.to_string(),
            credential_env_var: PRIVATE_KEY_ENV_VAR.to_string(),
            explorer: ExplorerConfig {
                api_key,
                chain_id: self.chain_id(),
                api_url: api_url.to_string(),
                browser_url: browser_url.to_string(),
            },
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything needed to deploy to, and verify on, a single network
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    /// The configuration name of the network
    pub name: String,
    /// The JSON-RPC endpoint
    pub rpc_url: String,
    /// The environment variable holding the signing key
    pub credential_env_var: String,
    /// The block explorer used to verify deployed contracts
    pub explorer: ExplorerConfig,
}

impl NetworkProfile {
    /// The chain ID the network's RPC endpoint is expected to report
    pub fn chain_id(&self) -> u64 {
        self.explorer.chain_id
    }

    /// Replace the RPC endpoint, e.g. with a private node
    pub fn with_rpc_url(mut self, rpc_url: String) -> Self {
        self.rpc_url = rpc_url;
        self
    }
}

/// The custom-chain entry for a block explorer
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerConfig {
    /// The explorer API key, absent if none is configured
    pub api_key: Option<String>,
    /// The chain ID the explorer indexes
    pub chain_id: u64,
    /// The explorer's verification API endpoint
    pub api_url: String,
    /// The explorer's human-facing URL
    pub browser_url: String,
}

impl ExplorerConfig {
    /// The browser link for a deployed contract
    pub fn address_url(&self, address: Address) -> String {
        format!(
            "{}/{EXPLORER_ADDRESS_PATH_SEGMENT}/{address:#x}",
            self.browser_url.trim_end_matches('/')
        )
    }
}

/// Whether the given explorer API key is an actual key, rather than an empty
/// string or the configuration placeholder
fn is_usable_api_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}
