//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy::{
    network::{Ethereum, ReceiptResponse},
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use serde_json::Value;

use crate::{constants::PRIVATE_KEY_ENV_VAR, errors::DeployError};

/// Parse the deployer's signing key.
///
/// An absent or empty key is an error; nothing is sent without a signer.
pub fn load_signer(priv_key: Option<&str>) -> Result<PrivateKeySigner, DeployError> {
    let priv_key = priv_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            DeployError::MissingCredential(format!(
                "set {PRIVATE_KEY_ENV_VAR} or pass --priv-key"
            ))
        })?;

    // The parse error is not forwarded so that the key never reaches the logs
    PrivateKeySigner::from_str(priv_key).map_err(|_| {
        DeployError::ClientInitialization("private key is not a valid secp256k1 key".to_string())
    })
}

/// Sets up a provider which signs transactions with the given signer
pub fn setup_client(
    signer: PrivateKeySigner,
    rpc_url: &str,
) -> Result<DynProvider<Ethereum>, DeployError> {
    let url = Url::parse(rpc_url).map_err(|e| DeployError::ClientInitialization(e.to_string()))?;
    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

    Ok(DynProvider::new(provider))
}

/// Ensure the RPC endpoint serves the chain the network profile describes
pub async fn check_chain_id(provider: &impl Provider, expected: u64) -> Result<(), DeployError> {
    let actual = provider
        .get_chain_id()
        .await
        .map_err(|e| DeployError::ClientInitialization(e.to_string()))?;

    if actual != expected {
        return Err(DeployError::ChainMismatch { expected, actual });
    }
    Ok(())
}

/// The address a contract created by `deployer` at `nonce` will be deployed to
pub fn expected_deployment_address(deployer: Address, nonce: u64) -> Address {
    deployer.create(nonce)
}

/// The address of the contract a creation transaction deployed.
///
/// Errors if the constructor reverted or the receipt is not for a contract
/// creation.
pub fn deployed_address(receipt: &TransactionReceipt) -> Result<Address, DeployError> {
    if !receipt.status() {
        return Err(DeployError::ContractDeployment(format!(
            "creation transaction {:#x} reverted",
            receipt.transaction_hash
        )));
    }

    receipt.contract_address.ok_or_else(|| {
        DeployError::ContractDeployment(format!(
            "receipt of {:#x} has no contract address",
            receipt.transaction_hash
        ))
    })
}

/// Record a deployed address in the deployments file, under
/// `<network>.<contract>`, creating the file if it does not exist
pub fn write_deployed_address(
    file_path: &Path,
    network: &str,
    contract: &str,
    address: Address,
) -> Result<(), DeployError> {
    let mut deployments = if file_path.exists() {
        let contents = fs::read_to_string(file_path)
            .map_err(|e| DeployError::WriteDeployments(e.to_string()))?;
        serde_json::from_str::<Value>(&contents)
            .map_err(|e| DeployError::WriteDeployments(e.to_string()))?
    } else {
        Value::Object(Default::default())
    };

    let network_entry = deployments
        .as_object_mut()
        .ok_or_else(|| {
            DeployError::WriteDeployments("deployments file is not a JSON object".to_string())
        })?
        .entry(network)
        .or_insert_with(|| Value::Object(Default::default()));

    network_entry
        .as_object_mut()
        .ok_or_else(|| {
            DeployError::WriteDeployments(format!("`{network}` entry is not a JSON object"))
        })?
        .insert(contract.to_string(), Value::String(format!("{address:#x}")));

    let contents = serde_json::to_string_pretty(&deployments)
        .map_err(|e| DeployError::WriteDeployments(e.to_string()))?;
    fs::write(file_path, contents).map_err(|e| DeployError::WriteDeployments(e.to_string()))
}
