//! Implementations of the deploy scripts

use alloy::{
    network::TransactionBuilder,
    primitives::Address,
    providers::Provider,
    rpc::types::TransactionRequest,
};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::{
    artifacts::ContractArtifact,
    cli::DeployOptions,
    compiler::CompilerSettings,
    errors::DeployError,
    networks::{Network, NetworkProfile},
    request::DeploymentRequest,
    utils::{
        check_chain_id, deployed_address, expected_deployment_address, load_signer, setup_client,
        write_deployed_address,
    },
};

/// Deploy a single contract to the selected network, returning its address.
///
/// Every run creates a new contract instance, so this is not safe to retry
/// blindly.
pub async fn deploy(
    request: DeploymentRequest,
    network: Network,
    options: DeployOptions,
    priv_key: Option<&str>,
    rpc_url: Option<String>,
) -> Result<Address, DeployError> {
    let mut profile = network.profile();
    if let Some(rpc_url) = rpc_url {
        profile = profile.with_rpc_url(rpc_url);
    }

    // Load the credential and build the payload before touching the network
    let signer = load_signer(priv_key)?;
    let deployer = signer.address();

    let artifact = ContractArtifact::load(&request.contract_name, &options.artifacts)?;
    let deploy_code = request.deploy_code(&artifact)?;

    let provider = setup_client(signer, &profile.rpc_url)?;
    check_chain_id(&provider, profile.chain_id()).await?;

    info!("Deploying contracts with the account: {deployer:#x}");

    let nonce = provider
        .get_transaction_count(deployer)
        .await
        .map_err(|e| DeployError::NonceFetching(e.to_string()))?;
    let expected_address = expected_deployment_address(deployer, nonce);
    debug!(
        network = %network,
        contract = %request.contract_name,
        gas_limit = request.gas_limit,
        nonce,
        "expecting deployment at {expected_address:#x}"
    );

    let tx = TransactionRequest::default()
        .with_from(deployer)
        .with_nonce(nonce)
        .with_gas_limit(request.gas_limit)
        .with_deploy_code(deploy_code);

    let receipt = provider
        .send_transaction(tx)
        .await
        .map_err(|e| DeployError::ContractDeployment(e.to_string()))?
        .with_required_confirmations(options.confirmations.max(1))
        .get_receipt()
        .await
        .map_err(|e| DeployError::ContractDeployment(e.to_string()))?;

    let address = deployed_address(&receipt)?;
    if address != expected_address {
        warn!("contract deployed at {address:#x}, expected {expected_address:#x}");
    }

    info!(
        "Contract address: {address:#x} ({})",
        profile.explorer.address_url(address)
    );

    if let Some(deployments_path) = options.deployments_path {
        write_deployed_address(
            &deployments_path,
            &profile.name,
            &request.contract_name,
            address,
        )?;
        debug!("recorded deployment in {}", deployments_path.display());
    }

    Ok(address)
}

/// Print the profile of the given network, or of every network, as JSON
pub fn list_networks(network: Option<Network>) -> Result<(), DeployError> {
    let profiles: Vec<NetworkProfile> = match network {
        Some(network) => vec![network.profile()],
        None => Network::ALL.iter().map(Network::profile).collect(),
    };
    let out =
        serde_json::to_string_pretty(&profiles).map_err(|e| DeployError::Serde(e.to_string()))?;

    println!("{out}");
    Ok(())
}

/// Print the compiler version and standard-JSON settings
pub fn print_compiler_settings() -> Result<(), DeployError> {
    let settings = CompilerSettings::default();
    let out = json!({
        "version": settings.version,
        "settings": settings.to_standard_json()?,
    });

    let out = serde_json::to_string_pretty(&out).map_err(|e| DeployError::Serde(e.to_string()))?;
    println!("{out}");
    Ok(())
}
