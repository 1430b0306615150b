use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    node_bindings::{Anvil, AnvilInstance},
    primitives::{Address, U64},
    providers::ProviderBuilder,
    transports::mock::Asserter,
};
use eyre::Result;
use serde_json::Value;
use sigma_deploy::{
    cli::DeployOptions,
    commands::deploy,
    constants::FUJI_CHAIN_ID,
    errors::DeployError,
    networks::Network,
    presets::Preset,
    request::DeploymentRequest,
    utils::{check_chain_id, expected_deployment_address, load_signer},
};

/// The first default account of an Anvil node
const ANVIL_PKEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The chain ID an Anvil node reports unless configured otherwise
const ANVIL_DEFAULT_CHAIN_ID: u64 = 31337;

/// The directory holding the Hardhat-layout fixtures
fn hardhat_fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/hardhat")
}

/// Deployment options reading artifacts from `artifacts`
fn options(artifacts: &Path, deployments_path: Option<PathBuf>) -> DeployOptions {
    DeployOptions {
        artifacts: artifacts.to_path_buf(),
        confirmations: 1,
        deployments_path,
    }
}

/// Spawn a local node, or `None` if `anvil` is not installed
fn spawn_anvil(chain_id: Option<u64>) -> Option<AnvilInstance> {
    let mut anvil = Anvil::new();
    if let Some(chain_id) = chain_id {
        anvil = anvil.chain_id(chain_id);
    }

    match anvil.try_spawn() {
        Ok(instance) => Some(instance),
        Err(e) => {
            eprintln!("skipping, could not spawn anvil: {e}");
            None
        }
    }
}

// -------------------
// | Chain ID Checks |
// -------------------

#[tokio::test]
async fn test_chain_id_matches() -> Result<()> {
    let asserter = Asserter::new();
    asserter.push_success(&U64::from(FUJI_CHAIN_ID));
    let provider = ProviderBuilder::new().connect_mocked_client(asserter);

    check_chain_id(&provider, FUJI_CHAIN_ID).await?;
    Ok(())
}

#[tokio::test]
async fn test_chain_id_mismatch() {
    let asserter = Asserter::new();
    asserter.push_success(&U64::from(ANVIL_DEFAULT_CHAIN_ID));
    let provider = ProviderBuilder::new().connect_mocked_client(asserter);

    let res = check_chain_id(&provider, FUJI_CHAIN_ID).await;
    assert!(matches!(
        res,
        Err(DeployError::ChainMismatch {
            expected: FUJI_CHAIN_ID,
            actual: ANVIL_DEFAULT_CHAIN_ID
        })
    ));
}

#[tokio::test]
async fn test_chain_id_rpc_failure() {
    let asserter = Asserter::new();
    asserter.push_failure_msg("connection refused");
    let provider = ProviderBuilder::new().connect_mocked_client(asserter);

    let res = check_chain_id(&provider, FUJI_CHAIN_ID).await;
    assert!(matches!(res, Err(DeployError::ClientInitialization(_))));
}

// ---------------
// | Deployments |
// ---------------

#[tokio::test]
async fn test_redeploy_creates_new_instance() -> Result<()> {
    let Some(anvil) = spawn_anvil(Some(FUJI_CHAIN_ID)) else {
        return Ok(());
    };
    let dir = tempfile::tempdir()?;
    let deployments_path = dir.path().join("deployments.json");
    let deployer = load_signer(Some(ANVIL_PKEY))?.address();

    let first = deploy(
        Preset::SigmaHop.request(),
        Network::Fuji,
        options(&hardhat_fixtures(), Some(deployments_path.clone())),
        Some(ANVIL_PKEY),
        Some(anvil.endpoint()),
    )
    .await?;
    let second = deploy(
        Preset::SigmaHop.request(),
        Network::Fuji,
        options(&hardhat_fixtures(), Some(deployments_path.clone())),
        Some(ANVIL_PKEY),
        Some(anvil.endpoint()),
    )
    .await?;

    // A fresh account deploys at nonces 0 and 1
    assert_ne!(first, second);
    assert_eq!(first, expected_deployment_address(deployer, 0));
    assert_eq!(second, expected_deployment_address(deployer, 1));

    // The deployments file holds the latest instance
    let deployments: Value = serde_json::from_str(&fs::read_to_string(&deployments_path)?)?;
    let recorded: Address = deployments["fuji"]["SigmaHop"]
        .as_str()
        .expect("address is recorded")
        .parse()?;
    assert_eq!(recorded, second);
    Ok(())
}

#[tokio::test]
async fn test_deploy_to_wrong_chain_sends_nothing() -> Result<()> {
    let Some(anvil) = spawn_anvil(None) else {
        return Ok(());
    };
    let dir = tempfile::tempdir()?;
    let deployments_path = dir.path().join("deployments.json");

    let res = deploy(
        Preset::SigmaHop.request(),
        Network::Fuji,
        options(&hardhat_fixtures(), Some(deployments_path.clone())),
        Some(ANVIL_PKEY),
        Some(anvil.endpoint()),
    )
    .await;

    assert!(matches!(
        res,
        Err(DeployError::ChainMismatch {
            expected: FUJI_CHAIN_ID,
            actual: ANVIL_DEFAULT_CHAIN_ID
        })
    ));
    assert!(!deployments_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_reverting_constructor_fails() -> Result<()> {
    let Some(anvil) = spawn_anvil(Some(FUJI_CHAIN_ID)) else {
        return Ok(());
    };
    let dir = tempfile::tempdir()?;
    let deployments_path = dir.path().join("deployments.json");

    // Init code which reverts immediately
    let artifact = r#"{ "contractName": "Reverter", "abi": [], "bytecode": "0x60006000fd" }"#;
    fs::write(dir.path().join("Reverter.json"), artifact)?;

    let request = DeploymentRequest::new("Reverter", vec![], 100_000);
    let res = deploy(
        request,
        Network::Fuji,
        options(dir.path(), Some(deployments_path.clone())),
        Some(ANVIL_PKEY),
        Some(anvil.endpoint()),
    )
    .await;

    assert!(matches!(res, Err(DeployError::ContractDeployment(_))));
    assert!(!deployments_path.exists());
    Ok(())
}
