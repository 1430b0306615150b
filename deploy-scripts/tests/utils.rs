use std::fs;

use alloy::{primitives::address, rpc::types::TransactionReceipt};
use eyre::Result;
use serde_json::{json, Value};
use sigma_deploy::{
    errors::DeployError,
    utils::{deployed_address, expected_deployment_address, load_signer, write_deployed_address},
};

/// The first default account of an Anvil node
const ANVIL_PKEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

// ---------------
// | Credentials |
// ---------------

#[test]
fn test_missing_credential() {
    assert!(matches!(load_signer(None), Err(DeployError::MissingCredential(_))));
    assert!(matches!(load_signer(Some("")), Err(DeployError::MissingCredential(_))));
    assert!(matches!(load_signer(Some("  ")), Err(DeployError::MissingCredential(_))));
}

#[test]
fn test_malformed_credential() {
    let res = load_signer(Some("not a key"));
    assert!(matches!(res, Err(DeployError::ClientInitialization(_))));

    // The error must not echo the key back
    let msg = load_signer(Some("0xdeadbeef")).unwrap_err().to_string();
    assert!(!msg.contains("deadbeef"));
}

#[test]
fn test_valid_credential() -> Result<()> {
    let signer = load_signer(Some(ANVIL_PKEY))?;
    assert_eq!(
        signer.address(),
        address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
    );
    Ok(())
}

// ---------------------
// | Deployment Address |
// ---------------------

#[test]
fn test_expected_deployment_address() {
    let deployer = address!("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");
    assert_eq!(
        expected_deployment_address(deployer, 0),
        address!("cd234a471b72ba2f1ccf0a70fcaba648a5eecd8d")
    );
    assert_eq!(
        expected_deployment_address(deployer, 1),
        address!("343c43a37d37dff08ae8c4a11544c718abb4fcf8")
    );
}

#[test]
fn test_redeploy_yields_new_address() {
    let deployer = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    for nonce in 0..16 {
        assert_ne!(
            expected_deployment_address(deployer, nonce),
            expected_deployment_address(deployer, nonce + 1)
        );
    }
}

// ---------------
// | Deployments |
// ---------------

#[test]
fn test_write_deployed_address() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("deployments.json");

    let hop = address!("5425890298aed601595a70ab815c96711a31bc65");
    let factory = address!("eb08f243e5d3fcff26a9e38ae5520a669f4019d0");
    write_deployed_address(&path, "fuji", "SigmaHop", hop)?;
    write_deployed_address(&path, "fuji", "SigmaProxyFactory", factory)?;
    write_deployed_address(&path, "baseSepolia", "SigmaHop", factory)?;

    let json: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(json["fuji"]["SigmaHop"], format!("{hop:#x}"));
    assert_eq!(json["fuji"]["SigmaProxyFactory"], format!("{factory:#x}"));
    assert_eq!(json["baseSepolia"]["SigmaHop"], format!("{factory:#x}"));

    // A redeployment overwrites the previous address
    write_deployed_address(&path, "fuji", "SigmaHop", factory)?;
    let json: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(json["fuji"]["SigmaHop"], format!("{factory:#x}"));

    Ok(())
}

#[test]
fn test_write_into_malformed_deployments() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("deployments.json");
    fs::write(&path, r#"{ "fuji": "0x00" }"#)?;

    let addr = address!("5425890298aed601595a70ab815c96711a31bc65");
    let res = write_deployed_address(&path, "fuji", "SigmaHop", addr);
    assert!(matches!(res, Err(DeployError::WriteDeployments(_))));
    Ok(())
}

// ------------
// | Receipts |
// ------------

/// A creation transaction receipt with the given status and contract address
fn creation_receipt(status: bool, contract_address: Option<&str>) -> Result<TransactionReceipt> {
    let receipt = json!({
        "type": "0x2",
        "status": if status { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0x1d4c0",
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "transactionHash": "0x21f6554c28453a01e7276c1db2fc1695bb512b170818bfa98fa8136433100616",
        "transactionIndex": "0x0",
        "blockHash": "0x4acbdefb861ef4adedb135ca52865f6743451bfbfa35db78076f881a40401a5e",
        "blockNumber": "0x1",
        "gasUsed": "0x1d4c0",
        "effectiveGasPrice": "0x3b9aca00",
        "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
        "to": null,
        "contractAddress": contract_address,
    });

    Ok(serde_json::from_value(receipt)?)
}

#[test]
fn test_deployed_address_from_receipt() -> Result<()> {
    let receipt = creation_receipt(true, Some("0x5fbdb2315678afecb367f032d93f642f64180aa3"))?;
    assert_eq!(
        deployed_address(&receipt)?,
        address!("5fbdb2315678afecb367f032d93f642f64180aa3")
    );
    Ok(())
}

#[test]
fn test_reverted_creation_rejected() -> Result<()> {
    // A reverted creation may still report the address it would have used
    let receipt = creation_receipt(false, Some("0x5fbdb2315678afecb367f032d93f642f64180aa3"))?;
    let err = deployed_address(&receipt).unwrap_err();

    assert!(matches!(err, DeployError::ContractDeployment(_)));
    assert!(err.to_string().contains("reverted"));
    Ok(())
}

#[test]
fn test_receipt_without_contract_address_rejected() -> Result<()> {
    let receipt = creation_receipt(true, None)?;
    let err = deployed_address(&receipt).unwrap_err();

    assert!(matches!(err, DeployError::ContractDeployment(_)));
    assert!(err.to_string().contains("no contract address"));
    Ok(())
}
