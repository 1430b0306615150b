//! Definitions of errors that can occur during deployment of the contracts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum DeployError {
    /// No signing credential was provided
    MissingCredential(String),
    /// A deploy command was run without selecting a network
    MissingNetwork,
    /// Error initializing the RPC client or signer
    ClientInitialization(String),
    /// Error reading a compilation artifact from disk
    ReadArtifact(String),
    /// Error parsing a compilation artifact
    ArtifactParsing(String),
    /// Error constructing constructor calldata
    CalldataConstruction(String),
    /// The RPC endpoint reports a different chain than the selected network
    ChainMismatch {
        /// The chain ID of the selected network profile
        expected: u64,
        /// The chain ID reported by the RPC endpoint
        actual: u64,
    },
    /// Error fetching the nonce of the deployer
    NonceFetching(String),
    /// Error submitting or confirming a deployment
    ContractDeployment(String),
    /// Error writing the deployments file
    WriteDeployments(String),
    /// Error serializing output
    Serde(String),
}

impl Display for DeployError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::MissingCredential(s) => write!(f, "missing signing credential: {}", s),
            DeployError::MissingNetwork => write!(f, "no network selected, pass --network"),
            DeployError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            DeployError::ReadArtifact(s) => write!(f, "error reading artifact: {}", s),
            DeployError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            DeployError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            DeployError::ChainMismatch { expected, actual } => write!(
                f,
                "rpc endpoint is on chain {}, expected chain {}",
                actual, expected
            ),
            DeployError::NonceFetching(s) => write!(f, "error fetching nonce: {}", s),
            DeployError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            DeployError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            DeployError::Serde(s) => write!(f, "error serializing output: {}", s),
        }
    }
}

impl Error for DeployError {}
