//! Loading of compiled contract artifacts.
//!
//! Both the Hardhat layout (`artifacts/contracts/<File>.sol/<Name>.json`, with
//! `bytecode` as a hex string) and the Foundry layout (`out/<File>.sol/<Name>.json`,
//! with `bytecode.object`) are understood.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::{Constructor, JsonAbi},
    primitives::{hex, Bytes},
};
use serde::Deserialize;

use crate::{
    constants::{ARTIFACT_EXTENSION, LIBRARY_PLACEHOLDER_MARKER},
    errors::DeployError,
};

/// A compiled contract, ready to be deployed
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The contract ABI
    pub abi: JsonAbi,
    /// The creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// The contract's constructor, if it declares one
    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }

    /// Parse an artifact from its JSON representation
    pub fn from_json(contract_name: &str, json: &str) -> Result<Self, DeployError> {
        let raw: RawArtifact =
            serde_json::from_str(json).map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;

        if let Some(name) = raw.contract_name.as_deref() {
            if name != contract_name {
                return Err(DeployError::ArtifactParsing(format!(
                    "artifact is for `{name}`, not `{contract_name}`"
                )));
            }
        }

        let bytecode = parse_bytecode(contract_name, raw.bytecode.as_hex())?;
        Ok(Self {
            contract_name: contract_name.to_string(),
            abi: raw.abi,
            bytecode,
        })
    }

    /// Load the artifact for `contract_name`.
    ///
    /// `path` may point directly at an artifact file, or at a directory that
    /// is searched recursively for `<contract_name>.json`.
    pub fn load(contract_name: &str, path: &Path) -> Result<Self, DeployError> {
        let artifact_path = if path.is_dir() {
            find_artifact(contract_name, path)?
        } else {
            path.to_path_buf()
        };

        let json = fs::read_to_string(&artifact_path).map_err(|e| {
            DeployError::ReadArtifact(format!("{}: {}", artifact_path.display(), e))
        })?;
        Self::from_json(contract_name, &json)
    }
}

/// The subset of an artifact file the deploy scripts need
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    /// The contract name, only present in Hardhat artifacts
    contract_name: Option<String>,
    /// The contract ABI
    abi: JsonAbi,
    /// The creation bytecode
    bytecode: RawBytecode,
}

/// The creation bytecode in either of the supported layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    /// Hardhat: a bare hex string
    Hex(String),
    /// Foundry: an object holding the hex string
    Object {
        /// The hex-encoded bytecode
        object: String,
    },
}

impl RawBytecode {
    /// The hex-encoded bytecode
    fn as_hex(&self) -> &str {
        match self {
            RawBytecode::Hex(s) => s,
            RawBytecode::Object { object } => object,
        }
    }
}

/// Decode hex creation bytecode, rejecting bytecode that cannot be deployed as-is
fn parse_bytecode(contract_name: &str, bytecode: &str) -> Result<Bytes, DeployError> {
    let bytecode = bytecode.trim();
    let bytecode = bytecode.strip_prefix("0x").unwrap_or(bytecode);
    if bytecode.is_empty() {
        return Err(DeployError::ArtifactParsing(format!(
            "`{contract_name}` has no bytecode, is it abstract or an interface?"
        )));
    }
    if bytecode.contains(LIBRARY_PLACEHOLDER_MARKER) {
        return Err(DeployError::ArtifactParsing(format!(
            "`{contract_name}` references unlinked libraries"
        )));
    }

    hex::decode(bytecode)
        .map(Bytes::from)
        .map_err(|e| DeployError::ArtifactParsing(e.to_string()))
}

/// Search `dir` recursively for the artifact file of `contract_name`
fn find_artifact(contract_name: &str, dir: &Path) -> Result<PathBuf, DeployError> {
    let file_name = format!("{contract_name}.{ARTIFACT_EXTENSION}");
    let mut matches = Vec::new();
    collect_matches(&file_name, dir, &mut matches)?;
    matches.sort();

    match matches.len() {
        0 => Err(DeployError::ReadArtifact(format!(
            "no artifact for `{contract_name}` under {}",
            dir.display()
        ))),
        1 => Ok(matches.remove(0)),
        _ => Err(DeployError::ReadArtifact(format!(
            "multiple artifacts for `{contract_name}`, pass one with --artifacts: {}",
            matches
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// Collect every file under `dir` named `file_name`
fn collect_matches(file_name: &str, dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), DeployError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| DeployError::ReadArtifact(format!("{}: {}", dir.display(), e)))?;

    for entry in entries {
        let path = entry
            .map_err(|e| DeployError::ReadArtifact(e.to_string()))?
            .path();

        if path.is_dir() {
            collect_matches(file_name, &path, out)?;
            continue;
        }

        if path.file_name().and_then(|name| name.to_str()) == Some(file_name) {
            out.push(path);
        }
    }

    Ok(())
}
