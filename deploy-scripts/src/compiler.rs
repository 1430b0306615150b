//! The solc settings the contracts are compiled with, in the shape of the
//! `settings` object of solc's standard-JSON input

use serde::Serialize;

use crate::{
    constants::{EVM_VERSION, OPTIMIZER_RUNS, SOLC_VERSION, YUL_OPTIMIZER_STEPS},
    errors::DeployError,
};

/// The compiler version and settings for the deployed contracts
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    /// The solc version
    #[serde(skip)]
    pub version: String,
    /// The optimizer configuration
    pub optimizer: OptimizerSettings,
    /// The target EVM version
    pub evm_version: String,
    /// Whether to compile through the Yul IR pipeline
    #[serde(rename = "viaIR")]
    pub via_ir: bool,
}

/// The optimizer section of the compiler settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptimizerSettings {
    /// Whether the optimizer is enabled
    pub enabled: bool,
    /// The expected number of executions of each opcode
    pub runs: u32,
    /// Fine-grained optimizer switches
    pub details: OptimizerDetails,
}

/// Fine-grained optimizer switches
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerDetails {
    /// The Yul optimizer switches
    pub yul_details: YulDetails,
}

/// The Yul optimizer switches
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YulDetails {
    /// The optimizer step sequence
    pub optimizer_steps: String,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: SOLC_VERSION.to_string(),
            optimizer: OptimizerSettings {
                enabled: true,
                runs: OPTIMIZER_RUNS,
                details: OptimizerDetails {
                    yul_details: YulDetails {
                        optimizer_steps: YUL_OPTIMIZER_STEPS.to_string(),
                    },
                },
            },
            evm_version: EVM_VERSION.to_string(),
            via_ir: true,
        }
    }
}

impl CompilerSettings {
    /// The settings as a standard-JSON `settings` value
    pub fn to_standard_json(&self) -> Result<serde_json::Value, DeployError> {
        serde_json::to_value(self).map_err(|e| DeployError::Serde(e.to_string()))
    }
}
