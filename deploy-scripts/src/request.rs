//! The parameters of a single contract deployment

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    primitives::Bytes,
};

use crate::{artifacts::ContractArtifact, errors::DeployError};

/// A single contract deployment: which contract, which constructor arguments,
/// and how much gas the creation transaction may use
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// The name of the contract to deploy
    pub contract_name: String,
    /// The constructor arguments, in declaration order, in their string form
    pub constructor_args: Vec<String>,
    /// The gas limit of the creation transaction
    pub gas_limit: u64,
}

impl DeploymentRequest {
    /// Constructor
    pub fn new(
        contract_name: impl Into<String>,
        constructor_args: Vec<String>,
        gas_limit: u64,
    ) -> Self {
        Self {
            contract_name: contract_name.into(),
            constructor_args,
            gas_limit,
        }
    }

    /// Parse the constructor arguments against the artifact's constructor
    /// signature.
    ///
    /// Errors if the number of arguments differs from the number of
    /// constructor parameters, or if an argument does not parse as its
    /// parameter's type.
    pub fn constructor_values(
        &self,
        artifact: &ContractArtifact,
    ) -> Result<Vec<DynSolValue>, DeployError> {
        let params = artifact
            .constructor()
            .map(|c| c.inputs.as_slice())
            .unwrap_or_default();

        if params.len() != self.constructor_args.len() {
            return Err(DeployError::CalldataConstruction(format!(
                "`{}` constructor takes {} arguments, got {}",
                self.contract_name,
                params.len(),
                self.constructor_args.len()
            )));
        }

        params
            .iter()
            .zip(self.constructor_args.iter())
            .map(|(param, arg)| {
                let ty = param
                    .resolve()
                    .map_err(|e| DeployError::CalldataConstruction(e.to_string()))?;
                ty.coerce_str(arg).map_err(|e| {
                    DeployError::CalldataConstruction(format!(
                        "argument `{}` ({}): {}",
                        param.name, param.ty, e
                    ))
                })
            })
            .collect()
    }

    /// Build the payload of the creation transaction: the artifact's bytecode
    /// followed by the ABI-encoded constructor arguments
    pub fn deploy_code(&self, artifact: &ContractArtifact) -> Result<Bytes, DeployError> {
        let values = self.constructor_values(artifact)?;

        let encoded_args = match artifact.constructor() {
            Some(constructor) => constructor
                .abi_encode_input(&values)
                .map_err(|e| DeployError::CalldataConstruction(e.to_string()))?,
            None => Vec::new(),
        };

        let mut code = artifact.bytecode.to_vec();
        code.extend_from_slice(&encoded_args);
        Ok(code.into())
    }
}
