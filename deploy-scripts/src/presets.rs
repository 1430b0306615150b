//! Named deployments with fixed constructor arguments

use std::fmt::{self, Display};

use clap::ValueEnum;

use crate::request::DeploymentRequest;

/// The `SigmaHop` constructor arguments, in declaration order
pub const SIGMA_HOP_CONSTRUCTOR_ARGS: [&str; 5] = [
    "0xA3cF45939bD6260bcFe3D66bc73d60f19e49a8BB",
    "0x7bbcE28e64B3F8b84d876Ab298393c38ad7aac4C",
    "0xa9fb1b3009dcb79e2fe346c16a604b8fa8ae0a79",
    "0xeb08f243e5d3fcff26a9e38ae5520a669f4019d0",
    "0x5425890298aed601595a70ab815c96711a31bc65",
];

/// The gas limit of the `SigmaHop` creation transaction
pub const SIGMA_HOP_GAS_LIMIT: u64 = 1_000_000;

/// The preset deployments
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    /// The `SigmaHop` contract
    SigmaHop,
}

impl Preset {
    /// The name of the contract the preset deploys
    pub fn contract_name(&self) -> &'static str {
        match self {
            Preset::SigmaHop => "SigmaHop",
        }
    }

    /// The constructor arguments of the preset
    pub fn constructor_args(&self) -> &'static [&'static str] {
        match self {
            Preset::SigmaHop => &SIGMA_HOP_CONSTRUCTOR_ARGS,
        }
    }

    /// The gas limit of the preset's creation transaction
    pub fn gas_limit(&self) -> u64 {
        match self {
            Preset::SigmaHop => SIGMA_HOP_GAS_LIMIT,
        }
    }

    /// The deployment request the preset stands for
    pub fn request(&self) -> DeploymentRequest {
        DeploymentRequest::new(
            self.contract_name(),
            self.constructor_args().iter().map(|arg| arg.to_string()).collect(),
            self.gas_limit(),
        )
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::SigmaHop => write!(f, "sigma-hop"),
        }
    }
}
