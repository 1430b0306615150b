//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy, list_networks, print_compiler_settings},
    constants::{
        DEFAULT_ARTIFACTS_DIR, NUM_DEPLOY_CONFIRMATIONS, PRIVATE_KEY_ENV_VAR, RPC_URL_ENV_VAR,
    },
    errors::DeployError,
    networks::Network,
    presets::Preset,
    request::DeploymentRequest,
};

/// Deploy pre-compiled contracts to the supported test networks
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = PRIVATE_KEY_ENV_VAR, hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Network RPC URL, overriding the selected network's public endpoint
    #[arg(short, long, env = RPC_URL_ENV_VAR)]
    pub rpc_url: Option<String>,

    /// The network to deploy to, required by the deploy commands
    #[arg(short, long, value_enum, global = true)]
    pub network: Option<Network>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The commands the deploy scripts support
#[derive(Subcommand)]
pub enum Command {
    /// Deploy a contract with the given constructor arguments
    Deploy(DeployArgs),
    /// Deploy one of the preset contracts
    DeployPreset(DeployPresetArgs),
    /// Print the network profiles and their explorer verification metadata
    Networks,
    /// Print the solc settings the contracts are compiled with
    CompilerSettings,
}

impl Command {
    /// Run the command, loading the signing key only if it needs one
    pub async fn run(
        self,
        priv_key: Option<String>,
        rpc_url: Option<String>,
        network: Option<Network>,
    ) -> Result<(), DeployError> {
        match self {
            Command::Deploy(args) => {
                let network = require_network(network)?;
                let request =
                    DeploymentRequest::new(args.contract, args.constructor_args, args.gas_limit);
                deploy(request, network, args.options, priv_key.as_deref(), rpc_url).await?;
                Ok(())
            }
            Command::DeployPreset(args) => {
                let network = require_network(network)?;
                let request = args.preset.request();
                deploy(request, network, args.options, priv_key.as_deref(), rpc_url).await?;
                Ok(())
            }
            Command::Networks => list_networks(network),
            Command::CompilerSettings => print_compiler_settings(),
        }
    }
}

/// Deployments need an explicit network, there is no default chain
fn require_network(network: Option<Network>) -> Result<Network, DeployError> {
    network.ok_or(DeployError::MissingNetwork)
}

/// Deploy a contract from its compiled artifact
#[derive(Args)]
pub struct DeployArgs {
    /// The name of the contract to deploy
    #[arg(short, long)]
    pub contract: String,

    /// A constructor argument, repeated in declaration order
    #[arg(short = 'a', long = "arg")]
    pub constructor_args: Vec<String>,

    /// The gas limit of the creation transaction
    #[arg(short, long)]
    pub gas_limit: u64,

    /// Where and how to deploy
    #[command(flatten)]
    pub options: DeployOptions,
}

/// Deploy a preset contract with its fixed constructor arguments
#[derive(Args)]
pub struct DeployPresetArgs {
    /// The preset to deploy
    #[arg(long, value_enum)]
    pub preset: Preset,

    /// Where and how to deploy
    #[command(flatten)]
    pub options: DeployOptions,
}

/// Options shared by every deployment
#[derive(Args)]
pub struct DeployOptions {
    /// An artifact file, or a directory searched for `<contract>.json`
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// The number of confirmations to wait for
    #[arg(long, default_value_t = NUM_DEPLOY_CONFIRMATIONS)]
    pub confirmations: u64,

    /// A JSON file in which to record the deployed address
    #[arg(long)]
    pub deployments_path: Option<PathBuf>,
}
