//! Constants used in the deploy scripts

// ---------------
// | Environment |
// ---------------

/// The environment variable holding the deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// The environment variable overriding the selected network's RPC URL
pub const RPC_URL_ENV_VAR: &str = "RPC_URL";

/// The suffix of the per-network environment variables overriding the
/// explorer API key, e.g. `FUJI_EXPLORER_API_KEY`
pub const EXPLORER_API_KEY_ENV_SUFFIX: &str = "_EXPLORER_API_KEY";

/// The value the configuration uses in place of a real explorer API key
pub const PLACEHOLDER_API_KEY: &str = "your API key";

// -------------------
// | Network Presets |
// -------------------

/// The chain ID of Optimism Sepolia
pub const OP_SEPOLIA_CHAIN_ID: u64 = 11155420;

/// The chain ID of Base Sepolia
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;

/// The chain ID of the Avalanche Fuji C-chain
pub const FUJI_CHAIN_ID: u64 = 43113;

/// The public RPC endpoint of Optimism Sepolia
pub const OP_SEPOLIA_RPC_URL: &str = "https://sepolia.optimism.io/";

/// The public RPC endpoint of Base Sepolia
pub const BASE_SEPOLIA_RPC_URL: &str = "https://sepolia.base.org";

/// The public RPC endpoint of the Avalanche Fuji C-chain
pub const FUJI_RPC_URL: &str = "https://api.avax-test.network/ext/bc/C/rpc";

/// The Etherscan API key configured for Optimism Sepolia
pub const OP_SEPOLIA_EXPLORER_API_KEY: &str = "89K6NC1QZIUZSA6A6S5SY1N3DVIBCJCD3A";

/// The Basescan API key configured for Base Sepolia
pub const BASE_SEPOLIA_EXPLORER_API_KEY: &str = "BZP99H9U5SEDZTTP3BIBUYE5X2TMM9PX5Q";

/// The explorer API key configured for Fuji, which was never filled in
pub const FUJI_EXPLORER_API_KEY: &str = PLACEHOLDER_API_KEY;

/// The explorer API endpoint for Optimism Sepolia
pub const OP_SEPOLIA_EXPLORER_API_URL: &str = "https://api-sepolia-optimistic.etherscan.io/api";

/// The explorer browser URL for Optimism Sepolia
pub const OP_SEPOLIA_EXPLORER_BROWSER_URL: &str = "https://sepolia-optimism.etherscan.io/";

/// The explorer API endpoint for Base Sepolia
pub const BASE_SEPOLIA_EXPLORER_API_URL: &str = "https://api-sepolia.basescan.org/api";

/// The explorer browser URL for Base Sepolia
pub const BASE_SEPOLIA_EXPLORER_BROWSER_URL: &str = "https://sepolia.basescan.org/";

/// The explorer API endpoint for Fuji, served by Routescan
pub const FUJI_EXPLORER_API_URL: &str =
    "https://api.routescan.io/v2/network/testnet/evm/43113/etherscan";

/// The explorer browser URL for Fuji
pub const FUJI_EXPLORER_BROWSER_URL: &str = "https://c-chain.snowtrace.io";

// ------------
// | Compiler |
// ------------

/// The solc version the contracts are compiled with
pub const SOLC_VERSION: &str = "0.8.24";

/// The number of optimizer runs
pub const OPTIMIZER_RUNS: u32 = 800;

/// The Yul optimizer step sequence
pub const YUL_OPTIMIZER_STEPS: &str = "u";

/// The target EVM version
pub const EVM_VERSION: &str = "paris";

// --------------
// | Deployment |
// --------------

/// The default directory in which compiled artifacts are searched for
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The extension of a compiled artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The marker solc leaves in bytecode with unlinked library references
pub const LIBRARY_PLACEHOLDER_MARKER: &str = "__";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The path segment under an explorer's browser URL for addresses
pub const EXPLORER_ADDRESS_PATH_SEGMENT: &str = "address";
