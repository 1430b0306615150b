use clap::Parser;
use sigma_deploy::{cli::Cli, errors::DeployError};

#[tokio::main]
async fn main() -> Result<(), DeployError> {
    // A missing `.env` file is fine, the key may come from the environment or the CLI
    dotenv::dotenv().ok();

    let Cli {
        priv_key,
        rpc_url,
        network,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    command.run(priv_key, rpc_url, network).await
}
