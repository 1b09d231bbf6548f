use anyhow::Result;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = edgerc_auth::cli::Cli::parse();
    edgerc_auth::util::logging::init(cli.debug);
    cli.run().await
}
