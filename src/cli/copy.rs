use crate::cli::CliContext;
use crate::core::config_store;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Section to copy from
    pub from: String,

    /// Section to copy to (created or replaced)
    pub to: String,
}

pub async fn run(ctx: &CliContext, args: CopyArgs) -> Result<()> {
    config_store::copy(&ctx.edgerc, &args.from, &args.to)
        .await
        .with_context(|| format!("copy section in {}", ctx.edgerc.display()))?;
    println!("Success! Copied credentials from section {} to {}", args.from, args.to);
    Ok(())
}
