//! Credential verification command.

use crate::cli::CliContext;
use crate::core::signer::EdgeGridSigner;
use crate::core::verifier::{CredentialVerifier, EdgeGridVerifier};
use anyhow::{bail, Context, Result};
use clap::Args;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Output format: text|json
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub async fn run(ctx: &CliContext, args: VerifyArgs) -> Result<()> {
    if args.format != "text" && args.format != "json" {
        bail!("invalid format: {} (use text|json)", args.format);
    }
    let verifier = EdgeGridVerifier::new(EdgeGridSigner::new());
    report(&verifier, ctx, &args.format).await
}

/// Verify with any verifier and print the result.
pub async fn report(verifier: &dyn CredentialVerifier, ctx: &CliContext, format: &str) -> Result<()> {
    let credential = verifier
        .verify(&ctx.edgerc, Some(&ctx.section), ctx.debug)
        .await
        .with_context(|| format!("verify section [{}]", ctx.section))?;

    if format == "json" {
        let json = serde_json::to_string_pretty(&credential).context("serialize credential")?;
        println!("{}", json);
    } else {
        print!("{}", credential.render());
    }
    Ok(())
}
