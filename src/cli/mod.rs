//! CLI routing and command dispatch.

use crate::constants;
use crate::core::paths;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod copy;
pub mod list;
pub mod paste;
pub mod setup;
pub mod verify;

/// Shared context passed to all command handlers.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub edgerc: PathBuf,
    pub section: String,
    pub debug: bool,
    pub non_interactive: bool,
}

#[derive(Parser, Debug)]
#[command(name = "edgerc-auth", version, about = "Manage and verify EdgeGrid credentials in .edgerc")]
pub struct Cli {
    /// Credential file (default: $EDGERC or ~/.edgerc)
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Section of the credential file to use
    #[arg(
        long,
        short = 's',
        global = true,
        env = "EDGERC_SECTION",
        default_value = constants::DEFAULT_SECTION
    )]
    pub section: String,

    /// Show debug logs, including the signed request trace
    #[arg(long, global = true)]
    pub debug: bool,

    /// Run in non-interactive mode (no prompts, suitable for automation)
    #[arg(long, global = true, env = "EDGERC_NON_INTERACTIVE")]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let ctx = CliContext {
            edgerc: paths::resolve_edgerc(self.config),
            section: self.section,
            debug: self.debug,
            non_interactive: self.non_interactive,
        };
        tracing::debug!(edgerc = %ctx.edgerc.display(), section = %ctx.section, command = self.command.name(), "dispatch");

        match self.command {
            Commands::Setup(args) => setup::run(&ctx, args).await,
            Commands::Paste(args) => paste::run(&ctx, args).await,
            Commands::Copy(args) => copy::run(&ctx, args).await,
            Commands::Verify(args) => verify::run(&ctx, args).await,
            Commands::List(args) => list::run(&ctx, args).await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store credentials for a section, prompting for missing fields
    Setup(setup::SetupArgs),
    /// Paste credential blocks from the API client page
    Paste(paste::PasteArgs),
    /// Copy one section to another
    Copy(copy::CopyArgs),
    /// Verify a section against the client API
    Verify(verify::VerifyArgs),
    /// List sections without secrets
    List(list::ListArgs),
}

impl Commands {
    /// Command name for logs.
    pub fn name(&self) -> &str {
        match self {
            Commands::Setup(_) => "setup",
            Commands::Paste(_) => "paste",
            Commands::Copy(_) => "copy",
            Commands::Verify(_) => "verify",
            Commands::List(_) => "list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_copy_with_globals() {
        let cli = Cli::try_parse_from([
            "edgerc-auth",
            "copy",
            "papi",
            "papi-backup",
            "--config",
            "/tmp/x.edgerc",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.edgerc")));
        assert!(cli.debug);
        match cli.command {
            Commands::Copy(args) => {
                assert_eq!(args.from, "papi");
                assert_eq!(args.to, "papi-backup");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_paste_flags_conflict() {
        let res = Cli::try_parse_from(["edgerc-auth", "paste", "--overwrite", "--replace-file"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_section_defaults() {
        if std::env::var("EDGERC_SECTION").is_err() {
            let cli = Cli::try_parse_from(["edgerc-auth", "list"]).unwrap();
            assert_eq!(cli.section, "default");
            assert_eq!(cli.command.name(), "list");
        }
    }
}
