use crate::cli::CliContext;
use crate::core::config_store::{self, PasteMode};
use anyhow::{bail, Context, Result};
use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

#[derive(Args, Debug)]
pub struct PasteArgs {
    /// Replace pasted sections instead of merging their fields
    #[arg(long, conflicts_with = "replace_file")]
    pub overwrite: bool,

    /// Discard every existing section before writing the pasted ones
    #[arg(long)]
    pub replace_file: bool,
}

impl PasteArgs {
    pub fn mode(&self) -> PasteMode {
        if self.replace_file {
            PasteMode::ReplaceFile
        } else if self.overwrite {
            PasteMode::ReplaceSection
        } else {
            PasteMode::Merge
        }
    }
}

pub async fn run(ctx: &CliContext, args: PasteArgs) -> Result<()> {
    if !ctx.non_interactive {
        println!("Input credential blocks followed by two empty lines (or Ctrl-D):");
    }
    let block = read_block(BufReader::new(tokio::io::stdin()))
        .await
        .context("read credential block from stdin")?;
    if block.trim().is_empty() {
        bail!("no credentials pasted");
    }

    let sections = config_store::paste(&ctx.edgerc, Some(&ctx.section), &block, args.mode())
        .await
        .with_context(|| format!("paste credentials into {}", ctx.edgerc.display()))?;

    println!("Success! Added credentials for:");
    for section in sections {
        println!("  {}", section);
    }
    Ok(())
}

/// Read lines until EOF or two consecutive empty lines after some content.
pub async fn read_block<R: AsyncBufRead + Unpin>(reader: R) -> std::io::Result<String> {
    let mut lines = reader.lines();
    let mut block = String::new();
    let mut blank_run = 0;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            if block.is_empty() {
                continue;
            }
            blank_run += 1;
            if blank_run >= 2 {
                break;
            }
        } else {
            blank_run = 0;
        }
        block.push_str(&line);
        block.push('\n');
    }
    Ok(block)
}
