use crate::cli::CliContext;
use crate::core::config_store;
use anyhow::{bail, Context, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Serialize)]
struct ListItem {
    section: String,
    host: Option<String>,
    client_token: Option<String>,
    complete: bool,
}

pub async fn run(ctx: &CliContext, args: ListArgs) -> Result<()> {
    if args.format != "table" && args.format != "json" {
        bail!("invalid format: {} (use table|json)", args.format);
    }

    let items: Vec<ListItem> = if ctx.edgerc.exists() {
        config_store::list(&ctx.edgerc)
            .await
            .with_context(|| format!("list sections in {}", ctx.edgerc.display()))?
            .into_iter()
            .map(|(section, profile)| ListItem {
                section,
                host: profile.host,
                client_token: profile.client_token,
                complete: profile.complete,
            })
            .collect()
    } else {
        Vec::new()
    };

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&items).context("serialize list")?;
        println!("{}", json);
        return Ok(());
    }

    if items.is_empty() {
        println!("No sections found in {}", ctx.edgerc.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Section").add_attribute(Attribute::Bold),
        Cell::new("Host").add_attribute(Attribute::Bold),
        Cell::new("Client token").add_attribute(Attribute::Bold),
        Cell::new("Complete").add_attribute(Attribute::Bold),
    ]);
    for item in items {
        table.add_row(vec![
            item.section,
            item.host.unwrap_or_else(|| "-".to_string()),
            item.client_token.unwrap_or_else(|| "-".to_string()),
            if item.complete { "yes" } else { "no" }.to_string(),
        ]);
    }

    println!("{}", table);
    Ok(())
}
