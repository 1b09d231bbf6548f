use crate::cli::CliContext;
use crate::core::config_store;
use crate::models::profile::CredentialProfile;
use anyhow::{bail, Context, Result};
use clap::Args;
use dialoguer::{Input, Password};
use zeroize::Zeroizing;

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Client token
    #[arg(long)]
    pub client_token: Option<String>,

    /// Client secret (prompted without echo when omitted)
    #[arg(long)]
    pub client_secret: Option<String>,

    /// Access token
    #[arg(long)]
    pub access_token: Option<String>,

    /// API host, e.g. akab-xxxx.luna.akamaiapis.net
    #[arg(long)]
    pub host: Option<String>,
}

impl SetupArgs {
    fn provided(&self) -> CredentialProfile {
        [
            ("client_secret", &self.client_secret),
            ("host", &self.host),
            ("access_token", &self.access_token),
            ("client_token", &self.client_token),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

pub async fn run(ctx: &CliContext, args: SetupArgs) -> Result<()> {
    let mut profile = args.provided();
    let missing = profile.missing_fields();

    if !missing.is_empty() {
        if ctx.non_interactive {
            bail!(
                "--non-interactive requires all fields; missing: {}",
                missing.join(", ")
            );
        }
        println!("You will need the credential information from your API client. All fields are required.");
        for field in missing {
            let value = prompt_field(field)?;
            profile.set(field, &value);
        }
    }

    config_store::setup(&ctx.edgerc, Some(&ctx.section), &profile)
        .await
        .with_context(|| format!("store credentials in {}", ctx.edgerc.display()))?;

    println!("Wrote section [{}] to {}", ctx.section, ctx.edgerc.display());
    Ok(())
}

fn prompt_field(field: &str) -> Result<Zeroizing<String>> {
    let prompt = format!("Please input the {}", field);
    let value = if field == "client_secret" {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(false)
            .interact()
    } else {
        Input::<String>::new().with_prompt(prompt).interact_text()
    }
    .with_context(|| format!("read {} from prompt", field))?;
    Ok(Zeroizing::new(value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ctx(dir: &TempDir, non_interactive: bool) -> CliContext {
        CliContext {
            edgerc: dir.path().join("edgerc"),
            section: "section2".into(),
            debug: false,
            non_interactive,
        }
    }

    fn full_args() -> SetupArgs {
        SetupArgs {
            client_token: Some("ct".into()),
            client_secret: Some("cs".into()),
            access_token: Some("at".into()),
            host: Some("h.example".into()),
        }
    }

    #[test]
    fn test_provided_skips_absent() {
        let args = SetupArgs {
            host: None,
            ..full_args()
        };
        let p = args.provided();
        assert_eq!(p.len(), 3);
        assert_eq!(p.missing_fields(), vec!["host"]);
    }

    #[tokio::test]
    async fn test_run_with_all_fields_needs_no_prompt() {
        let dir = TempDir::new().unwrap();
        let ctx = ctx(&dir, true);
        run(&ctx, full_args()).await.unwrap();
        let stored = config_store::read_section(&ctx.edgerc, "section2")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.client_secret(), Some("cs"));
    }

    #[tokio::test]
    async fn test_run_non_interactive_missing_field() {
        let dir = TempDir::new().unwrap();
        let args = SetupArgs {
            access_token: None,
            ..full_args()
        };
        let err = run(&ctx(&dir, true), args).await.unwrap_err();
        assert!(err.to_string().contains("missing: access_token"));
    }
}
