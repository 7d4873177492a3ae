//! ---
//! ffl_section: "05-external-interfaces"
//! ffl_subsection: "binary"
//! ffl_type: "source"
//! ffl_scope: "code"
//! ffl_description: "CLI printing service bus request documents."
//! ffl_version: "v0.0.0-prealpha"
//! ffl_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use ffl_common::{init_tracing, ClientConfig, LoadedClientConfig};
use tracing::debug;

mod request;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Build FFL service bus request documents",
    long_about = None
)]
struct Cli {
    /// Client configuration file (TOML).
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// User name; overrides the configuration file.
    #[arg(long, value_name = "NAME", global = true)]
    user: Option<String>,
    /// Reply queue; overrides the configuration file.
    #[arg(long, value_name = "ADDR", global = true)]
    reply_to: Option<String>,
    /// Print one JSON document per line instead of indented output.
    #[arg(long, global = true)]
    compact: bool,
    /// Build the request this many times with consecutive correlation IDs.
    #[arg(long, value_name = "N", default_value_t = 1, global = true)]
    repeat: u32,
    #[command(subcommand)]
    command: request::RequestCommand,
}

fn default_candidates() -> Vec<PathBuf> {
    vec![PathBuf::from("configs/ffl.toml")]
}

fn resolve_config(cli: &Cli) -> Result<(ClientConfig, Option<PathBuf>)> {
    // `--config` wins over `FFL_CONFIG` and must exist; the default location is optional.
    let loaded = match &cli.config {
        Some(path) => Some(LoadedClientConfig {
            config: ClientConfig::from_path(path)?,
            source: path.clone(),
        }),
        None => {
            let from_env = std::env::var(ClientConfig::ENV_CONFIG_PATH)
                .is_ok_and(|p| !p.trim().is_empty());
            let candidates = default_candidates();
            if from_env || candidates.iter().any(|p| p.exists()) {
                Some(ClientConfig::load_with_source(&candidates)?)
            } else {
                None
            }
        }
    };

    let (mut config, source) = match (loaded, &cli.user) {
        (Some(loaded), _) => (loaded.config, Some(loaded.source)),
        (None, Some(user)) => (ClientConfig::new(user.clone(), None), None),
        (None, None) => {
            return Err(anyhow!(
                "no user name configured; pass --user or provide a configuration file"
            ))
        }
    };
    if let Some(user) = &cli.user {
        config.user_name = user.clone();
    }
    if let Some(reply_to) = &cli.reply_to {
        config.reply_to = Some(reply_to.clone());
    }
    Ok((config, source))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = resolve_config(&cli)?;
    init_tracing("fflctl", &config.logging)?;
    match &source {
        Some(path) => debug!(source = %path.display(), "configuration loaded"),
        None => debug!("no configuration file; using command line identity"),
    }

    let catalog = config.catalog();
    for _ in 0..cli.repeat {
        let document = cli.command.build(&catalog)?;
        let rendered = if cli.compact {
            document.to_json()?
        } else {
            document.to_json_pretty()?
        };
        println!("{rendered}");
    }
    Ok(())
}
