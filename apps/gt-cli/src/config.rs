// config.rs — Base URL resolution for the goal store.
//
// Precedence: --base-url flag, then GOALS_BASE_URL env var, then the
// base_url key in a goals.toml config file. An explicit --config path must
// exist; otherwise ./goals.toml is used when present.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use url::Url;

/// The default config file, looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "goals.toml";

/// Contents of goals.toml.
#[derive(Debug, Deserialize)]
struct FileConfig {
    /// Base URL of the remote goal store.
    base_url: Option<String>,
}

/// Resolve the store base URL from flag, environment, and config file,
/// in that order. `env` is the raw GOALS_BASE_URL value, passed in
/// explicitly so tests don't have to mutate the process environment.
pub fn resolve_base_url(
    flag: Option<Url>,
    env: Option<String>,
    config_path: Option<&Path>,
) -> Result<Url> {
    if let Some(url) = flag {
        return Ok(url);
    }

    if let Some(raw) = env {
        return Url::parse(&raw).context("invalid GOALS_BASE_URL");
    }

    let path = match config_path {
        Some(p) => {
            if !p.exists() {
                bail!("config file not found: {}", p.display());
            }
            Some(p.to_path_buf())
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            default.exists().then(|| default.to_path_buf())
        }
    };

    if let Some(path) = path {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let file: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("could not parse {}", path.display()))?;
        if let Some(raw_url) = file.base_url {
            return Url::parse(&raw_url)
                .with_context(|| format!("invalid base_url in {}", path.display()));
        }
        bail!("no base_url in {}", path.display());
    }

    bail!(
        "no goal store configured — pass --base-url, set GOALS_BASE_URL, \
         or put base_url in goals.toml"
    );
}
