use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::BoardConfig;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub const CONFIG_FILE: &str = "taskboard.toml";

/// Find `taskboard.toml` by walking up from the given directory.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration, starting the file search at `start`. A missing
/// file is not an error: defaults apply.
pub fn load_config(start: &Path) -> Result<BoardConfig, ConfigError> {
    let Some(path) = discover_config(start) else {
        return Ok(BoardConfig::default());
    };
    tracing::debug!(path = %path.display(), "loading config");
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse { path, source: e })
}

/// Resolve the backend base URL. Precedence: `--url` flag, then the
/// TASKBOARD_URL environment value, then the config file.
pub fn resolve_base_url(flag: Option<&str>, env: Option<String>, config: &BoardConfig) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    if let Some(url) = env
        && !url.is_empty()
    {
        return url;
    }
    config.server.base_url.clone()
}
