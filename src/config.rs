use anyhow::{Context, Result, bail};
use colored::*;
use glob::Pattern;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".pegomock-remove.toml";

#[derive(Debug, Default, Deserialize)]
pub struct RemoveToolConfig {
    #[serde(default)]
    pub remove: RemoveSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoveSection {
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub non_interactive: bool,
    #[serde(default)]
    pub silent: bool,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl RemoveSection {
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.exclude
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("Invalid exclude pattern '{}'", p)))
            .collect()
    }
}

/// Loads `explicit` if given, otherwise `<dir>/.pegomock-remove.toml` when it exists.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<RemoveToolConfig> {
    let config_path: PathBuf = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("❌ Config file not found: {:?}", path);
            }
            path.to_path_buf()
        }
        None => {
            let default = dir.join(CONFIG_FILE);
            if !default.exists() {
                return Ok(RemoveToolConfig::default());
            }
            default
        }
    };

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: RemoveToolConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    eprintln!("{} Loaded config from: {}", "⚙".cyan(), config_path.display().to_string().bold());
    Ok(config)
}
