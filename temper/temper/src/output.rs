use crate::styling::{Container, StyleError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE: &str = ".temper.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TemperConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where a rendered stylesheet is written.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist/assets/css"),
            file: "style.css".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }
}

impl TemperConfig {
    /// Loads `.temper.toml` from the working directory.
    pub fn load() -> Result<Self, StyleError> {
        Self::from_file(CONFIG_FILE)
    }

    /// Loads `path`, falling back to the defaults when it does not exist.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        let config: TemperConfig = toml::from_str(&content)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Renders `sheet` and writes it to the configured path, returning that path.
pub fn write_stylesheet(sheet: &Container, config: &OutputConfig) -> anyhow::Result<PathBuf> {
    let css = sheet.try_render().context("Failed to render stylesheet")?;

    fs::create_dir_all(&config.dir)
        .with_context(|| format!("Failed to create {}", config.dir.display()))?;

    let path = config.path();
    fs::write(&path, css).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("wrote stylesheet to {}", path.display());
    Ok(path)
}
