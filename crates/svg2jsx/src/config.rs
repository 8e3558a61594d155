//! Configuration file (svg2jsx.toml) and command line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use svg2jsx_core::{ConversionOptions, OutputFormat, PropFlags};
use svg2jsx_svg::{NoopOptimizer, Pipeline};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub props: PropFlags,
    #[serde(default)]
    pub optimize: OptimizeConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Output directory for `batch`
    #[serde(default = "default_output_dir")]
    pub dir: String,
    /// Write an index module re-exporting every component
    #[serde(default = "default_true")]
    pub index: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            dir: default_output_dir(),
            index: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OptimizeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_output_dir() -> String {
    "icons".to_string()
}
fn default_true() -> bool {
    true
}

/// Load configuration from `path` if it exists.
/// Returns an error if the file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn parse_config(content: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}

/// Values given on the command line; `None` means "use the config".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub props: Option<PropFlags>,
    pub no_optimize: bool,
}

/// Effective settings after merging the config file and the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub format: OutputFormat,
    pub props: PropFlags,
    pub optimize: bool,
    pub output_dir: PathBuf,
    pub index: bool,
}

impl Settings {
    pub fn resolve(config: ConfigFile, overrides: Overrides) -> Self {
        Self {
            format: overrides.format.unwrap_or(config.output.format),
            props: overrides.props.unwrap_or(config.props),
            optimize: config.optimize.enabled && !overrides.no_optimize,
            output_dir: PathBuf::from(config.output.dir),
            index: config.output.index,
        }
    }

    /// Conversion options for one component.
    pub fn options(&self, component_name: impl Into<String>) -> ConversionOptions {
        ConversionOptions::new(component_name)
            .with_format(self.format)
            .with_props(self.props)
    }

    pub fn pipeline(&self) -> Pipeline {
        if self.optimize {
            Pipeline::default()
        } else {
            Pipeline::new(NoopOptimizer)
        }
    }
}
