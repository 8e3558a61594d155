//! Write a default configuration file.

use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    tokio::fs::write(config_path, DEFAULT_CONFIG)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'svg2jsx batch <dir>' to convert a folder of icons.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# svg2jsx configuration

[output]
# "typed" writes .tsx with a props interface, "untyped" writes .jsx
format = "typed"

# Output directory for `svg2jsx batch`
dir = "icons"

# Write an index module re-exporting every component
index = true

[props]
# Props the generated components accept
width = true
height = true
className = true
color = true

[optimize]
# Strip comments, metadata and editor data before converting
enabled = true
"#;
