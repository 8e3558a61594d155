//! Single file conversion command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use svg2jsx_core::{check_syntax, to_component_name};
use svg2jsx_svg::{Conversion, SvgSource};
use tokio::io::AsyncReadExt;

use crate::config::Settings;

/// Arguments for `svg2jsx convert`.
#[derive(Debug)]
pub struct ConvertArgs {
    pub input: String,
    pub name: Option<String>,
    pub output: Option<PathBuf>,
    pub check: bool,
    pub json: bool,
}

/// Run the convert command.
pub async fn run(args: ConvertArgs, settings: &Settings) -> Result<()> {
    let source = if args.input == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read SVG from stdin")?;
        SvgSource::Inline(text)
    } else {
        SvgSource::External(args.input.clone())
    };

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| default_component_name(&args.input));
    let options = settings.options(name);

    let conversion = settings
        .pipeline()
        .run(&source, &options)
        .with_context(|| format!("Failed to convert {}", source.describe()))?;

    if !conversion.optimized {
        tracing::info!("Converted {} without optimization", source.describe());
    }

    if args.check {
        check_syntax(&conversion.source, conversion.format)
            .context("Generated component failed the syntax check")?;
    }

    let rendered = render(&conversion, args.json)?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} to {}", conversion.component_name, path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Component name derived from the input's file name.
fn default_component_name(input: &str) -> String {
    if input == "-" {
        return to_component_name("");
    }

    let path = Path::new(input.strip_prefix("file://").unwrap_or(input));
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    to_component_name(stem)
}

fn render(conversion: &Conversion, json: bool) -> Result<String> {
    if !json {
        return Ok(conversion.source.clone());
    }

    let value = serde_json::json!({
        "componentName": conversion.component_name,
        "format": conversion.format,
        "optimized": conversion.optimized,
        "source": conversion.source,
    });

    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}
