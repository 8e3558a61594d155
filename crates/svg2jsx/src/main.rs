//! svg2jsx CLI - turn SVG files into React components.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use svg2jsx_core::{OutputFormat, PropFlags};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::{load_config, Overrides, Settings};

#[derive(Parser)]
#[command(name = "svg2jsx")]
#[command(about = "Convert SVG markup into React components")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to svg2jsx.toml config file
    #[arg(short, long, default_value = "svg2jsx.toml", global = true)]
    config: PathBuf,

    /// Output dialect: typed (tsx) or untyped (jsx)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Props to expose, comma separated: width,height,className,color (or all/none)
    #[arg(short, long, global = true)]
    props: Option<PropFlags>,

    /// Skip markup cleanup before conversion
    #[arg(long, global = true)]
    no_optimize: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one SVG file (or stdin) into a component
    Convert {
        /// SVG file path, file:// URI, or "-" for stdin
        input: String,

        /// Component name (defaults to the file name in PascalCase)
        #[arg(short, long)]
        name: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Parse the generated source and fail if it is not valid
        #[arg(long)]
        check: bool,

        /// Print a JSON object instead of bare source
        #[arg(long)]
        json: bool,
    },

    /// Convert every SVG file under a directory
    Batch {
        /// Directory to scan for .svg files
        dir: PathBuf,

        /// Output directory (defaults to config or "icons")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not write an index module
        #[arg(long)]
        no_index: bool,

        /// Parse each generated component and count invalid ones as failures
        #[arg(long)]
        check: bool,
    },

    /// Write a default svg2jsx.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for generated code
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let overrides = Overrides {
        format: cli.format,
        props: cli.props,
        no_optimize: cli.no_optimize,
    };

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Convert {
            input,
            name,
            output,
            check,
            json,
        } => {
            let settings = Settings::resolve(load_config(&cli.config)?, overrides);
            let args = commands::convert::ConvertArgs {
                input,
                name,
                output,
                check,
                json,
            };
            commands::convert::run(args, &settings).await?;
        }
        Commands::Batch {
            dir,
            output,
            no_index,
            check,
        } => {
            let settings = Settings::resolve(load_config(&cli.config)?, overrides);
            let output = output.unwrap_or_else(|| settings.output_dir.clone());
            let index = settings.index && !no_index;
            commands::batch::run(dir, output, index, check, &settings).await?;
        }
    }

    Ok(())
}
