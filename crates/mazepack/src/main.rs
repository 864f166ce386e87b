//! mazepack CLI - bundles the maze game into a single offline HTML file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use mazepack_bundle::Bundler;

mod config;

#[derive(Parser)]
#[command(name = "mazepack")]
#[command(about = "Bundle the maze game into a single offline HTML file")]
#[command(version)]
pub struct Cli {
    /// Output HTML file path [default: maze-game.html]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let tool_dir = config::tool_dir()?;
    let file_config = config::load_config(&tool_dir)?;
    let bundle_config = file_config.into_bundle_config(&tool_dir, cli.output)?;

    match Bundler::new(bundle_config).build() {
        Ok(result) => {
            tracing::info!("Generated {}", result.output.display());
            tracing::info!("Size: {:.2} KB", result.kib());
            if !result.skipped.is_empty() {
                tracing::warn!(
                    "{} of {} assets were missing from the bundle",
                    result.skipped.len(),
                    result.skipped.len() + result.loaded.len()
                );
            }
            tracing::debug!("Finished in {}ms", result.duration_ms);
        }
        Err(e) => {
            tracing::error!("{}", e);
        }
    }

    Ok(())
}
