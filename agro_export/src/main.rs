//! # agro-export
//!
//! Renders the landing page to a static `index.html`, optionally alongside
//! a `catalog.json` dump of the page content.
//!
//! ```bash
//! agro-export --out-dir dist --catalog-json
//! ```

use std::path::PathBuf;

use agro_page::export::{ExportOptions, export_site};
use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use tracing::info;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "agro-export")]
#[command(about = "Render the precision-agriculture landing page to static files")]
#[command(version)]
struct Args {
    /// Output directory (created if missing)
    #[arg(short, long, default_value = "dist")]
    out_dir: PathBuf,

    /// Also write catalog.json with the page content
    #[arg(long, default_value = "false")]
    catalog_json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        default_value = "info",
        value_parser = PossibleValuesParser::new(LOG_LEVELS)
    )]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout lists the written files
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("Starting agro-export v{}", env!("CARGO_PKG_VERSION"));

    let options = ExportOptions {
        out_dir: args.out_dir,
        catalog_json: args.catalog_json,
    };
    let summary = export_site(&options)
        .with_context(|| format!("failed to export page to {}", options.out_dir.display()))?;

    for file in &summary.files {
        println!("{} ({} bytes)", file.path.display(), file.bytes);
    }

    Ok(())
}
