//! Scan command - Load every template under a root directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use stamp_templates::TemplateLoader;

#[derive(Args)]
pub struct ScanArgs {
    /// Template root directory
    #[arg(default_value = "./data")]
    root: PathBuf,

    /// Include templates declared as hidden
    #[arg(long)]
    all: bool,
}

pub async fn execute(args: ScanArgs) -> Result<()> {
    info!("Scanning template root {:?}", args.root);

    let loader = TemplateLoader::new();
    let candidates = loader
        .discover(&args.root)
        .context("Failed to scan template root")?;

    if candidates.is_empty() {
        println!("No templates found under {:?}", args.root);
        return Ok(());
    }

    let mut loaded = 0;
    let mut hidden = 0;
    let mut failed = 0;

    for (id, dir) in &candidates {
        match loader.load(dir, id.clone()) {
            Ok(descriptor) => {
                if descriptor.is_hidden() && !args.all {
                    hidden += 1;
                    continue;
                }
                loaded += 1;
                let aliases = descriptor.aliases();
                if aliases.is_empty() {
                    println!("  {id}");
                } else {
                    println!("  {id} (alias: {})", aliases.join(", "));
                }
            }
            Err(e) => {
                failed += 1;
                println!("  {id} FAILED");
                println!("    - {e}");
            }
        }
    }

    println!();
    println!("Results: {loaded} loaded, {hidden} hidden, {failed} failed");

    if failed > 0 {
        std::process::exit(crate::ExitCodes::TEMPLATE_ERROR as i32);
    }

    Ok(())
}
