//! Inspect command - Show one template's declaration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use stamp_templates::TemplateLoader;

#[derive(Args)]
pub struct InspectArgs {
    /// Template directory
    dir: PathBuf,

    /// Identifier to report (defaults to the directory base name)
    #[arg(short, long)]
    id: Option<String>,
}

pub async fn execute(args: InspectArgs) -> Result<()> {
    let id = match args.id {
        Some(id) => id,
        None => args
            .dir
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .context("Cannot derive an identifier from the directory name, pass --id")?,
    };

    info!("Inspecting template {:?}", args.dir);

    let loader = TemplateLoader::new();
    let descriptor = loader
        .load(&args.dir, id)
        .context("Failed to load template")?;

    println!("Template:   {}", descriptor.id());
    println!("Asset root: {}", descriptor.asset_root().display());
    let aliases = descriptor.aliases();
    if !aliases.is_empty() {
        println!("Aliases:    {}", aliases.join(", "));
    }
    if descriptor.is_hidden() {
        println!("Hidden:     yes");
    }
    println!();
    println!("{}", serde_json::to_string_pretty(descriptor.schema())?);

    Ok(())
}
