//! CLI command definitions.
//!
//! This module defines the command structure for the MemeStamp CLI.
//! The binary is an operator tool for the template storage layout; the
//! build pipeline itself is driven by services embedding `stamp_core`.

use clap::{Parser, Subcommand};

pub mod inspect;
pub mod scan;

/// MemeStamp - template-driven image and animation composition
#[derive(Parser)]
#[command(name = "memestamp")]
#[command(version, about = "MemeStamp - template-driven image and animation composition")]
#[command(long_about = r#"
MemeStamp composes images and animations from named templates: a template
directory carries a data.json declaration plus the static assets its
renderer needs, and requests bind avatars and text against it.

COMMANDS:
  scan     → Load every template under a root directory and report results
  inspect  → Show one template's identity, aliases, and declaration

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a template root and verify every template loads
    Scan(scan::ScanArgs),

    /// Inspect a single template directory
    Inspect(inspect::InspectArgs),
}
