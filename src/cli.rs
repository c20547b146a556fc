//! Command-line entry point, a stand-in for the HTTP surface that `spec.md`
//! §1 explicitly excludes from the core.

use std::path::PathBuf;

use clap::Parser;

/// Generate ranked weekly schedules from a JSON catalog fixture and request.
#[derive(Debug, Parser)]
#[command(name = "classgen", version, about)]
pub struct Args {
    /// Path to a JSON catalog fixture: `{"term": "...", "sections": [...]}`.
    #[arg(long)]
    pub catalog: PathBuf,

    /// Path to a JSON request matching spec §6.2's recognized fields.
    #[arg(long)]
    pub request: PathBuf,

    /// Maximum number of schedules to return. Defaults to the configured
    /// `default_num_schedules` when unset.
    #[arg(long)]
    pub num_schedules: Option<usize>,
}
