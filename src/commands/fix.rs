use clap::Args;
use std::path::PathBuf;

use reffix::rewrite::{self, FixReport, DEFAULT_TARGET};

/// Printed on stdout after a successful rewrite.
pub const CONFIRMATION: &str = "Fixed all Plugin.Configuration references to _plugin.Configuration";

#[derive(Args, Debug)]
pub struct FixArgs {
    /// Source file to rewrite in place
    #[arg(default_value = DEFAULT_TARGET)]
    pub path: PathBuf,

    /// Print a JSON report instead of the confirmation line
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &FixArgs) -> reffix::Result<FixReport> {
    rewrite::rewrite_file(&args.path)
}
