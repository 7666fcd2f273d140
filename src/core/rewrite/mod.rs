//! Reference rewriting: move static `Plugin.Configuration` accesses onto the
//! `_plugin` instance field.
//!
//! Matching is textual and word-boundary anchored. `Plugin.PluginInterface`
//! is a genuine static member and is never touched.

mod file;
mod rule;

pub use file::{rewrite_file, FixReport, DEFAULT_TARGET};
pub use rule::{rewrite_text, RewriteOutcome, SubstitutionRule};
