use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::io;

use super::rule::SubstitutionRule;

/// File rewritten when no path is given, relative to the plugin project root.
pub const DEFAULT_TARGET: &str = "Systems/OverlayManager.cs";

/// What a single file rewrite did.
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    pub path: String,
    pub rule: SubstitutionRule,
    pub replacements: usize,
    pub preserved: usize,
    pub changed: bool,
}

/// Read `path`, rewrite every `Plugin.Configuration` reference, and write the
/// text back over the same file.
///
/// The write happens even when nothing matched. There is no backup and no
/// temp-file rename; a failure mid-write can leave the file truncated.
pub fn rewrite_file(path: &Path) -> Result<FixReport> {
    if path.is_dir() {
        return Err(Error::validation_invalid_argument(
            "path",
            format!("{} is a directory, expected a source file", path.display()),
        ));
    }

    let rule = SubstitutionRule::plugin_configuration();
    let content = io::read_file(path, "read source")?;
    let outcome = rule.apply(&content);

    io::write_file(path, &outcome.text, "write source")?;

    log_status!(
        "rewrite",
        "{}: {} reference(s) rewritten, {} Plugin.PluginInterface left as-is",
        path.display(),
        outcome.replacements,
        outcome.preserved
    );

    Ok(FixReport {
        path: path.display().to_string(),
        rule,
        replacements: outcome.replacements,
        preserved: outcome.preserved,
        changed: outcome.changed(),
    })
}
