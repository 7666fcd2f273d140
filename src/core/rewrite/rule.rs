//! The substitution rule and the pure text transform.

use regex::{NoExpand, Regex};
use serde::Serialize;
use std::sync::OnceLock;

const CONFIGURATION_PATTERN: &str = r"\bPlugin\.Configuration\b";
const CONFIGURATION_REPLACEMENT: &str = "_plugin.Configuration";

/// Static member reference that shares the `Plugin.` prefix but must stay as-is.
const INTERFACE_PATTERN: &str = r"\bPlugin\.PluginInterface\b";

/// The fixed (pattern, replacement) pair applied to a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubstitutionRule {
    pattern: &'static str,
    replacement: &'static str,
}

impl SubstitutionRule {
    /// `Plugin.Configuration` → `_plugin.Configuration`, whole word only.
    pub const fn plugin_configuration() -> Self {
        SubstitutionRule {
            pattern: CONFIGURATION_PATTERN,
            replacement: CONFIGURATION_REPLACEMENT,
        }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Compiled pattern, built once per process.
    pub fn regex(&self) -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(CONFIGURATION_PATTERN).expect("configuration pattern is valid"))
    }

    /// Replace every non-overlapping match, left to right.
    pub fn apply(&self, text: &str) -> RewriteOutcome {
        let re = self.regex();
        let replacements = re.find_iter(text).count();
        let preserved = interface_regex().find_iter(text).count();

        // The replacement is literal text; `$` must never expand to a group.
        let rewritten = re.replace_all(text, NoExpand(self.replacement));

        RewriteOutcome {
            text: rewritten.into_owned(),
            replacements,
            preserved,
        }
    }
}

fn interface_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(INTERFACE_PATTERN).expect("interface pattern is valid"))
}

/// Rewritten text plus what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub text: String,
    /// Occurrences of `Plugin.Configuration` that were rewritten.
    pub replacements: usize,
    /// Occurrences of `Plugin.PluginInterface` left untouched.
    pub preserved: usize,
}

impl RewriteOutcome {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Apply the `Plugin.Configuration` rule to `text`.
pub fn rewrite_text(text: &str) -> RewriteOutcome {
    SubstitutionRule::plugin_configuration().apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_configuration_and_keeps_plugin_interface() {
        let outcome =
            rewrite_text("x = Plugin.Configuration.Value; y = Plugin.PluginInterface.Get();");
        assert_eq!(
            outcome.text,
            "x = _plugin.Configuration.Value; y = Plugin.PluginInterface.Get();"
        );
        assert_eq!(outcome.replacements, 1);
        assert_eq!(outcome.preserved, 1);
        assert!(outcome.changed());
    }

    #[test]
    fn prefixed_owner_is_not_a_match() {
        let outcome = rewrite_text("MyPlugin.Configuration");
        assert_eq!(outcome.text, "MyPlugin.Configuration");
        assert_eq!(outcome.replacements, 0);
    }

    #[test]
    fn longer_member_name_is_not_a_match() {
        let input = "Plugin.ConfigurationManager.Reload();";
        assert_eq!(rewrite_text(input).text, input);
    }

    #[test]
    fn underscore_prefixed_owner_is_not_a_match() {
        let input = "_Plugin.Configuration.Save();";
        assert_eq!(rewrite_text(input).text, input);
    }

    #[test]
    fn empty_text_stays_empty() {
        let outcome = rewrite_text("");
        assert_eq!(outcome.text, "");
        assert_eq!(outcome.replacements, 0);
        assert!(!outcome.changed());
    }

    #[test]
    fn unrelated_text_is_returned_unchanged() {
        let input = "namespace WahBox.Systems;\r\n\r\n// Überblick: kein Treffer hier\r\npublic class OverlayManager { }\r\n";
        let outcome = rewrite_text(input);
        assert_eq!(outcome.text.as_bytes(), input.as_bytes());
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let input = "if (Plugin.Configuration.OverlaySettings.ShowText)\n    Plugin.Configuration.Save();\n";
        let once = rewrite_text(input);
        let twice = rewrite_text(&once.text);
        assert_eq!(once.replacements, 2);
        assert_eq!(twice.replacements, 0);
        assert_eq!(twice.text, once.text);
    }

    #[test]
    fn rewrites_inside_comments_and_strings_too() {
        let input = "// uses Plugin.Configuration\nLog(\"Plugin.Configuration\");\n";
        let outcome = rewrite_text(input);
        assert_eq!(
            outcome.text,
            "// uses _plugin.Configuration\nLog(\"_plugin.Configuration\");\n"
        );
        assert_eq!(outcome.replacements, 2);
    }

    #[test]
    fn adjacent_occurrences_are_all_rewritten() {
        let outcome = rewrite_text("(Plugin.Configuration,Plugin.Configuration)");
        assert_eq!(outcome.text, "(_plugin.Configuration,_plugin.Configuration)");
        assert_eq!(outcome.replacements, 2);
    }

    #[test]
    fn rule_exposes_fixed_pattern_and_replacement() {
        let rule = SubstitutionRule::plugin_configuration();
        assert_eq!(rule.pattern(), r"\bPlugin\.Configuration\b");
        assert_eq!(rule.replacement(), "_plugin.Configuration");
        assert!(rule.regex().is_match("Plugin.Configuration"));
        assert!(!rule.regex().is_match("Plugin.PluginInterface"));
    }
}
