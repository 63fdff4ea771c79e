//! Settings that can never take effect.

use std::fmt;

use super::Config;

/// A config field that will be ignored at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigWarning {
    /// `sep` is set but `sep_fn` is called instead.
    SeparatorShadowed,
    /// `summary` is set but `summary_fn` is called instead.
    SummaryShadowed,
    /// A summary is configured but `cutoff` is 0, so nothing is ever cut off.
    SummaryWithoutCutoff,
    /// `nil` or `len0` is set but `empty` is written instead.
    PlaceholdersShadowed,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigWarning::SeparatorShadowed => "`sep` is ignored because `sep_fn` is set",
            ConfigWarning::SummaryShadowed => "`summary` is ignored because `summary_fn` is set",
            ConfigWarning::SummaryWithoutCutoff => "summary is never written because `cutoff` is 0",
            ConfigWarning::PlaceholdersShadowed => {
                "`nil` and `len0` are ignored because `empty` is set"
            }
        };
        f.write_str(msg)
    }
}

impl Config {
    /// Report fields that are set but will never be written.
    ///
    /// Linting has no effect on rendering.
    pub fn lint(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.sep_fn.is_some() && !self.sep.is_empty() {
            warnings.push(ConfigWarning::SeparatorShadowed);
        }
        if self.summary_fn.is_some() && !self.summary.is_empty() {
            warnings.push(ConfigWarning::SummaryShadowed);
        }
        if self.cutoff == 0 && (self.summary_fn.is_some() || !self.summary.is_empty()) {
            warnings.push(ConfigWarning::SummaryWithoutCutoff);
        }
        if !self.empty.is_empty() && !(self.nil.is_empty() && self.len0.is_empty()) {
            warnings.push(ConfigWarning::PlaceholdersShadowed);
        }

        for warning in &warnings {
            tracing::debug!(%warning, "slice config lint");
        }
        warnings
    }
}
