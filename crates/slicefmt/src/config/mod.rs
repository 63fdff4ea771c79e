//! Slice formatting configuration.
//!
//! A [`Config`] says what to write around, between, and instead of the
//! elements of a slice. It never says how to write an element; that comes
//! from the caller's own formatting request.
//!
//! Every string field is optional in effect: an empty string is never
//! written, so it is the same as not configuring the field.

mod lint;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use lint::ConfigWarning;

/// Writes the separator for gap `n` of `last`, both zero-based.
///
/// Gap `n` sits between shown elements `n` and `n + 1`. `last` is the index
/// of the final gap among the shown elements, so `n == last` picks out the
/// final separator no matter how many elements were cut off.
pub type SepFn = Box<dyn Fn(&mut dyn fmt::Write, usize, usize) -> fmt::Result + Send + Sync>;

/// Writes the summary for `n > 0` elements left out after the cutoff.
pub type SummaryFn = Box<dyn Fn(&mut dyn fmt::Write, usize) -> fmt::Result + Send + Sync>;

/// Describes how to format a slice.
///
/// ```
/// use slicefmt::Config;
///
/// let cfg = Config::new().empty("[]").prefix("[").postfix("]").sep(" ");
/// assert_eq!(cfg.fmt(&[1, 2, 3]).to_string(), "[1 2 3]");
/// assert_eq!(cfg.fmt(&Vec::<u8>::new()).to_string(), "[]");
/// ```
#[derive(Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Written before the first element of a non-empty slice.
    pub prefix: String,
    /// Written after the last element when nothing was cut off.
    pub postfix: String,

    /// Written for an absent slice.
    pub nil: String,
    /// Written for a present slice of length zero.
    pub len0: String,
    /// Written for both of the above when non-empty.
    pub empty: String,

    /// Written between elements unless `sep_fn` is set.
    pub sep: String,
    /// Called between elements instead of writing `sep`.
    #[serde(skip)]
    pub sep_fn: Option<SepFn>,

    /// If > 0, at most this many elements are written and the summary
    /// replaces the postfix when more remain. No separator is written
    /// between the last element and the summary.
    pub cutoff: usize,
    /// Written after the cutoff unless `summary_fn` is set.
    pub summary: String,
    /// Called after the cutoff with the number of elements left out.
    #[serde(skip)]
    pub summary_fn: Option<SummaryFn>,
}

impl Config {
    /// An empty config: no framing, no separators, no cutoff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the string and cutoff fields from a JSON object.
    ///
    /// Callbacks cannot be expressed in JSON; set them afterwards.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    #[must_use]
    pub fn nil(mut self, nil: impl Into<String>) -> Self {
        self.nil = nil.into();
        self
    }

    #[must_use]
    pub fn len0(mut self, len0: impl Into<String>) -> Self {
        self.len0 = len0.into();
        self
    }

    #[must_use]
    pub fn empty(mut self, empty: impl Into<String>) -> Self {
        self.empty = empty.into();
        self
    }

    #[must_use]
    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    #[must_use]
    pub fn sep_fn<F>(mut self, sep_fn: F) -> Self
    where
        F: Fn(&mut dyn fmt::Write, usize, usize) -> fmt::Result + Send + Sync + 'static,
    {
        self.sep_fn = Some(Box::new(sep_fn));
        self
    }

    #[must_use]
    pub fn cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    #[must_use]
    pub fn summary_fn<F>(mut self, summary_fn: F) -> Self
    where
        F: Fn(&mut dyn fmt::Write, usize) -> fmt::Result + Send + Sync + 'static,
    {
        self.summary_fn = Some(Box::new(summary_fn));
        self
    }

    /// Split `len` into the number of elements shown and the number left out.
    pub(crate) fn lengths(&self, len: usize) -> (usize, usize) {
        if self.cutoff != 0 && len > self.cutoff {
            (self.cutoff, len - self.cutoff)
        } else {
            (len, 0)
        }
    }

    /// The placeholder for a slice with nothing to show.
    pub(crate) fn empty_placeholder(&self, is_nil: bool) -> &str {
        if !self.empty.is_empty() {
            &self.empty
        } else if is_nil {
            &self.nil
        } else {
            &self.len0
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("nil", &self.nil)
            .field("len0", &self.len0)
            .field("empty", &self.empty)
            .field("sep", &self.sep)
            .field("sep_fn", &self.sep_fn.as_ref().map(|_| ".."))
            .field("cutoff", &self.cutoff)
            .field("summary", &self.summary)
            .field("summary_fn", &self.summary_fn.as_ref().map(|_| ".."))
            .finish()
    }
}
