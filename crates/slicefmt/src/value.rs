//! Untyped input.
//!
//! Typed callers get the sequence check from the [`Sequence`] bound.
//! A `serde_json::Value` can be anything, so its shape is checked when it
//! is formatted:
//!
//! | Value | Treated as |
//! |---|---|
//! | `null` | absent slice |
//! | array | slice |
//! | anything else, objects included | not a sequence |
//!
//! [`Sequence`]: crate::Sequence

use std::fmt;

use serde_json::Value;
use slicefmt_context::{verb, FormatContext};

use crate::config::Config;
use crate::error::into_fmt_result;
use crate::render::render;
use crate::sequence::Input;

/// A config bound to one untyped value.
///
/// ```
/// use serde_json::json;
/// use slicefmt::Config;
///
/// let cfg = Config::new().sep(", ");
/// assert_eq!(format!("{:?}", cfg.fmt_value(&json!(["a", 1]))), r#""a", 1"#);
/// assert_eq!(
///     cfg.fmt_value(&json!(7)).to_string(),
///     "%!(slice formatter only formats slices)"
/// );
/// ```
pub struct ValueFmt<'a> {
    config: Option<&'a Config>,
    value: &'a Value,
}

impl<'a> ValueFmt<'a> {
    pub fn new(config: Option<&'a Config>, value: &'a Value) -> Self {
        Self { config, value }
    }

    fn input(&self) -> Input<'a, Vec<Value>> {
        match self.value {
            Value::Null => Input::Nil,
            Value::Array(items) => Input::Present(items),
            Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Object(_) => {
                Input::NotASequence
            }
        }
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, debug: bool) -> fmt::Result {
        let verb = if debug { verb::DEBUG } else { verb::DISPLAY };
        tracing::trace!(spec = %FormatContext::capture(f, verb), "formatting value");
        into_fmt_result(render(self.config, self.input(), f, |f, item| {
            write_element(f, item, debug)
        }))
    }
}

/// Format one element with the caller's flags.
///
/// Scalars go through their native formatting so width, precision, and
/// sign apply. Strings are quoted only for `Debug`. Nested arrays and
/// objects are written as JSON, pretty-printed under `#`.
fn write_element(f: &mut fmt::Formatter<'_>, value: &Value, debug: bool) -> fmt::Result {
    match value {
        Value::Null => f.pad("null"),
        Value::Bool(b) => fmt::Display::fmt(b, f),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                fmt::Display::fmt(&i, f)
            } else if let Some(u) = n.as_u64() {
                fmt::Display::fmt(&u, f)
            } else if let Some(x) = n.as_f64() {
                fmt::Display::fmt(&x, f)
            } else {
                fmt::Display::fmt(n, f)
            }
        }
        Value::String(s) if debug => fmt::Debug::fmt(s.as_str(), f),
        Value::String(s) => fmt::Display::fmt(s.as_str(), f),
        Value::Array(_) | Value::Object(_) => fmt::Display::fmt(value, f),
    }
}

impl fmt::Display for ValueFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, false)
    }
}

impl fmt::Debug for ValueFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, true)
    }
}

impl Config {
    /// Bind this config to an untyped value.
    pub fn fmt_value<'a>(&'a self, value: &'a Value) -> ValueFmt<'a> {
        ValueFmt::new(Some(self), value)
    }
}
