//! Slice rendering.
//!
//! One linear pass per call:
//!
//! 1. Nothing to show: write one placeholder and stop.
//! 2. Write the prefix.
//! 3. For each shown element, write the separator for the preceding gap,
//!    then the element.
//! 4. Write the postfix, or the summary if elements were cut off.
//!
//! Empty strings are never written. The first failed write stops the pass.

use std::fmt;

use crate::config::Config;
use crate::error::{RenderError, CONFIG_MISSING, NOT_A_SEQUENCE};
use crate::sequence::{Input, Sequence};

/// Render `input` into `sink` as described by `config`.
///
/// `element` writes a single element. Diagnostics for a missing config or a
/// non-sequence input are written to `sink` and also returned as errors.
///
/// ```
/// use slicefmt::{render, Config, Input};
///
/// let cfg = Config::new().sep(", ").cutoff(2).summary(", ...");
/// let mut out = String::new();
/// render(Some(&cfg), Input::Present(&[1, 2, 3]), &mut out, |w, n| {
///     std::fmt::Write::write_fmt(w, format_args!("{n}"))
/// })?;
/// assert_eq!(out, "1, 2, ...");
/// # Ok::<(), slicefmt::RenderError>(())
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn render<S, W, E>(
    config: Option<&Config>,
    input: Input<'_, S>,
    sink: &mut W,
    mut element: E,
) -> Result<(), RenderError>
where
    S: Sequence + ?Sized,
    W: fmt::Write,
    E: FnMut(&mut W, &S::Item) -> fmt::Result,
{
    let Some(cfg) = config else {
        tracing::debug!("slice formatter given no config");
        sink.write_str(CONFIG_MISSING)?;
        return Err(RenderError::ConfigMissing);
    };

    let seq = match input {
        Input::Present(seq) => seq,
        Input::Nil => return write_empty(cfg, sink, true),
        Input::NotASequence => {
            tracing::debug!("slice formatter given a non-sequence");
            sink.write_str(NOT_A_SEQUENCE)?;
            return Err(RenderError::NotASequence);
        }
    };

    let len = seq.len();
    if len == 0 {
        return write_empty(cfg, sink, false);
    }

    let (shown, omitted) = cfg.lengths(len);
    tracing::trace!(len, shown, omitted, "rendering slice");

    write_str(sink, &cfg.prefix)?;
    for i in 0..shown {
        if i != 0 {
            write_sep(cfg, sink, i - 1, shown - 2)?;
        }
        element(sink, seq.at(i))?;
    }
    write_end(cfg, sink, omitted)?;
    Ok(())
}

#[inline]
fn write_str<W: fmt::Write>(sink: &mut W, s: &str) -> fmt::Result {
    if s.is_empty() {
        Ok(())
    } else {
        sink.write_str(s)
    }
}

fn write_empty<W: fmt::Write>(cfg: &Config, sink: &mut W, is_nil: bool) -> Result<(), RenderError> {
    write_str(sink, cfg.empty_placeholder(is_nil))?;
    Ok(())
}

fn write_sep<W: fmt::Write>(cfg: &Config, sink: &mut W, n: usize, last: usize) -> fmt::Result {
    match &cfg.sep_fn {
        Some(sep_fn) => sep_fn(sink, n, last),
        None => write_str(sink, &cfg.sep),
    }
}

fn write_end<W: fmt::Write>(cfg: &Config, sink: &mut W, omitted: usize) -> fmt::Result {
    if omitted == 0 {
        return write_str(sink, &cfg.postfix);
    }
    match &cfg.summary_fn {
        Some(summary_fn) => summary_fn(sink, omitted),
        None => write_str(sink, &cfg.summary),
    }
}

#[cfg(test)]
mod tests;
