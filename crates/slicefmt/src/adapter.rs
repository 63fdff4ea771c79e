//! `core::fmt` sessions.
//!
//! A session pairs one config with one slice and formats it through the
//! standard formatting traits. Whatever the caller put in the format string
//! (`{:02}`, `{:?}`, `{:#x}`, ...) is applied to each element, while the
//! config's own strings are written as-is.
//!
//! Sessions are meant to be used immediately:
//!
//! ```
//! use slicefmt::Config;
//!
//! let cfg = Config::new().sep(", ");
//! assert_eq!(format!("{:?}", cfg.fmt(&["a", "b"])), r#""a", "b""#);
//! assert_eq!(format!("{:#04x}", cfg.fmt(&[10, 255])), "0x0a, 0xff");
//! ```

use std::fmt;

use slicefmt_context::{verb, FormatContext};

use crate::config::Config;
use crate::error::into_fmt_result;
use crate::render::render;
use crate::sequence::{Input, Sequence};

/// A config bound to one slice, formatting elements with the caller's trait.
pub struct SliceFmt<'a, S: ?Sized> {
    config: Option<&'a Config>,
    input: Input<'a, S>,
}

impl<'a, S: Sequence + ?Sized> SliceFmt<'a, S> {
    /// Bind a possibly missing config to an input.
    ///
    /// A missing config formats as an inline diagnostic.
    pub fn new(config: Option<&'a Config>, input: Input<'a, S>) -> Self {
        Self { config, input }
    }

    fn write<E>(&self, f: &mut fmt::Formatter<'_>, verb: char, element: E) -> fmt::Result
    where
        E: FnMut(&mut fmt::Formatter<'_>, &S::Item) -> fmt::Result,
    {
        tracing::trace!(spec = %FormatContext::capture(f, verb), "formatting slice");
        into_fmt_result(render(self.config, self.input, f, element))
    }
}

macro_rules! impl_fmt_traits {
    ($($trait:ident => $verb:path),* $(,)?) => {
        $(
            impl<S> fmt::$trait for SliceFmt<'_, S>
            where
                S: Sequence + ?Sized,
                S::Item: fmt::$trait,
            {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.write(f, $verb, |f, item| fmt::$trait::fmt(item, f))
                }
            }
        )*
    };
}

impl_fmt_traits! {
    Display => verb::DISPLAY,
    Debug => verb::DEBUG,
    LowerHex => verb::LOWER_HEX,
    UpperHex => verb::UPPER_HEX,
    Octal => verb::OCTAL,
    Binary => verb::BINARY,
    LowerExp => verb::LOWER_EXP,
    UpperExp => verb::UPPER_EXP,
}

/// A config bound to one slice and a custom element formatter.
///
/// The element formatter receives the [`FormatContext`] captured from the
/// caller, once per render, along with the live formatter.
pub struct SliceFmtWith<'a, S: ?Sized, F> {
    inner: SliceFmt<'a, S>,
    element: F,
}

impl<S, F> fmt::Display for SliceFmtWith<'_, S, F>
where
    S: Sequence + ?Sized,
    F: Fn(&S::Item, &FormatContext, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = FormatContext::capture(f, verb::DISPLAY);
        tracing::trace!(spec = %ctx, "formatting slice with custom elements");
        let element = &self.element;
        into_fmt_result(render(
            self.inner.config,
            self.inner.input,
            f,
            |f, item| element(item, &ctx, f),
        ))
    }
}

impl Config {
    /// Bind this config to a slice.
    ///
    /// The result should be formatted right away, e.g.
    /// `println!("{:?}", cfg.fmt(&items))`.
    pub fn fmt<'a, S: Sequence + ?Sized>(&'a self, seq: &'a S) -> SliceFmt<'a, S> {
        SliceFmt::new(Some(self), Input::Present(seq))
    }

    /// Bind this config to a slice that may be absent.
    pub fn fmt_opt<'a, S: Sequence + ?Sized>(&'a self, seq: Option<&'a S>) -> SliceFmt<'a, S> {
        SliceFmt::new(Some(self), Input::from(seq))
    }

    /// Bind this config to a slice and a custom element formatter.
    ///
    /// ```
    /// use slicefmt::Config;
    ///
    /// let cfg = Config::new().sep(" ");
    /// let shown = cfg.fmt_with(&[1, 22], |n, ctx, f| {
    ///     write!(f, "{n:>w$}", w = ctx.width.unwrap_or(0))
    /// });
    /// assert_eq!(format!("{shown:3}"), "  1  22");
    /// ```
    pub fn fmt_with<'a, S, F>(&'a self, seq: &'a S, element: F) -> SliceFmtWith<'a, S, F>
    where
        S: Sequence + ?Sized,
        F: Fn(&S::Item, &FormatContext, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        SliceFmtWith {
            inner: self.fmt(seq),
            element,
        }
    }
}
