//! Format context for per-element formatting.
//!
//! A slice renderer formats every element the same way the caller asked for
//! the whole slice. [`FormatContext`] is that request as a plain value:
//! the recognized flags, an optional width and precision, and the verb
//! naming which formatting trait was used.
//!
//! The context is captured once per render from the live
//! [`core::fmt::Formatter`] (see [`FormatContext::capture`]) and can be
//! reconstructed into a printf-style specification:
//!
//! ```
//! use slicefmt_context::{verb, Flags, FormatContext};
//!
//! let ctx = FormatContext::new(verb::LOWER_HEX)
//!     .with_flags(Flags::SHARP | Flags::ZERO)
//!     .with_width(6);
//! assert_eq!(ctx.spec(), "%#06x");
//! ```

use std::fmt;

bitflags::bitflags! {
    /// Flag characters recognized in a format specification.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// ` ` — leave a space for an elided sign.
        const SPACE = 1 << 0;
        /// `+` — always print a sign.
        const PLUS = 1 << 1;
        /// `-` — left-justify within the width.
        const MINUS = 1 << 2;
        /// `#` — alternate form.
        const SHARP = 1 << 3;
        /// `0` — pad with leading zeros.
        const ZERO = 1 << 4;
    }
}

/// Flags paired with their characters, in the order they are written.
const FLAG_ORDER: [(Flags, char); 5] = [
    (Flags::SPACE, ' '),
    (Flags::PLUS, '+'),
    (Flags::MINUS, '-'),
    (Flags::SHARP, '#'),
    (Flags::ZERO, '0'),
];

/// Verb characters for the standard formatting traits.
pub mod verb {
    /// [`core::fmt::Display`]. Display has no type character in Rust format
    /// strings, so it borrows the generic `v`.
    pub const DISPLAY: char = 'v';
    /// [`core::fmt::Debug`]
    pub const DEBUG: char = '?';
    /// [`core::fmt::LowerHex`]
    pub const LOWER_HEX: char = 'x';
    /// [`core::fmt::UpperHex`]
    pub const UPPER_HEX: char = 'X';
    /// [`core::fmt::Octal`]
    pub const OCTAL: char = 'o';
    /// [`core::fmt::Binary`]
    pub const BINARY: char = 'b';
    /// [`core::fmt::LowerExp`]
    pub const LOWER_EXP: char = 'e';
    /// [`core::fmt::UpperExp`]
    pub const UPPER_EXP: char = 'E';
}

/// The formatting request applied to each element of a rendered slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatContext {
    /// Flags present on the request.
    pub flags: Flags,
    /// Minimum field width.
    pub width: Option<usize>,
    /// Precision (digits for floats, max length for strings).
    pub precision: Option<usize>,
    /// The verb character. May be any `char`, including multi-byte ones.
    pub verb: char,
}

impl FormatContext {
    /// A context with no flags, width, or precision.
    pub const fn new(verb: char) -> Self {
        Self {
            flags: Flags::empty(),
            width: None,
            precision: None,
            verb,
        }
    }

    /// Capture the request carried by a live formatter.
    ///
    /// `core::fmt` has no space flag, so [`Flags::SPACE`] is never set here.
    /// Left alignment is reported as [`Flags::MINUS`].
    pub fn capture(f: &fmt::Formatter<'_>, verb: char) -> Self {
        let mut flags = Flags::empty();
        flags.set(Flags::PLUS, f.sign_plus());
        flags.set(
            Flags::MINUS,
            f.sign_minus() || matches!(f.align(), Some(fmt::Alignment::Left)),
        );
        flags.set(Flags::SHARP, f.alternate());
        flags.set(Flags::ZERO, f.sign_aware_zero_pad());

        Self {
            flags,
            width: f.width(),
            precision: f.precision(),
            verb,
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Reconstruct the printf-style specification, e.g. `%+08.3v`.
    pub fn spec(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FormatContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        f.write_char('%')?;
        for (flag, c) in FLAG_ORDER {
            if self.flags.contains(flag) {
                f.write_char(c)?;
            }
        }
        if let Some(width) = self.width {
            write!(f, "{width}")?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{precision}")?;
        }
        f.write_char(self.verb)
    }
}
