//! Slice Formatter
//!
//! Formats slices of any element type with configurable framing,
//! separators, empty placeholders, and truncation. The [`Config`] describes
//! how to format the slice but not its elements: each element is formatted
//! with whatever the caller asked for the whole slice.
//!
//! ```
//! use slicefmt::Config;
//!
//! let cfg = Config::new().sep(" ~ ").nil("<nil>").len0("<none>");
//! assert_eq!(format!("{:02}", cfg.fmt(&[1, 2, 3])), "01 ~ 02 ~ 03");
//! assert_eq!(cfg.fmt_opt::<[i32]>(None).to_string(), "<nil>");
//! ```
//!
//! # Modules
//!
//! - [`config`]: What to write around, between, and instead of elements
//! - [`sequence`]: The [`Sequence`] capability and the [`Input`] tag
//! - [`render`](mod@render): The single-pass rendering algorithm
//! - [`adapter`]: `core::fmt` sessions binding a config to one slice
//! - [`value`]: Rendering untyped `serde_json::Value` input
//! - [`error`]: [`RenderError`] and the inline diagnostics

pub mod adapter;
pub mod config;
pub mod error;
pub mod render;
pub mod sequence;
pub mod value;

pub use adapter::{SliceFmt, SliceFmtWith};
pub use config::{Config, ConfigWarning, SepFn, SummaryFn};
pub use error::{RenderError, CONFIG_MISSING, NOT_A_SEQUENCE};
pub use render::render;
pub use sequence::{Input, Sequence};
pub use slicefmt_context::{verb, Flags, FormatContext};
pub use value::ValueFmt;
