//! Rendering of the status line. Nothing in here performs I/O.

pub mod changes;
pub mod formatters;
pub mod palette;
pub mod policy;
pub mod progress;
pub mod text;

pub use formatters::{Format, Formatter, FormatterOptions, StyleKind};
pub use palette::{Palette, Tone};
