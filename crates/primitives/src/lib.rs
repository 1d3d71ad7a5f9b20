//! Core types shared by the statusline engine: colors, styles and text width.

/// Abstract color and style types.
pub mod color;
/// Parsing colors from configuration strings.
pub mod parse;
/// Display width of rendered text.
pub mod width;

pub use color::{Color, Modifier, Style};
pub use parse::{ParseError, parse_color};
pub use width::display_width;
