//! Abstract color and style types for statusline highlights.
//!
//! These types describe colors and text modifiers without depending on any
//! terminal library. Hosts translate them into their own highlight
//! definitions at the rendering boundary.

use core::fmt;

/// An abstract color representation.
///
/// Mirrors the ANSI terminal color set plus true color and the 256-color
/// palette. `Reset` means "use the host default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
	/// Host default color.
	#[default]
	Reset,
	/// ANSI 0: Black
	Black,
	/// ANSI 1: Red
	Red,
	/// ANSI 2: Green
	Green,
	/// ANSI 3: Yellow
	Yellow,
	/// ANSI 4: Blue
	Blue,
	/// ANSI 5: Magenta
	Magenta,
	/// ANSI 6: Cyan
	Cyan,
	/// ANSI 7: White (often rendered as light gray)
	Gray,
	/// ANSI 8: Bright Black (dark gray)
	DarkGray,
	/// ANSI 9: Bright Red
	LightRed,
	/// ANSI 10: Bright Green
	LightGreen,
	/// ANSI 11: Bright Yellow
	LightYellow,
	/// ANSI 12: Bright Blue
	LightBlue,
	/// ANSI 13: Bright Magenta
	LightMagenta,
	/// ANSI 14: Bright Cyan
	LightCyan,
	/// ANSI 15: Bright White
	White,
	/// True color RGB.
	Rgb(u8, u8, u8),
	/// 256-color palette index.
	Indexed(u8),
}

impl Color {
	/// Creates a true color from a packed `0xRRGGBB` value.
	pub const fn from_u32(rgb: u32) -> Self {
		Self::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
	}
}

/// Formats colors in the same notation [`crate::parse_color`] accepts:
/// `#rrggbb` for true color, lowercase names for ANSI colors, `reset` for
/// the default and `@N` for palette indices.
impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Rgb(r, g, b) => return write!(f, "#{r:02x}{g:02x}{b:02x}"),
			Self::Indexed(i) => return write!(f, "@{i}"),
			Self::Reset => "reset",
			Self::Black => "black",
			Self::Red => "red",
			Self::Green => "green",
			Self::Yellow => "yellow",
			Self::Blue => "blue",
			Self::Magenta => "magenta",
			Self::Cyan => "cyan",
			Self::Gray => "gray",
			Self::DarkGray => "darkgray",
			Self::LightRed => "lightred",
			Self::LightGreen => "lightgreen",
			Self::LightYellow => "lightyellow",
			Self::LightBlue => "lightblue",
			Self::LightMagenta => "lightmagenta",
			Self::LightCyan => "lightcyan",
			Self::White => "white",
		};
		f.write_str(name)
	}
}

/// Text style modifiers (bold, italic, underline, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifier(u16);

impl Modifier {
	pub const NONE: Self = Self(0);
	pub const BOLD: Self = Self(1 << 0);
	pub const DIM: Self = Self(1 << 1);
	pub const ITALIC: Self = Self(1 << 2);
	pub const UNDERLINED: Self = Self(1 << 3);
	pub const UNDERCURL: Self = Self(1 << 4);
	pub const REVERSED: Self = Self(1 << 5);
	pub const STANDOUT: Self = Self(1 << 6);
	pub const CROSSED_OUT: Self = Self(1 << 7);

	/// Every modifier with its canonical name, in bit order.
	pub const NAMED: [(Self, &'static str); 8] = [
		(Self::BOLD, "bold"),
		(Self::DIM, "dim"),
		(Self::ITALIC, "italic"),
		(Self::UNDERLINED, "underline"),
		(Self::UNDERCURL, "undercurl"),
		(Self::REVERSED, "reverse"),
		(Self::STANDOUT, "standout"),
		(Self::CROSSED_OUT, "strikethrough"),
	];

	/// Creates an empty modifier set.
	#[inline]
	pub const fn empty() -> Self {
		Self(0)
	}

	/// Returns true if no modifiers are set.
	#[inline]
	pub const fn is_empty(self) -> bool {
		self.0 == 0
	}

	/// Returns true if the modifier contains the given modifier.
	#[inline]
	pub const fn contains(self, other: Self) -> bool {
		(self.0 & other.0) == other.0
	}

	/// Combines two modifiers.
	#[inline]
	pub const fn union(self, other: Self) -> Self {
		Self(self.0 | other.0)
	}

	/// Returns the raw bits.
	#[inline]
	pub const fn bits(self) -> u16 {
		self.0
	}

	/// Iterates over the names of the set modifiers in bit order.
	pub fn names(self) -> impl Iterator<Item = &'static str> {
		Self::NAMED
			.into_iter()
			.filter(move |(flag, _)| self.contains(*flag))
			.map(|(_, name)| name)
	}
}

impl std::ops::BitOr for Modifier {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self::Output {
		self.union(rhs)
	}
}

impl std::ops::BitOrAssign for Modifier {
	fn bitor_assign(&mut self, rhs: Self) {
		*self = self.union(rhs);
	}
}

/// `NONE` when empty, otherwise the set names joined with `,`.
impl fmt::Display for Modifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("NONE");
		}
		for (i, name) in self.names().enumerate() {
			if i > 0 {
				f.write_str(",")?;
			}
			f.write_str(name)?;
		}
		Ok(())
	}
}

/// A complete text style with optional foreground, background, and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
	pub fg: Option<Color>,
	pub bg: Option<Color>,
	pub modifiers: Modifier,
}

impl Style {
	/// Creates an empty style.
	pub const fn new() -> Self {
		Self {
			fg: None,
			bg: None,
			modifiers: Modifier::NONE,
		}
	}

	/// Sets the foreground color.
	pub const fn fg(mut self, color: Color) -> Self {
		self.fg = Some(color);
		self
	}

	/// Sets the background color.
	pub const fn bg(mut self, color: Color) -> Self {
		self.bg = Some(color);
		self
	}

	/// Adds modifiers.
	pub const fn add_modifier(mut self, modifier: Modifier) -> Self {
		self.modifiers = self.modifiers.union(modifier);
		self
	}
}

#[cfg(test)]
mod tests;
