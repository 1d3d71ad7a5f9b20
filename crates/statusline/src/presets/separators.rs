//! Default separator glyphs. Most are powerline symbols from the private
//! use area and need a patched font.

pub(super) const DEFAULT_SEPARATORS: &[(&str, &str)] = &[
	("vertical_bar", "\u{2503}"),
	("vertical_bar_thin", "\u{2502}"),
	("left", "\u{e0b3}"),
	("right", "\u{e0b1}"),
	("block", "\u{2588}"),
	("left_filled", "\u{e0b2}"),
	("right_filled", "\u{e0b0}"),
	("slant_left", "\u{e0ba}"),
	("slant_left_thin", "\u{e0bb}"),
	("slant_right", "\u{e0bc}"),
	("slant_right_thin", "\u{e0bd}"),
	("slant_left_2", "\u{e0be}"),
	("slant_left_2_thin", "\u{e0bf}"),
	("slant_right_2", "\u{e0b8}"),
	("slant_right_2_thin", "\u{e0b9}"),
	("left_rounded", "\u{e0b6}"),
	("left_rounded_thin", "\u{e0b7}"),
	("right_rounded", "\u{e0b4}"),
	("right_rounded_thin", "\u{e0b5}"),
	("circle", "\u{25cf}"),
];
