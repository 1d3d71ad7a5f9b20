//! Default palette and mode colors.

use bezel_primitives::Color;

/// Builtin color presets. `fg` and `bg` are the component defaults.
pub(super) const DEFAULT_COLORS: &[(&str, Color)] = &[
	("fg", Color::from_u32(0xD0D0D0)),
	("bg", Color::from_u32(0x1F1F23)),
	("black", Color::from_u32(0x1B1B1B)),
	("skyblue", Color::from_u32(0x50B0F0)),
	("cyan", Color::from_u32(0x009090)),
	("green", Color::from_u32(0x60A040)),
	("oceanblue", Color::from_u32(0x0066CC)),
	("magenta", Color::from_u32(0xC26BDB)),
	("orange", Color::from_u32(0xFF9000)),
	("red", Color::from_u32(0xD10000)),
	("violet", Color::from_u32(0x9E93E8)),
	("white", Color::from_u32(0xFFFFFF)),
	("yellow", Color::from_u32(0xE1E120)),
];

/// Mode name to color preset.
pub(super) const DEFAULT_MODE_COLORS: &[(&str, &str)] = &[
	("NORMAL", "green"),
	("OP", "green"),
	("INSERT", "red"),
	("VISUAL", "skyblue"),
	("LINES", "skyblue"),
	("BLOCK", "skyblue"),
	("REPLACE", "violet"),
	("V-REPLACE", "violet"),
	("ENTER", "cyan"),
	("MORE", "cyan"),
	("SELECT", "orange"),
	("COMMAND", "green"),
	("SHELL", "green"),
	("TERM", "green"),
	("NONE", "yellow"),
];

/// Display name for a host mode code (`n`, `no`, `i`, `v`, `V`, `^V`, ...).
///
/// Unknown codes map to `NONE`.
pub fn mode_name(code: &str) -> &'static str {
	match code {
		"n" | "niI" | "niR" | "niV" => "NORMAL",
		"no" | "nov" | "noV" | "no\x16" => "OP",
		"v" | "vs" => "VISUAL",
		"V" | "Vs" => "LINES",
		"\x16" | "\x16s" | "\x13" => "BLOCK",
		"s" | "S" => "SELECT",
		"i" | "ic" | "ix" => "INSERT",
		"R" | "Rc" | "Rx" => "REPLACE",
		"Rv" | "Rvc" | "Rvx" => "V-REPLACE",
		"c" | "cv" | "ce" => "COMMAND",
		"r" => "ENTER",
		"rm" | "r?" => "MORE",
		"!" => "SHELL",
		"t" | "nt" => "TERM",
		_ => "NONE",
	}
}
