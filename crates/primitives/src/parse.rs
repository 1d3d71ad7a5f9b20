//! Color parsing shared by presets and configuration.

use thiserror::Error;

use crate::color::Color;

/// Errors produced while parsing color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	/// A color value could not be parsed.
	#[error("invalid color format: {0}")]
	InvalidColor(String),
}

/// Parse a color value from a string.
///
/// Supports hex (`#RGB`, `#RRGGBB`), palette indices (`@N`), named colors,
/// and `reset`/`default`/`none`.
pub fn parse_color(value: &str) -> Result<Color, ParseError> {
	let value = value.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_color(hex);
	}

	if let Some(index) = value.strip_prefix('@') {
		return index
			.parse::<u8>()
			.map(Color::Indexed)
			.map_err(|_| ParseError::InvalidColor(value.to_string()));
	}

	parse_named_color(value)
}

fn parse_hex_color(hex: &str) -> Result<Color, ParseError> {
	let err = || ParseError::InvalidColor(format!("#{hex}"));
	if !hex.is_ascii() {
		return Err(err());
	}

	match hex.len() {
		3 => {
			let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).map_err(|_| err())?;
			let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).map_err(|_| err())?;
			let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).map_err(|_| err())?;
			Ok(Color::Rgb(r, g, b))
		}
		6 => {
			let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err())?;
			let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err())?;
			let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err())?;
			Ok(Color::Rgb(r, g, b))
		}
		_ => Err(err()),
	}
}

fn parse_named_color(name: &str) -> Result<Color, ParseError> {
	let normalized = name.to_lowercase().replace(['-', '_', ' '], "");

	match normalized.as_str() {
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"darkgray" | "darkgrey" => Ok(Color::DarkGray),
		"lightred" => Ok(Color::LightRed),
		"lightgreen" => Ok(Color::LightGreen),
		"lightyellow" => Ok(Color::LightYellow),
		"lightblue" => Ok(Color::LightBlue),
		"lightmagenta" => Ok(Color::LightMagenta),
		"lightcyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		"reset" | "default" | "none" => Ok(Color::Reset),
		_ => Err(ParseError::InvalidColor(name.to_string())),
	}
}
