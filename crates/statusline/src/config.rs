//! Declarative statusline configuration.
//!
//! Hosts build a [`StatuslineConfig`] in code or parse one from TOML:
//!
//! ```toml
//! truncation = true
//! highlight-reset-triggers = ["ColorScheme"]
//!
//! [theme]
//! fg = "#c0c0c0"
//!
//! [vi-mode-colors]
//! INSERT = "oceanblue"
//!
//! [disable]
//! filetypes = ["^alpha$"]
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::rules::WindowPatterns;

/// Engine configuration: preset overrides, window rules and switches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct StatuslineConfig {
	/// Color presets to add or replace, as color strings.
	pub theme: BTreeMap<String, String>,
	/// Separator presets to add or replace.
	pub separators: BTreeMap<String, String>,
	/// Mode name to color preset name or color string.
	pub vi_mode_colors: BTreeMap<String, String>,
	/// Windows that always render the inactive tree.
	pub force_inactive: WindowPatterns,
	/// Windows that get no statusline at all.
	pub disable: WindowPatterns,
	/// Host events that reset the highlight cache.
	pub highlight_reset_triggers: Vec<String>,
	/// Degrade components when the line is too wide.
	pub truncation: bool,
}

impl Default for StatuslineConfig {
	fn default() -> Self {
		Self {
			theme: BTreeMap::new(),
			separators: BTreeMap::new(),
			vi_mode_colors: BTreeMap::new(),
			force_inactive: WindowPatterns {
				filetypes: [
					"^NvimTree$",
					"^packer$",
					"^startify$",
					"^fugitive$",
					"^fugitiveblame$",
					"^qf$",
					"^help$",
				]
				.map(String::from)
				.to_vec(),
				buftypes: vec!["^terminal$".to_string()],
				bufnames: Vec::new(),
			},
			disable: WindowPatterns::default(),
			highlight_reset_triggers: vec!["ColorScheme".to_string(), "SessionLoadPost".to_string()],
			truncation: true,
		}
	}
}

impl StatuslineConfig {
	/// Parses a TOML document. Omitted keys keep their defaults.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}
}
