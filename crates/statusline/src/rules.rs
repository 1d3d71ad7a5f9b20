//! Window matching rules for forcing the inactive tree or disabling the
//! statusline.

use regex::RegexSet;
use serde::Deserialize;

use crate::context::HostView;
use crate::error::ConfigError;

/// Regex lists matched against a window's buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowPatterns {
	pub filetypes: Vec<String>,
	pub buftypes: Vec<String>,
	pub bufnames: Vec<String>,
}

impl WindowPatterns {
	pub fn is_empty(&self) -> bool {
		self.filetypes.is_empty() && self.buftypes.is_empty() && self.bufnames.is_empty()
	}
}

/// Compiled [`WindowPatterns`]. A window matches when any pattern of any
/// field matches.
#[derive(Debug, Clone)]
pub struct WindowRules {
	filetypes: RegexSet,
	buftypes: RegexSet,
	bufnames: RegexSet,
}

impl WindowRules {
	pub fn compile(patterns: &WindowPatterns) -> Result<Self, ConfigError> {
		Ok(Self {
			filetypes: compile_set("filetypes", &patterns.filetypes)?,
			buftypes: compile_set("buftypes", &patterns.buftypes)?,
			bufnames: compile_set("bufnames", &patterns.bufnames)?,
		})
	}

	pub fn matches(&self, host: &dyn HostView) -> bool {
		self.filetypes.is_match(host.filetype())
			|| self.buftypes.is_match(host.buftype())
			|| self.bufnames.is_match(host.bufname())
	}
}

fn compile_set(field: &'static str, patterns: &[String]) -> Result<RegexSet, ConfigError> {
	RegexSet::new(patterns).map_err(|error| ConfigError::InvalidPattern { field, error })
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::{WindowPatterns, WindowRules};
	use crate::context::BufferSnapshot;
	use crate::error::ConfigError;

	fn buffer(filetype: &str, buftype: &str, bufname: &str) -> BufferSnapshot {
		BufferSnapshot {
			filetype: filetype.to_string(),
			buftype: buftype.to_string(),
			bufname: bufname.to_string(),
			..BufferSnapshot::default()
		}
	}

	fn rules() -> WindowRules {
		WindowRules::compile(&WindowPatterns {
			filetypes: vec!["^help$".to_string(), "^qf$".to_string()],
			buftypes: vec!["^terminal$".to_string()],
			bufnames: vec![r"\.git/".to_string()],
		})
		.unwrap()
	}

	#[rstest]
	#[case(buffer("help", "", "a.txt"), true)]
	#[case(buffer("qf", "", ""), true)]
	#[case(buffer("helpers", "", ""), false)]
	#[case(buffer("", "terminal", "term://zsh"), true)]
	#[case(buffer("gitcommit", "", "/repo/.git/COMMIT_EDITMSG"), true)]
	#[case(buffer("rust", "", "/repo/src/main.rs"), false)]
	fn matches_any_field(#[case] host: BufferSnapshot, #[case] expected: bool) {
		assert_eq!(rules().matches(&host), expected);
	}

	#[test]
	fn empty_rules_match_nothing() {
		let rules = WindowRules::compile(&WindowPatterns::default()).unwrap();
		assert!(!rules.matches(&buffer("", "", "")));
		assert!(!rules.matches(&buffer("rust", "terminal", "main.rs")));
	}

	#[test]
	fn invalid_pattern_names_the_field() {
		let err = WindowRules::compile(&WindowPatterns {
			bufnames: vec!["(".to_string()],
			..WindowPatterns::default()
		})
		.unwrap_err();
		assert!(matches!(err, ConfigError::InvalidPattern { field: "bufnames", .. }));
	}
}
