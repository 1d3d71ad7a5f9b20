//! Error types for value resolution and configuration.

use bezel_primitives::ParseError;
use thiserror::Error;

/// Component-local resolution failures.
///
/// These never escape a render: the resolver logs them and the attribute
/// falls back to its default (or raw string) value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
	/// A referenced color, separator or provider name is not registered.
	#[error("unknown preset name: {name}")]
	UnknownPresetName { name: String },

	/// A computed value produced the wrong type for its attribute.
	#[error("type mismatch for `{attr}`: expected {expected}, found {found}")]
	TypeMismatch {
		attr: &'static str,
		expected: &'static str,
		found: &'static str,
	},

	/// A computed value returned an error or panicked.
	#[error("evaluation of `{attr}` failed: {message}")]
	ProviderEvaluationFailure { attr: &'static str, message: String },
}

/// Setup-time configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A color or modifier string under `key` could not be parsed.
	#[error("{key}: {error}")]
	Parse {
		key: String,
		#[source]
		error: ParseError,
	},

	/// A window rule pattern is not a valid regex.
	#[error("invalid {field} pattern: {error}")]
	InvalidPattern {
		field: &'static str,
		#[source]
		error: regex::Error,
	},
}
