//! Statusline generation engine.
//!
//! A statusline is a tree of sections, each an ordered list of
//! [`Component`]s. Every redraw runs one synchronous pipeline:
//!
//! 1. [`Statusline::render`] picks the active or inactive tree for the
//!    window, or suppresses the line when a disable rule matches.
//! 2. Each enabled component resolves its attribute [`Value`]s and renders
//!    into a fragment of highlighted pieces (separators, icon, text).
//! 3. If the line is wider than the budget, components degrade in priority
//!    order: full text, then short text, then hidden.
//! 4. Sections are joined with highlight-inheriting gaps into a
//!    [`RenderedLine`] of text plus contiguous highlight spans.
//!
//! Highlights are deduplicated through a shared [`HighlightCache`] that
//! outlives renders and is only cleared by an explicit reset.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use bezel_statusline::{
//! 	BufferSnapshot, Component, HighlightCache, Presets, RenderContext, Section, Statusline,
//! 	StatuslineConfig, StatuslineTree, Value, WindowId,
//! };
//!
//! let tree = StatuslineTree::new(
//! 	vec![
//! 		Section::from(vec![Component::new().provider(Value::preset("vi_mode"))]),
//! 		Section::from(vec![Component::new().provider(Value::preset("position"))]),
//! 	],
//! 	Vec::new(),
//! );
//! let config = StatuslineConfig::default();
//! let presets = Presets::from_config(&config).unwrap();
//! let line = Statusline::new(tree, presets, &config, Arc::new(HighlightCache::new())).unwrap();
//!
//! let host = BufferSnapshot::default();
//! let rendered = line.render(&RenderContext::new(WindowId(1), 40, true, &host));
//! assert_eq!(rendered.width(), 40);
//! ```

mod component;
mod config;
mod context;
mod engine;
mod error;
mod highlight;
mod layout;
mod presets;
mod rules;
mod truncate;
mod value;

pub use component::{Component, Fragment, Icon, Piece, RenderMode, Separator};
pub use config::StatuslineConfig;
pub use context::{BufferSnapshot, DiagnosticCounts, GitStatus, HostView, RenderContext, WindowId};
pub use engine::Statusline;
pub use error::{ConfigError, ValueError};
pub use highlight::{ColorValue, HighlightCache, HighlightHandle, HighlightSpec, auto_name};
pub use layout::{HighlightSpan, RenderedLine, Section, StatuslineTree, TreeKind};
pub use presets::{Presets, PresetsBuilder, ProviderFn, mode_name};
pub use rules::{WindowPatterns, WindowRules};
pub use truncate::{Slot, TruncState, Transition, Truncation, truncate};
pub use value::{Binary, ComponentView, Dynamic, Nullary, ProviderOpts, ProviderOutput, Scope, Unary, Value};

pub use bezel_primitives::{Color, Modifier, Style};
