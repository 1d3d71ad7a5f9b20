//! Builtin providers computed from the host's [`HostView`] accessors.
//!
//! Providers with nothing to report return empty text, which also hides
//! their icon and any separators that are not `always_visible`.
//!
//! [`HostView`]: crate::context::HostView

mod cursor;
mod file;
mod lsp;
mod mode;
mod vcs;

use crate::value::{ComponentView, ProviderOpts, ProviderOutput, Scope};

pub(super) type BuiltinProvider =
	fn(&Scope<'_>, &ComponentView<'_>, &ProviderOpts) -> ProviderOutput;

pub(super) const BUILTIN_PROVIDERS: &[(&str, BuiltinProvider)] = &[
	("vi_mode", mode::vi_mode),
	("position", cursor::position),
	("line_percentage", cursor::line_percentage),
	("scroll_bar", cursor::scroll_bar),
	("file_info", file::file_info),
	("file_size", file::file_size),
	("file_type", file::file_type),
	("file_encoding", file::file_encoding),
	("file_format", file::file_format),
	("git_branch", vcs::git_branch),
	("git_diff_added", vcs::git_diff_added),
	("git_diff_removed", vcs::git_diff_removed),
	("git_diff_changed", vcs::git_diff_changed),
	("lsp_client_names", lsp::lsp_client_names),
	("diagnostic_errors", lsp::diagnostic_errors),
	("diagnostic_warnings", lsp::diagnostic_warnings),
	("diagnostic_hints", lsp::diagnostic_hints),
	("diagnostic_info", lsp::diagnostic_info),
];

/// Shared shape of count-style providers: the count when nonzero with a
/// default icon, empty otherwise.
fn count_with_icon(count: usize, icon: &str) -> ProviderOutput {
	if count == 0 {
		return ProviderOutput::default();
	}
	ProviderOutput::new(count.to_string()).with_icon(icon)
}

#[cfg(test)]
mod tests;
