//! Buffer name and file metadata.

use std::path::{MAIN_SEPARATOR, Path};

use crate::context::HostView;
use crate::value::{ComponentView, ProviderOpts, ProviderOutput, Scope};

const NO_NAME: &str = "[No Name]";
const MODIFIED_ICON: &str = "\u{25cf}";
const READONLY_ICON: &str = "\u{1f512}";
const SIZE_SUFFIXES: [&str; 7] = ["b", "k", "m", "g", "t", "p", "e"];

/// Buffer name followed by readonly and modified markers.
///
/// Opt `type` picks the path form: `base-only` (default), `full-path`,
/// `short-path` or `relative`. Opts `file_modified_icon` and
/// `file_readonly_icon` replace the markers.
pub(super) fn file_info(scope: &Scope<'_>, _: &ComponentView<'_>, opts: &ProviderOpts) -> ProviderOutput {
	let host = scope.host();
	let mut text = match host.bufname() {
		"" => NO_NAME.to_string(),
		name => display_path(host, name, opts.get_str("type").unwrap_or("base-only")),
	};

	if host.readonly() {
		text.push(' ');
		text.push_str(opts.get_str("file_readonly_icon").unwrap_or(READONLY_ICON));
	}
	if host.modified() {
		text.push(' ');
		text.push_str(opts.get_str("file_modified_icon").unwrap_or(MODIFIED_ICON));
	}
	ProviderOutput::new(text)
}

fn display_path(host: &dyn HostView, name: &str, kind: &str) -> String {
	match kind {
		"full-path" => home_relative(host, name),
		"short-path" => shorten(&home_relative(host, name)),
		"relative" => cwd_relative(host, name),
		"base-only" => base_name(name),
		other => {
			tracing::debug!(kind = other, "Unknown file_info type, using base-only");
			base_name(name)
		}
	}
}

fn base_name(name: &str) -> String {
	Path::new(name)
		.file_name()
		.map_or_else(|| name.to_string(), |base| base.to_string_lossy().into_owned())
}

fn cwd_relative(host: &dyn HostView, name: &str) -> String {
	host.cwd()
		.and_then(|cwd| Path::new(name).strip_prefix(cwd).ok())
		.map(|rel| rel.to_string_lossy().into_owned())
		.filter(|rel| !rel.is_empty())
		.unwrap_or_else(|| home_relative(host, name))
}

fn home_relative(host: &dyn HostView, name: &str) -> String {
	match host.home().and_then(|home| Path::new(name).strip_prefix(home).ok()) {
		Some(rel) if rel.as_os_str().is_empty() => "~".to_string(),
		Some(rel) => format!("~{MAIN_SEPARATOR}{}", rel.display()),
		None => name.to_string(),
	}
}

/// Shortens every directory component to its first character, keeping a
/// leading `.` so hidden directories stay recognizable.
fn shorten(path: &str) -> String {
	let mut parts: Vec<&str> = path.split(MAIN_SEPARATOR).collect();
	let Some(last) = parts.pop() else {
		return path.to_string();
	};

	let mut out = String::with_capacity(path.len());
	for part in parts {
		let keep = if part.starts_with('.') { 2 } else { 1 };
		let end = part.char_indices().nth(keep).map_or(part.len(), |(i, _)| i);
		out.push_str(&part[..end]);
		out.push(MAIN_SEPARATOR);
	}
	out.push_str(last);
	out
}

/// On-disk size with a binary unit suffix; empty for unsaved or empty files.
pub(super) fn file_size(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	match scope.host().file_size() {
		None | Some(0) => ProviderOutput::default(),
		Some(size) => ProviderOutput::new(format_size(size)),
	}
}

fn format_size(size: u64) -> String {
	let mut unit = 0;
	let mut scaled = size;
	while scaled >= 1024 && unit < SIZE_SUFFIXES.len() - 1 {
		scaled /= 1024;
		unit += 1;
	}
	if unit == 0 {
		return format!("{size}{}", SIZE_SUFFIXES[0]);
	}
	let value = size as f64 / 1024f64.powi(unit as i32);
	format!("{value:.1}{}", SIZE_SUFFIXES[unit])
}

/// Filetype. Opt `case` is `uppercase` (default), `lowercase` or
/// `titlecase`.
pub(super) fn file_type(scope: &Scope<'_>, _: &ComponentView<'_>, opts: &ProviderOpts) -> ProviderOutput {
	let filetype = scope.host().filetype();
	let text = match opts.get_str("case").unwrap_or("uppercase") {
		"lowercase" => filetype.to_lowercase(),
		"titlecase" => {
			let mut chars = filetype.chars();
			chars.next().map_or_else(String::new, |first| {
				first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
			})
		}
		_ => filetype.to_uppercase(),
	};
	ProviderOutput::new(text)
}

pub(super) fn file_encoding(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	ProviderOutput::new(scope.host().encoding().to_uppercase())
}

pub(super) fn file_format(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	ProviderOutput::new(scope.host().file_format().to_uppercase())
}
