use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{cursor, file, lsp, mode, vcs};
use crate::context::{BufferSnapshot, DiagnosticCounts, GitStatus, RenderContext, WindowId};
use crate::presets::Presets;
use crate::value::{ComponentView, ProviderOpts, ProviderOutput, Scope};

type Provider = fn(&Scope<'_>, &ComponentView<'_>, &ProviderOpts) -> ProviderOutput;

fn call(provider: Provider, host: &BufferSnapshot, opts: &ProviderOpts) -> ProviderOutput {
	let ctx = RenderContext::new(WindowId(1), 80, true, host);
	let presets = Presets::default();
	let scope = Scope::new(&ctx, &presets);
	let view = ComponentView {
		name: None,
		priority: 0,
		truncate_hide: false,
		short: false,
		opts,
		text: None,
		hl: None,
	};
	provider(&scope, &view, opts)
}

fn text(provider: Provider, host: &BufferSnapshot) -> String {
	call(provider, host, &ProviderOpts::new()).text
}

fn at_line(line: usize, line_count: usize) -> BufferSnapshot {
	BufferSnapshot {
		line,
		line_count,
		..BufferSnapshot::default()
	}
}

#[rstest]
#[case("n", "NORMAL")]
#[case("i", "INSERT")]
#[case("V", "LINES")]
#[case("\x16", "BLOCK")]
#[case("Rv", "V-REPLACE")]
#[case("zz", "NONE")]
fn vi_mode_names_host_mode(#[case] code: &str, #[case] expected: &str) {
	let host = BufferSnapshot {
		mode: code.to_string(),
		..BufferSnapshot::default()
	};
	assert_eq!(text(mode::vi_mode, &host), expected);
}

#[test]
fn vi_mode_icon_comes_from_opts() {
	let opts = ProviderOpts::new().with("icon", "> ");
	let output = call(mode::vi_mode, &BufferSnapshot::default(), &opts);
	assert_eq!(output.icon.map(|icon| icon.text), Some("> ".to_string()));
}

#[test]
fn position_pads_when_asked() {
	let host = BufferSnapshot {
		line: 7,
		col: 3,
		..BufferSnapshot::default()
	};
	assert_eq!(text(cursor::position, &host), "7:3");
	let padded = call(cursor::position, &host, &ProviderOpts::new().with("padding", true));
	assert_eq!(padded.text, "  7:3 ");
}

#[rstest]
#[case(1, 100, "Top")]
#[case(100, 100, "Bot")]
#[case(50, 100, "50%")]
#[case(1, 1, "Top")]
fn line_percentage_reports_progress(#[case] line: usize, #[case] count: usize, #[case] expected: &str) {
	assert_eq!(text(cursor::line_percentage, &at_line(line, count)), expected);
}

#[test]
fn scroll_bar_is_two_columns_and_tracks_cursor() {
	assert_eq!(text(cursor::scroll_bar, &at_line(1, 100)), "\u{2581}\u{2581}");
	assert_eq!(text(cursor::scroll_bar, &at_line(100, 100)), "\u{2588}\u{2588}");
	let reversed = call(cursor::scroll_bar, &at_line(100, 100), &ProviderOpts::new().with("reverse", true));
	assert_eq!(reversed.text, "\u{2581}\u{2581}");
}

fn named(bufname: &str) -> BufferSnapshot {
	BufferSnapshot {
		bufname: bufname.to_string(),
		cwd: Some("/home/me/project".to_string()),
		home: Some("/home/me".to_string()),
		..BufferSnapshot::default()
	}
}

#[rstest]
#[case("base-only", "main.rs")]
#[case("full-path", "~/project/src/main.rs")]
#[case("short-path", "~/p/s/main.rs")]
#[case("relative", "src/main.rs")]
fn file_info_path_forms(#[case] kind: &str, #[case] expected: &str) {
	let host = named("/home/me/project/src/main.rs");
	let output = call(file::file_info, &host, &ProviderOpts::new().with("type", kind));
	assert_eq!(output.text, expected);
}

#[test]
fn file_info_marks_unnamed_modified_and_readonly() {
	let mut host = BufferSnapshot {
		modified: true,
		..BufferSnapshot::default()
	};
	assert_eq!(text(file::file_info, &host), "[No Name] \u{25cf}");

	host.readonly = true;
	let opts = ProviderOpts::new()
		.with("file_modified_icon", "+")
		.with("file_readonly_icon", "RO");
	assert_eq!(call(file::file_info, &host, &opts).text, "[No Name] RO +");
}

#[rstest]
#[case(None, "")]
#[case(Some(0), "")]
#[case(Some(512), "512b")]
#[case(Some(1536), "1.5k")]
#[case(Some(3 * 1024 * 1024), "3.0m")]
fn file_size_uses_binary_suffixes(#[case] size: Option<u64>, #[case] expected: &str) {
	let host = BufferSnapshot {
		file_size: size,
		..BufferSnapshot::default()
	};
	assert_eq!(text(file::file_size, &host), expected);
}

#[test]
fn file_type_case_option() {
	let host = BufferSnapshot {
		filetype: "rust".to_string(),
		..BufferSnapshot::default()
	};
	assert_eq!(text(file::file_type, &host), "RUST");
	let title = call(file::file_type, &host, &ProviderOpts::new().with("case", "titlecase"));
	assert_eq!(title.text, "Rust");
	assert_eq!(text(file::file_encoding, &host), "UTF-8");
	assert_eq!(text(file::file_format, &host), "UNIX");
}

#[test]
fn git_providers_hide_zero_counts() {
	let host = BufferSnapshot {
		git: Some(GitStatus {
			branch: "main".to_string(),
			added: 3,
			removed: 0,
			changed: 1,
		}),
		..BufferSnapshot::default()
	};
	let branch = call(vcs::git_branch, &host, &ProviderOpts::new());
	assert_eq!(branch.text, "main");
	assert!(branch.icon.is_some());
	assert_eq!(text(vcs::git_diff_added, &host), "3");
	assert_eq!(text(vcs::git_diff_removed, &host), "");
	assert_eq!(text(vcs::git_diff_changed, &host), "1");
	assert_eq!(text(vcs::git_branch, &BufferSnapshot::default()), "");
}

#[test]
fn lsp_providers_report_clients_and_counts() {
	let host = BufferSnapshot {
		lsp_clients: vec!["rust-analyzer".to_string(), "typos".to_string()],
		diagnostics: DiagnosticCounts {
			errors: 2,
			warnings: 0,
			info: 1,
			hints: 0,
		},
		..BufferSnapshot::default()
	};
	assert_eq!(text(lsp::lsp_client_names, &host), "rust-analyzer typos");
	let errors = call(lsp::diagnostic_errors, &host, &ProviderOpts::new());
	assert_eq!(errors.text, "2");
	assert_eq!(errors.icon.map(|icon| icon.text), Some(" E-".to_string()));
	assert_eq!(text(lsp::diagnostic_warnings, &host), "");
	assert_eq!(text(lsp::diagnostic_info, &host), "1");
	assert_eq!(text(lsp::diagnostic_hints, &host), "");
}
