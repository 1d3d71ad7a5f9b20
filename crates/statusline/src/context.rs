//! Per-render inputs supplied by the host.

/// Opaque host window identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct WindowId(pub u64);

/// Version control state of the displayed buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitStatus {
	pub branch: String,
	pub added: usize,
	pub removed: usize,
	pub changed: usize,
}

/// Diagnostic counts for the displayed buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticCounts {
	pub errors: usize,
	pub warnings: usize,
	pub info: usize,
	pub hints: usize,
}

/// Read-only accessors for window and buffer state.
///
/// Every method has an "absent" default so hosts only implement what they
/// can answer. Implementations must be cheap in-memory lookups; they are
/// called synchronously from inside a render.
pub trait HostView {
	/// Filetype of the buffer (e.g. `rust`).
	fn filetype(&self) -> &str {
		""
	}

	/// Buffer type (e.g. `terminal`, `help`, empty for normal files).
	fn buftype(&self) -> &str {
		""
	}

	/// Full buffer name, usually an absolute path.
	fn bufname(&self) -> &str {
		""
	}

	/// Working directory used to relativize [`Self::bufname`].
	fn cwd(&self) -> Option<&str> {
		None
	}

	/// Home directory used to shorten paths.
	fn home(&self) -> Option<&str> {
		None
	}

	fn modified(&self) -> bool {
		false
	}

	fn readonly(&self) -> bool {
		false
	}

	/// Host mode code (`n`, `i`, `v`, `V`, `\x16`, `R`, `c`, `t`, ...).
	fn mode(&self) -> &str {
		"n"
	}

	/// Cursor position, 1-indexed `(line, column)`.
	fn cursor(&self) -> (usize, usize) {
		(1, 1)
	}

	/// Total number of lines in the buffer.
	fn line_count(&self) -> usize {
		1
	}

	/// File size on disk in bytes.
	fn file_size(&self) -> Option<u64> {
		None
	}

	fn encoding(&self) -> &str {
		"utf-8"
	}

	/// Line ending format (`unix`, `dos`, `mac`).
	fn file_format(&self) -> &str {
		"unix"
	}

	fn git(&self) -> Option<&GitStatus> {
		None
	}

	fn diagnostics(&self) -> DiagnosticCounts {
		DiagnosticCounts::default()
	}

	/// Names of language servers attached to the buffer.
	fn lsp_clients(&self) -> &[String] {
		&[]
	}
}

/// Plain-data [`HostView`] for hosts that snapshot state before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
	pub filetype: String,
	pub buftype: String,
	pub bufname: String,
	pub cwd: Option<String>,
	pub home: Option<String>,
	pub modified: bool,
	pub readonly: bool,
	pub mode: String,
	pub line: usize,
	pub col: usize,
	pub line_count: usize,
	pub file_size: Option<u64>,
	pub encoding: String,
	pub file_format: String,
	pub git: Option<GitStatus>,
	pub diagnostics: DiagnosticCounts,
	pub lsp_clients: Vec<String>,
}

impl Default for BufferSnapshot {
	fn default() -> Self {
		Self {
			filetype: String::new(),
			buftype: String::new(),
			bufname: String::new(),
			cwd: None,
			home: None,
			modified: false,
			readonly: false,
			mode: "n".to_string(),
			line: 1,
			col: 1,
			line_count: 1,
			file_size: None,
			encoding: "utf-8".to_string(),
			file_format: "unix".to_string(),
			git: None,
			diagnostics: DiagnosticCounts::default(),
			lsp_clients: Vec::new(),
		}
	}
}

impl HostView for BufferSnapshot {
	fn filetype(&self) -> &str {
		&self.filetype
	}

	fn buftype(&self) -> &str {
		&self.buftype
	}

	fn bufname(&self) -> &str {
		&self.bufname
	}

	fn cwd(&self) -> Option<&str> {
		self.cwd.as_deref()
	}

	fn home(&self) -> Option<&str> {
		self.home.as_deref()
	}

	fn modified(&self) -> bool {
		self.modified
	}

	fn readonly(&self) -> bool {
		self.readonly
	}

	fn mode(&self) -> &str {
		&self.mode
	}

	fn cursor(&self) -> (usize, usize) {
		(self.line, self.col)
	}

	fn line_count(&self) -> usize {
		self.line_count
	}

	fn file_size(&self) -> Option<u64> {
		self.file_size
	}

	fn encoding(&self) -> &str {
		&self.encoding
	}

	fn file_format(&self) -> &str {
		&self.file_format
	}

	fn git(&self) -> Option<&GitStatus> {
		self.git.as_ref()
	}

	fn diagnostics(&self) -> DiagnosticCounts {
		self.diagnostics
	}

	fn lsp_clients(&self) -> &[String] {
		&self.lsp_clients
	}
}

/// Inputs for a single render, constructed fresh per redraw request.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
	pub window: WindowId,
	/// Available width in columns.
	pub width: usize,
	/// Whether the window has focus.
	pub active: bool,
	pub host: &'a dyn HostView,
}

impl<'a> RenderContext<'a> {
	pub fn new(window: WindowId, width: usize, active: bool, host: &'a dyn HostView) -> Self {
		Self {
			window,
			width,
			active,
			host,
		}
	}
}

impl core::fmt::Debug for RenderContext<'_> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("RenderContext")
			.field("window", &self.window)
			.field("width", &self.width)
			.field("active", &self.active)
			.finish_non_exhaustive()
	}
}
