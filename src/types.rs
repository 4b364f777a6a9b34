//! Data types used throughout the webkul_lsp server.
//!
//! Everything here is transient: values are derived from a single buffer or
//! path for one request and dropped afterwards.
use std::path::PathBuf;

/// Which call style produced an [`EventDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `view_render_event('name', ...)` inside a Blade/PHP view.
    Render,
    /// `Event::dispatch('name', ...)`.
    Dispatch,
}

/// A single event call site found in a PHP file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub kind: EventKind,
    /// The event name as written between the quotes (e.g. "theme::partial").
    pub event_name: String,
    /// Trimmed text after the first argument, if any (e.g. "['product' => $product]").
    pub parameter: Option<String>,
    /// Snippet-syntax text registering a listener for this event.
    pub insert_text: String,
    /// Display label shown in the completion list.
    pub label: String,
}

/// A rendered class skeleton derived from a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTemplate {
    /// Namespace without a leading `\` (e.g. "Webkul\\Shop\\Http").
    pub namespace: String,
    /// The class name taken from the file name (e.g. "ProductController").
    pub class_name: String,
    pub template: String,
}

/// Everything the scaffolder needs to lay out a new module on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLayout {
    /// Normalised module name (e.g. "Pos").
    pub module_name: String,
    /// Namespace prefix for the module (e.g. "Webkul\\Pos").
    pub namespace: String,
    /// Absolute module directory (e.g. `<workspace>/packages/Webkul/Pos`).
    pub root: PathBuf,
    /// Directories created before any file is written.
    pub directories: Vec<PathBuf>,
    /// Files to write, in order, with their rendered contents.
    pub files: Vec<(PathBuf, String)>,
}
