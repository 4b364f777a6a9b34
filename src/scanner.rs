/// Regex-based extraction of PHP facts from raw file text.
///
/// Nothing in here parses PHP properly.  Every function runs one or two
/// fixed regular expressions over the text and turns the captures into
/// strings; input that does not match simply produces no results.
///
/// - [`parse_use_statements`]: top-level `use` imports, including grouped
///   and aliased forms
/// - [`parse_constructor_injected`]: promoted constructor parameter types
/// - [`constructor_span`] / [`is_in_constructor_params`]: where the
///   constructor's parameter list sits in the buffer
/// - [`namespace_from_source`] / [`namespace_from_file`]: importable symbol
///   for a class file
/// - [`extract_events`]: `view_render_event` and `Event::dispatch` call sites
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{EventDescriptor, EventKind};

static USE_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^use\s+([^\s{;]+)(?:\s+as\s+(\w+))?(?:\s*\{([^}]+)\})?;")
        .expect("valid use regex")
});

static CONSTRUCTOR_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)__construct\s*\(.*?\)").expect("valid constructor regex"));

static CONSTRUCTOR_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)public\s+function\s+__construct\s*\(.*?\)")
        .expect("valid constructor declaration regex")
});

static PROMOTED_PARAMETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:public|protected|private)\s+(?:readonly\s+)?\??([\w\\]+)\s+\$\w+")
        .expect("valid parameter regex")
});

static NAMESPACE_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"namespace\s+([^\s;]+)\s*;").expect("valid namespace regex"));

static VIEW_RENDER_EVENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"view_render_event\('([^']+)'(?:, ?(.+))?\)").expect("valid render event regex")
});

static EVENT_DISPATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Event::dispatch\('([^']+)'(?:, ?(.+))?\)").expect("valid dispatch regex")
});

const RENDER_LABEL_PREFIX: &str = "Webkul Event Rander:";
const DISPATCH_LABEL_PREFIX: &str = "Webkul Event Dispatch: ";

/// Collect the names imported by top-level `use` statements.
///
/// - `use Foo\Bar;` yields `Foo\Bar`
/// - `use Foo\{Bar, Baz};` yields `Foo\Bar` and `Foo\Baz`
/// - `use Foo\Bar as Qux;` yields only `Qux`
///
/// Only statements starting at column zero are considered, so trait `use`
/// lines inside a class body are ignored.  Repeated imports are returned
/// as many times as they appear.
pub fn parse_use_statements(text: &str) -> Vec<String> {
    let mut imported = Vec::new();

    for caps in USE_STATEMENT.captures_iter(text) {
        let base = &caps[1];

        if let Some(group) = caps.get(3) {
            let prefix = base.trim_end_matches('\\');
            for member in group.as_str().split(',').map(str::trim) {
                if member.is_empty() {
                    continue;
                }
                match split_alias(member) {
                    Some(alias) => imported.push(alias.to_string()),
                    None => imported.push(format!("{}\\{}", prefix, member)),
                }
            }
        } else if let Some(alias) = caps.get(2) {
            imported.push(alias.as_str().to_string());
        } else {
            imported.push(base.to_string());
        }
    }

    imported
}

/// `"Bar as B"` → `Some("B")`.
fn split_alias(member: &str) -> Option<&str> {
    let mut parts = member.split_whitespace();
    let _name = parts.next()?;
    match (parts.next(), parts.next()) {
        (Some(kw), Some(alias)) if kw.eq_ignore_ascii_case("as") => Some(alias),
        _ => None,
    }
}

/// Type names of the promoted parameters in the first `__construct(...)`.
///
/// The constructor is located with a non-greedy match up to the first `)`,
/// so a default value containing parentheses cuts the list short.
pub fn parse_constructor_injected(text: &str) -> Vec<String> {
    let Some(constructor) = CONSTRUCTOR_CALL.find(text) else {
        return Vec::new();
    };

    PROMOTED_PARAMETER
        .captures_iter(constructor.as_str())
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Byte range of the first `public function __construct(...)` declaration,
/// from `public` up to and including the closing `)`.
pub fn constructor_span(text: &str) -> Option<Range<usize>> {
    CONSTRUCTOR_DECLARATION.find(text).map(|m| m.range())
}

/// Whether `offset` falls within the first constructor declaration.
///
/// Both ends are inclusive so a cursor sitting right after the `)` still
/// counts.  Files with several constructors only consider the first.
pub fn is_in_constructor_params(text: &str, offset: usize) -> bool {
    constructor_span(text).is_some_and(|span| offset >= span.start && offset <= span.end)
}

/// The importable symbol for a class file: its declared namespace joined
/// with the file name minus `.php`.
pub fn namespace_from_source(content: &str, file_path: &Path) -> Option<String> {
    let caps = NAMESPACE_DECLARATION.captures(content)?;
    let file_name = file_path.file_name()?.to_str()?;
    let class_name = file_name.strip_suffix(".php").unwrap_or(file_name);
    Some(format!("{}\\{}", &caps[1], class_name))
}

/// Like [`namespace_from_source`], reading the file first.  Unreadable
/// files yield `None`.
pub fn namespace_from_file(file_path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(file_path).ok()?;
    namespace_from_source(&content, file_path)
}

/// Find every `view_render_event(...)` and `Event::dispatch(...)` call.
///
/// All render events come first, then all dispatch events, each in source
/// order.  Calls repeated in the text produce repeated descriptors.
pub fn extract_events(content: &str) -> Vec<EventDescriptor> {
    let mut events = Vec::new();

    for caps in VIEW_RENDER_EVENT.captures_iter(content) {
        let event_name = caps[1].to_string();
        let parameter = caps.get(2).map(|m| m.as_str().trim().to_string());

        let insert_text = format!(
            "Event::listen('{}', function (\\$viewRenderEventManager) {{\n    \\$viewRenderEventManager->addTemplate('');\n}});",
            event_name
        );

        events.push(EventDescriptor {
            kind: EventKind::Render,
            label: format!(
                "{}{}",
                RENDER_LABEL_PREFIX,
                event_label(&event_name, parameter.as_deref())
            ),
            event_name,
            parameter,
            insert_text,
        });
    }

    for caps in EVENT_DISPATCH.captures_iter(content) {
        let event_name = caps[1].to_string();
        let parameter = caps.get(2).map(|m| m.as_str().trim().to_string());

        events.push(EventDescriptor {
            kind: EventKind::Dispatch,
            label: format!(
                "{}{}",
                DISPATCH_LABEL_PREFIX,
                event_label(&event_name, parameter.as_deref())
            ),
            insert_text: format!("Event::listen('{}', );", event_name),
            event_name,
            parameter,
        });
    }

    events
}

fn event_label(event_name: &str, parameter: Option<&str>) -> String {
    match parameter {
        Some(p) => format!("{} | {}", event_name, p),
        None => event_name.to_string(),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
