/// Text and position helpers shared by the completion assemblers.
///
/// LSP positions are treated as (line, character) where a character is one
/// Unicode scalar value.  That is not quite UTF-16, but matches every PHP
/// file that keeps identifiers ASCII.
use tower_lsp::lsp_types::{Position, Range};

/// The identifier-like run of characters touching the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub range: Range,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convert an LSP position to a byte offset into `content`.
///
/// Handles both `\n` and `\r\n` line endings.  Positions past the end of a
/// line clamp to the line end; positions past the last line clamp to the
/// end of the content.
///
/// `position.character` counts chars, which matches UTF-16 units only for
/// text inside the Basic Multilingual Plane.
pub fn position_to_offset(content: &str, position: Position) -> usize {
    let mut offset = 0;
    for (i, line) in content.split_inclusive('\n').enumerate() {
        if i == position.line as usize {
            let body = line.trim_end_matches(['\r', '\n']);
            let byte_col = body
                .char_indices()
                .nth(position.character as usize)
                .map(|(idx, _)| idx)
                .unwrap_or(body.len());
            return offset + byte_col;
        }
        offset += line.len();
    }
    content.len()
}

/// The text of line `line`, without its terminator.
pub fn line_at(content: &str, line: u32) -> Option<&str> {
    content
        .split('\n')
        .nth(line as usize)
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
}

/// The word under (or immediately before) the cursor.
pub fn word_at_position(content: &str, position: Position) -> Option<Word> {
    let line = line_at(content, position.line)?;
    let chars: Vec<char> = line.chars().collect();

    let pos = position.character as usize;
    if pos > chars.len() {
        return None;
    }

    let mut start = pos;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }

    let mut end = pos;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    if start == end {
        return None;
    }

    Some(Word {
        text: chars[start..end].iter().collect(),
        range: Range {
            start: Position {
                line: position.line,
                character: start as u32,
            },
            end: Position {
                line: position.line,
                character: end as u32,
            },
        },
    })
}

/// Last segment of a namespaced name: `Foo\Bar\Baz` → `Baz`.
pub fn short_name(name: &str) -> &str {
    name.rsplit('\\').next().unwrap_or(name)
}

/// Lower-case the first character: `ProductRepository` → `productRepository`.
pub fn lcfirst(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
