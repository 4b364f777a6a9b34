/// Completion assemblers.
///
/// Each sub-module handles one family of trigger keywords and is a plain
/// function of a [`TriggerContext`]:
/// - **imports**: `wkre`, `wkmo`, `wkco`, `wkhe`, `wkcn` → `use` statements
///   for classes found in matching package directories
/// - **class_template**: `wkcl` → a class skeleton for the current file
/// - **injection**: `wkpr` inside a constructor → promoted parameters for
///   imported but not yet injected classes
/// - **events**: `wkev` → listener snippets for every event fired in the
///   packages
/// - **handler**: the `textDocument/completion` entry point that runs all
///   of the above
///
/// An assembler whose precondition does not hold returns an empty list.
pub mod class_template;
pub mod events;
pub(crate) mod handler;
pub mod imports;
pub mod injection;

use std::path::{Path, PathBuf};

use tower_lsp::lsp_types::*;

use crate::util::Word;

/// Two-character prefix shared by every trigger keyword.
pub const TRIGGER_PREFIX: &str = "wk";

/// Everything an assembler may look at for one completion request.
#[derive(Debug, Clone)]
pub struct TriggerContext<'a> {
    /// Full text of the document.
    pub text: &'a str,
    /// On-disk path of the document, when it has one.
    pub file_path: Option<&'a Path>,
    /// Text of the cursor line.
    pub line: &'a str,
    /// Byte offset of the cursor into `text`.
    pub offset: usize,
    /// Word under the cursor, if any.
    pub word: Option<Word>,
    pub workspace_folders: &'a [PathBuf],
}

impl TriggerContext<'_> {
    /// The two-letter code after the `wk` prefix of the current word,
    /// lower-cased (`wkRe` → `re`).
    pub fn keyword_code(&self) -> Option<String> {
        let word = self.word.as_ref()?;
        let mut chars = word.text.chars();
        let prefix: String = chars.by_ref().take(2).collect();
        if !prefix.eq_ignore_ascii_case(TRIGGER_PREFIX) {
            return None;
        }
        let code: String = chars.take(2).collect::<String>().to_lowercase();
        (code.chars().count() == 2).then_some(code)
    }
}

/// Build a completion item that replaces the trigger word.
///
/// The trigger word doubles as filter text; otherwise clients would hide
/// suggestions whose labels look nothing like `wkpr`.
pub(crate) fn trigger_item(
    ctx: &TriggerContext<'_>,
    label: String,
    kind: CompletionItemKind,
    new_text: String,
    format: InsertTextFormat,
) -> CompletionItem {
    let (text_edit, filter_text, insert_text) = match &ctx.word {
        Some(word) => (
            Some(CompletionTextEdit::Edit(TextEdit {
                range: word.range,
                new_text,
            })),
            Some(word.text.clone()),
            None,
        ),
        None => (None, None, Some(new_text)),
    };

    CompletionItem {
        label,
        kind: Some(kind),
        insert_text,
        insert_text_format: Some(format),
        text_edit,
        filter_text,
        ..CompletionItem::default()
    }
}

/// Markdown documentation for a completion item.
pub(crate) fn markdown(value: String) -> Documentation {
    Documentation::MarkupContent(MarkupContent {
        kind: MarkupKind::Markdown,
        value,
    })
}
