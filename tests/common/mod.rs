#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use std::collections::VecDeque;
use tower_lsp::LanguageServer;
use tower_lsp::lsp_types::*;
use webkul_lsp::host::{Host, InputRequest, NoticeLevel};
use webkul_lsp::{Backend, Config};

pub fn create_test_backend() -> Backend {
    Backend::new_test()
}

/// Write `files` (relative path, content) below `root`, creating parents.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (rel_path, content) in files {
        let full = root.join(rel_path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("failed to create dirs");
        }
        fs::write(&full, content).expect("failed to write file");
    }
}

/// Helper: create a temp workspace containing `files`, then return a
/// Backend that has it as its only workspace folder.
pub fn create_workspace(files: &[(&str, &str)]) -> (Backend, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_files(dir.path(), files);
    let backend =
        Backend::new_test_with_workspace(vec![dir.path().to_path_buf()], Config::default());
    (backend, dir)
}

/// A PHP class file declaring `namespace`.
pub fn php_class(namespace: &str, class: &str) -> String {
    format!("<?php\n\nnamespace {namespace};\n\nclass {class}\n{{\n}}\n")
}

pub fn file_uri(path: &Path) -> Url {
    Url::from_file_path(path).expect("absolute path")
}

pub async fn open_document(backend: &Backend, uri: &Url, text: &str) {
    backend
        .did_open(DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri.clone(),
                language_id: "php".to_string(),
                version: 1,
                text: text.to_string(),
            },
        })
        .await;
}

/// Open `text` at `uri` and request completion at (line, character).
pub async fn complete_at(
    backend: &Backend,
    uri: &Url,
    text: &str,
    line: u32,
    character: u32,
) -> Vec<CompletionItem> {
    open_document(backend, uri, text).await;

    let params = CompletionParams {
        text_document_position: TextDocumentPositionParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
            position: Position { line, character },
        },
        work_done_progress_params: WorkDoneProgressParams::default(),
        partial_result_params: PartialResultParams::default(),
        context: None,
    };

    match backend.completion(params).await.unwrap() {
        Some(CompletionResponse::Array(items)) => items,
        Some(CompletionResponse::List(list)) => list.items,
        None => Vec::new(),
    }
}

/// The text an item would insert, from either its edit or `insert_text`.
pub fn inserted_text(item: &CompletionItem) -> String {
    match &item.text_edit {
        Some(CompletionTextEdit::Edit(edit)) => edit.new_text.clone(),
        Some(CompletionTextEdit::InsertAndReplace(edit)) => edit.new_text.clone(),
        None => item.insert_text.clone().unwrap_or_default(),
    }
}

/// Host that answers prompts from a fixed script and records notices.
#[derive(Default)]
pub struct ScriptedHost {
    answers: Mutex<VecDeque<Option<String>>>,
    pub prompts: Mutex<Vec<InputRequest>>,
    pub notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl ScriptedHost {
    pub fn answering(answers: &[Option<&str>]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.map(str::to_string)).collect()),
            ..Self::default()
        }
    }

    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().clone()
    }
}

#[tower_lsp::async_trait]
impl Host for ScriptedHost {
    async fn prompt(&self, request: InputRequest) -> Option<String> {
        self.prompts.lock().push(request);
        self.answers.lock().pop_front().flatten()
    }

    async fn notify(&self, level: NoticeLevel, message: String) {
        self.notices.lock().push((level, message));
    }
}

/// Every path below `root`, relative and sorted.
pub fn list_tree(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            out.push(path.strip_prefix(root).unwrap().to_path_buf());
            if path.is_dir() {
                stack.push(path);
            }
        }
    }
    out.sort();
    out
}
