/// LSP server trait implementation.
///
/// This module contains the `impl LanguageServer for Backend` block, which
/// handles the protocol messages (initialize, didOpen, didChange, didClose,
/// completion, executeCommand, workspace folder changes).
use std::path::PathBuf;

use serde_json::Value;
use tower_lsp::LanguageServer;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

use crate::commands::COMMANDS;
use crate::config::Config;
use crate::{Backend, OpenDocument};

/// Workspace folders from `initialize`, falling back to `rootUri`.
#[allow(deprecated)]
fn initial_workspace_folders(params: &InitializeParams) -> Vec<PathBuf> {
    if let Some(folders) = &params.workspace_folders
        && !folders.is_empty()
    {
        return folders
            .iter()
            .filter_map(|f| f.uri.to_file_path().ok())
            .collect();
    }

    params
        .root_uri
        .as_ref()
        .and_then(|uri| uri.to_file_path().ok())
        .into_iter()
        .collect()
}

fn is_php_document(uri: &Url, language_id: &str) -> bool {
    language_id == "php" || uri.path().ends_with(".php")
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let folders = initial_workspace_folders(&params);
        let config = Config::load(folders.first().map(PathBuf::as_path));

        *self.workspace_folders.write() = folders;
        *self.config.write() = config;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    ..CompletionOptions::default()
                }),
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                }),
                workspace: Some(WorkspaceServerCapabilities {
                    workspace_folders: Some(WorkspaceFoldersServerCapabilities {
                        supported: Some(true),
                        change_notifications: Some(OneOf::Left(true)),
                    }),
                    file_operations: None,
                }),
                ..ServerCapabilities::default()
            },
            server_info: Some(ServerInfo {
                name: self.name().to_string(),
                version: Some(self.version().to_string()),
            }),
            offset_encoding: None,
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        let folders = self.workspace_folders();
        let packages = self.config.read().packages_dir.clone();

        tracing::info!(folders = folders.len(), "initialized");
        self.log(
            MessageType::INFO,
            format!(
                "WebkulLSP initialized! {} workspace folder(s), packages in {}",
                folders.len(),
                packages.display()
            ),
        )
        .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        let is_php = is_php_document(&doc.uri, &doc.language_id);
        let uri = doc.uri.to_string();

        self.open_files.write().insert(
            uri.clone(),
            OpenDocument {
                text: doc.text,
                is_php,
            },
        );

        tracing::debug!(uri = %uri, is_php, "opened");
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri.to_string();

        // Full sync: the last change carries the whole document.
        if let Some(change) = params.content_changes.into_iter().last()
            && let Some(doc) = self.open_files.write().get_mut(&uri)
        {
            doc.text = change.text;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri.to_string();
        self.open_files.write().remove(&uri);
        tracing::debug!(uri = %uri, "closed");
    }

    async fn did_change_workspace_folders(&self, params: DidChangeWorkspaceFoldersParams) {
        let mut folders = self.workspace_folders.write();

        for removed in &params.event.removed {
            if let Ok(path) = removed.uri.to_file_path() {
                folders.retain(|f| f != &path);
            }
        }
        for added in &params.event.added {
            if let Ok(path) = added.uri.to_file_path()
                && !folders.contains(&path)
            {
                folders.push(path);
            }
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        self.handle_completion(params).await
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        self.handle_execute_command(params).await
    }
}
