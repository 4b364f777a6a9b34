/// Completion request orchestration.
///
/// `handle_completion` is called by `LanguageServer::completion`.  It builds
/// a [`TriggerContext`] for the cursor, runs every assembler, and returns
/// their concatenated results.  The assemblers' preconditions are mostly
/// disjoint, so in practice at most one of them contributes.
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

use super::{TriggerContext, class_template, events, imports, injection};
use crate::Backend;
use crate::util::{line_at, position_to_offset, word_at_position};

impl Backend {
    pub(crate) async fn handle_completion(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        if uri.scheme() != "file" {
            return Ok(None);
        }

        let Some(document) = self.open_files.read().get(uri.as_str()).cloned() else {
            return Ok(None);
        };
        if !document.is_php {
            return Ok(None);
        }

        let workspace_folders = self.workspace_folders.read().clone();
        let config = self.config.read().clone();
        let file_path = uri.to_file_path().ok();

        let Some(line) = line_at(&document.text, position.line) else {
            return Ok(None);
        };

        let ctx = TriggerContext {
            text: &document.text,
            file_path: file_path.as_deref(),
            line,
            offset: position_to_offset(&document.text, position),
            word: word_at_position(&document.text, position),
            workspace_folders: &workspace_folders,
        };

        let mut items = imports::suggest(&ctx, &config);
        items.extend(injection::suggest(&ctx));
        items.extend(events::suggest(&ctx, &config));
        items.extend(class_template::suggest(&ctx));

        if items.is_empty() {
            return Ok(None);
        }

        // Keep the assembled order; clients otherwise sort by label.
        for (i, item) in items.iter_mut().enumerate() {
            item.sort_text = Some(format!("{:05}", i));
        }

        tracing::debug!(uri = %uri, count = items.len(), "completion");

        Ok(Some(CompletionResponse::Array(items)))
    }
}
