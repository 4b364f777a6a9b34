/// Events: `wkev` → listener snippets for every event fired in the packages.
///
/// Every `.php` file under each workspace's package root is read and
/// scanned, so this is the one assembler whose cost grows with the size
/// of the project.  The cursor position only matters for the trigger.
use std::path::PathBuf;

use tower_lsp::lsp_types::*;

use super::{TriggerContext, trigger_item};
use crate::config::Config;
use crate::scanner;
use crate::types::EventDescriptor;
use crate::walker;

const TRIGGER: &str = "wkev";

/// All event call sites across the workspace package roots.  Missing roots
/// and unreadable files are skipped.
pub fn collect_events(workspace_folders: &[PathBuf], config: &Config) -> Vec<EventDescriptor> {
    let roots: Vec<PathBuf> = workspace_folders
        .iter()
        .map(|folder| config.packages_root(folder))
        .collect();

    let mut events = Vec::new();
    for file in walker::find_files_under(&roots, "php") {
        let Ok(content) = std::fs::read_to_string(&file) else {
            continue;
        };
        events.extend(scanner::extract_events(&content));
    }

    tracing::debug!(count = events.len(), "collected events");
    events
}

pub fn suggest(ctx: &TriggerContext<'_>, config: &Config) -> Vec<CompletionItem> {
    if !config.events || !ctx.line.contains(TRIGGER) {
        return Vec::new();
    }

    collect_events(ctx.workspace_folders, config)
        .into_iter()
        .map(|event| {
            let mut item = trigger_item(
                ctx,
                event.label,
                CompletionItemKind::SNIPPET,
                event.insert_text,
                InsertTextFormat::SNIPPET,
            );
            item.detail = Some("Bagisto Events".to_string());
            item
        })
        .collect()
}
