/// Class importer: `wk` + a two-letter code → `use` statements.
///
/// The code selects a directory suffix (`re` → `Repositories`, ...).  Every
/// directory under each workspace's package root whose name ends with that
/// suffix is searched for `.php` files, and each file with a `namespace`
/// declaration becomes one `use Namespace\ClassName;` suggestion.
use std::path::PathBuf;

use regex::Regex;
use tower_lsp::lsp_types::*;

use super::{TriggerContext, markdown, trigger_item};
use crate::config::Config;
use crate::scanner;
use crate::walker;

/// The fully-qualified names importable for a directory suffix, across all
/// workspace folders, in walk order.  Duplicates are kept.
pub fn import_candidates(
    workspace_folders: &[PathBuf],
    config: &Config,
    directory_suffix: &str,
) -> Vec<String> {
    let Ok(pattern) = Regex::new(&format!("{}$", regex::escape(directory_suffix))) else {
        return Vec::new();
    };

    let mut candidates = Vec::new();

    for folder in workspace_folders {
        let base = config.packages_root(folder);
        if !base.is_dir() {
            continue;
        }

        for dir in walker::find_directories(&base, &pattern) {
            for file in walker::find_php_files(&dir) {
                if let Some(fqn) = scanner::namespace_from_file(&file) {
                    candidates.push(fqn);
                }
            }
        }
    }

    tracing::debug!(
        suffix = directory_suffix,
        count = candidates.len(),
        "import candidates"
    );

    candidates
}

pub fn suggest(ctx: &TriggerContext<'_>, config: &Config) -> Vec<CompletionItem> {
    let Some(code) = ctx.keyword_code() else {
        return Vec::new();
    };
    let Some(directory_suffix) = config.keyword_directory(&code) else {
        return Vec::new();
    };
    if ctx.workspace_folders.is_empty() {
        return Vec::new();
    }

    import_candidates(ctx.workspace_folders, config, directory_suffix)
        .into_iter()
        .map(|fqn| {
            let statement = format!("use {};", fqn);
            let mut item = trigger_item(
                ctx,
                statement.clone(),
                CompletionItemKind::SNIPPET,
                statement,
                InsertTextFormat::PLAIN_TEXT,
            );
            item.documentation = Some(markdown(format!("Namespace: {}", fqn)));
            item
        })
        .collect()
}
