/// Class generator: `wkcl` → a class skeleton for the current file.
use tower_lsp::lsp_types::*;

use super::{TriggerContext, markdown, trigger_item};
use crate::templates;

const CLASS_CODE: &str = "cl";

pub fn suggest(ctx: &TriggerContext<'_>) -> Vec<CompletionItem> {
    if ctx.keyword_code().as_deref() != Some(CLASS_CODE) {
        return Vec::new();
    }
    let Some(path) = ctx.file_path else {
        return Vec::new();
    };
    let Ok(class) = templates::class_template_for_path(path) else {
        return Vec::new();
    };

    let mut item = trigger_item(
        ctx,
        format!("Webkul : Class {}", class.class_name),
        CompletionItemKind::SNIPPET,
        class.template,
        InsertTextFormat::PLAIN_TEXT,
    );
    item.detail = Some(format!("Class {} ({})", class.class_name, path.display()));
    item.documentation = Some(markdown(format!(
        "Generate a class template with namespace **{}** and class name **{}**.",
        class.namespace, class.class_name
    )));

    vec![item]
}
