/// Dependency injection: `wkpr` inside a constructor parameter list.
///
/// Offers one promoted `protected` parameter for every class imported by a
/// `use` statement that the constructor does not inject yet.  Imports and
/// injected types are compared by short name.
use tower_lsp::lsp_types::*;

use super::{TriggerContext, markdown, trigger_item};
use crate::scanner;
use crate::util::{lcfirst, short_name};

const TRIGGER: &str = "wkpr";

/// Imported names not yet present among the constructor's promoted
/// parameters, in import order.
pub fn uninjected_imports(text: &str) -> Vec<String> {
    let injected: Vec<String> = scanner::parse_constructor_injected(text)
        .iter()
        .map(|t| short_name(t).to_string())
        .collect();

    scanner::parse_use_statements(text)
        .into_iter()
        .filter(|import| !injected.iter().any(|i| i == short_name(import)))
        .collect()
}

pub fn suggest(ctx: &TriggerContext<'_>) -> Vec<CompletionItem> {
    if !ctx.line.contains(TRIGGER) {
        return Vec::new();
    }
    if !scanner::is_in_constructor_params(ctx.text, ctx.offset) {
        return Vec::new();
    }

    uninjected_imports(ctx.text)
        .into_iter()
        .map(|fqn| {
            let class_name = short_name(&fqn);
            let parameter = format!("protected {} ${}", class_name, lcfirst(class_name));

            let mut item = trigger_item(
                ctx,
                format!("Webkul:{}", parameter),
                CompletionItemKind::CLASS,
                format!("{},", parameter),
                InsertTextFormat::PLAIN_TEXT,
            );
            item.detail = Some(format!("protected {}", fqn));
            item.documentation = Some(markdown(format!(
                "Insert protected dependency for {}.",
                fqn
            )));
            item
        })
        .collect()
}
