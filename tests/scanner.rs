use std::path::Path;

use webkul_lsp::scanner::{
    constructor_span, extract_events, is_in_constructor_params, namespace_from_file,
    namespace_from_source, parse_constructor_injected, parse_use_statements,
};
use webkul_lsp::types::EventKind;

// ─── use statements ─────────────────────────────────────────────────────────

#[test]
fn test_simple_use_statement() {
    let text = "<?php\n\nuse Foo\\Bar\\Baz;\n";
    assert_eq!(parse_use_statements(text), vec!["Foo\\Bar\\Baz"]);
}

#[test]
fn test_grouped_use_statement() {
    let text = "<?php\nuse Foo\\{Bar, Baz};\n";
    assert_eq!(parse_use_statements(text), vec!["Foo\\Bar", "Foo\\Baz"]);
}

#[test]
fn test_aliased_use_statement() {
    let text = "<?php\nuse Foo\\Bar as Qux;\n";
    assert_eq!(parse_use_statements(text), vec!["Qux"]);
}

#[test]
fn test_grouped_member_alias() {
    let text = "use Webkul\\Product\\{Repositories\\ProductRepository as Products, Models\\Product};\n";
    assert_eq!(
        parse_use_statements(text),
        vec!["Products", "Webkul\\Product\\Models\\Product"]
    );
}

#[test]
fn test_mixed_use_statements_in_order() {
    let text = r#"<?php

namespace Webkul\Shop\Http\Controllers;

use Illuminate\Http\Request;
use Webkul\Product\Repositories\ProductRepository;
use Webkul\Core\{Core, Tree as CoreTree};
use Webkul\Checkout\Facades\Cart as CartFacade;

class ProductController extends Controller
{
}
"#;
    assert_eq!(
        parse_use_statements(text),
        vec![
            "Illuminate\\Http\\Request",
            "Webkul\\Product\\Repositories\\ProductRepository",
            "Webkul\\Core\\Core",
            "CoreTree",
            "CartFacade",
        ]
    );
}

#[test]
fn test_duplicate_use_statements_are_kept() {
    let text = "use Foo\\Bar;\nuse Foo\\Bar;\n";
    assert_eq!(parse_use_statements(text), vec!["Foo\\Bar", "Foo\\Bar"]);
}

#[test]
fn test_malformed_use_yields_nothing() {
    assert!(parse_use_statements("use Foo\\Bar\n").is_empty());
    assert!(parse_use_statements("<?php echo 'use Foo;';").is_empty());
    assert!(parse_use_statements("").is_empty());
}

// ─── constructor ────────────────────────────────────────────────────────────

#[test]
fn test_injected_parameter() {
    let text = "class A {\n    public function __construct(protected Bar $bar) {}\n}";
    assert_eq!(parse_constructor_injected(text), vec!["Bar"]);
}

#[test]
fn test_injected_parameters_multiline() {
    let text = r#"class ProductController
{
    public function __construct(
        protected ProductRepository $productRepository,
        private readonly \Webkul\Core\Core $core,
        public ?Cart $cart,
        string $plain
    ) {
    }
}
"#;
    assert_eq!(
        parse_constructor_injected(text),
        vec!["ProductRepository", "\\Webkul\\Core\\Core", "Cart"]
    );
}

#[test]
fn test_injected_only_looks_at_first_constructor() {
    let text = "function __construct(protected A $a) {}\nfunction __construct(protected B $b) {}";
    assert_eq!(parse_constructor_injected(text), vec!["A"]);
}

#[test]
fn test_no_constructor_means_nothing_injected() {
    assert!(parse_constructor_injected("class A { public function index() {} }").is_empty());
}

#[test]
fn test_cursor_inside_constructor_parameters() {
    let text = "<?php\nclass A\n{\n    public function __construct(\n        wkpr\n    ) {}\n}\n";
    let wkpr = text.find("wkpr").unwrap();
    assert!(is_in_constructor_params(text, wkpr));
    assert!(is_in_constructor_params(text, wkpr + 4));

    let class_line = text.find("class").unwrap();
    assert!(!is_in_constructor_params(text, class_line));

    let after = text.rfind('}').unwrap();
    assert!(!is_in_constructor_params(text, after));
}

#[test]
fn test_constructor_span_requires_public_function() {
    assert!(constructor_span("function __construct($a) {}").is_none());
    assert!(constructor_span("public  function\n__construct ( $a )").is_some());
}

// ─── namespace from file ────────────────────────────────────────────────────

#[test]
fn test_namespace_from_source() {
    let content = "<?php\n\nnamespace Webkul\\Product\\Repositories;\n\nclass ProductRepository {}\n";
    let path = Path::new("/w/packages/Webkul/Product/src/Repositories/ProductRepository.php");
    assert_eq!(
        namespace_from_source(content, path).as_deref(),
        Some("Webkul\\Product\\Repositories\\ProductRepository")
    );
}

#[test]
fn test_namespace_missing() {
    let path = Path::new("/w/helpers.php");
    assert!(namespace_from_source("<?php\nfunction core() {}\n", path).is_none());
}

#[test]
fn test_namespace_from_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(namespace_from_file(&dir.path().join("missing.php")).is_none());
}

#[test]
fn test_namespace_from_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Core.php");
    std::fs::write(&path, "<?php\nnamespace Webkul\\Core;\nclass Core {}\n").unwrap();
    assert_eq!(
        namespace_from_file(&path).as_deref(),
        Some("Webkul\\Core\\Core")
    );
}

// ─── events ─────────────────────────────────────────────────────────────────

#[test]
fn test_render_event() {
    let events = extract_events("{!! view_render_event('theme::partial') !!}");
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.kind, EventKind::Render);
    assert_eq!(event.event_name, "theme::partial");
    assert_eq!(event.parameter, None);
    assert!(event.label.starts_with("Webkul Event Rander:theme::partial"));
    assert!(event.insert_text.contains("Event::listen('theme::partial'"));
    assert!(event.insert_text.contains("addTemplate('')"));
}

#[test]
fn test_render_event_with_parameter() {
    let events = extract_events(
        "{!! view_render_event('bagisto.shop.products.view.before', ['product' => $product]) !!}",
    );
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].parameter.as_deref(),
        Some("['product' => $product]")
    );
    assert_eq!(
        events[0].label,
        "Webkul Event Rander:bagisto.shop.products.view.before | ['product' => $product]"
    );
}

#[test]
fn test_dispatch_event() {
    let events = extract_events("Event::dispatch('checkout.order.save.after', $order);");
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.kind, EventKind::Dispatch);
    assert_eq!(event.event_name, "checkout.order.save.after");
    assert_eq!(event.parameter.as_deref(), Some("$order"));
    assert_eq!(
        event.label,
        "Webkul Event Dispatch: checkout.order.save.after | $order"
    );
    assert_eq!(
        event.insert_text,
        "Event::listen('checkout.order.save.after', );"
    );
}

#[test]
fn test_render_events_come_before_dispatch_events() {
    let content = r#"
Event::dispatch('a.dispatch');
view_render_event('b.render');
Event::dispatch('a.dispatch');
"#;
    let names: Vec<_> = extract_events(content)
        .into_iter()
        .map(|e| (e.kind, e.event_name))
        .collect();
    assert_eq!(
        names,
        vec![
            (EventKind::Render, "b.render".to_string()),
            (EventKind::Dispatch, "a.dispatch".to_string()),
            (EventKind::Dispatch, "a.dispatch".to_string()),
        ]
    );
}

#[test]
fn test_double_quoted_events_are_not_matched() {
    assert!(extract_events("Event::dispatch(\"a.b\");").is_empty());
}
