/// PHP file templates.
///
/// Plain string interpolation.  Names and namespaces are inserted verbatim;
/// callers are responsible for passing valid PHP identifiers.
use std::path::{Component, Path};

use crate::error::TemplateError;
use crate::types::ClassTemplate;

/// `src/Provider/<Module>ServiceProvider.php`
pub fn service_provider(namespace: &str, module_name: &str) -> String {
    format!(
        r#"<?php

namespace {namespace}\Provider;

use Illuminate\Support\ServiceProvider;

class {module_name}ServiceProvider extends ServiceProvider
{{
    public function register()
    {{
        // Register services
    }}

    public function boot()
    {{
        // Boot services
    }}
}}
"#
    )
}

/// `src/Http/Controllers/Controller.php`
pub fn controller(namespace: &str) -> String {
    format!(
        r#"<?php

namespace {namespace}\Http\Controllers;

use Illuminate\Http\Request;

class Controller
{{
    public function index(Request $request)
    {{
        return response()->json(['message' => 'Hello from the controller']);
    }}
}}
"#
    )
}

/// `src/Routes/web.php`
pub fn routes(namespace: &str, module_name: &str) -> String {
    let slug = module_name.to_lowercase();
    format!(
        r#"<?php

use Illuminate\Support\Facades\Route;

Route::get('/{slug}', [\{namespace}\Http\Controllers\Controller::class, 'index']);
"#
    )
}

/// An empty class in the given namespace.
pub fn class_skeleton(namespace: &str, class_name: &str) -> String {
    format!(
        r#"<?php

namespace {namespace};

class {class_name}
{{
}}
"#
    )
}

/// Derive a class skeleton from where the file sits in the package tree.
///
/// `.../packages/Webkul/Shop/src/Http/Foo.php` becomes class `Foo` in
/// `Webkul\Shop\Http`: every directory after the first `packages` component
/// is a namespace segment except `src`.  Both names are compared
/// case-insensitively.
pub fn class_template_for_path(file_path: &Path) -> Result<ClassTemplate, TemplateError> {
    if file_path.as_os_str().is_empty() {
        return Err(TemplateError::EmptyPath);
    }

    let parts: Vec<&str> = file_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    let packages_index = parts
        .iter()
        .position(|part| part.eq_ignore_ascii_case("packages"))
        .ok_or_else(|| TemplateError::NoPackagesDirectory(file_path.to_path_buf()))?;

    let last_dir = (parts.len() - 1).max(packages_index + 1);
    let namespace = parts[packages_index + 1..last_dir]
        .iter()
        .filter(|part| !part.eq_ignore_ascii_case("src"))
        .copied()
        .collect::<Vec<_>>()
        .join("\\");

    let file_name = parts.last().copied().unwrap_or_default();
    let class_name = file_name.strip_suffix(".php").unwrap_or(file_name).to_string();

    let template = class_skeleton(&namespace, &class_name);

    Ok(ClassTemplate {
        namespace,
        class_name,
        template,
    })
}

// ─── Tests ──────────────────────────────────────────────────────────────────
