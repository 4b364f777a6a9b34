/// Module scaffolding.
///
/// `create_module` drives the interactive flow: ask for a module name,
/// derive its namespace, lay out the directory skeleton and write the
/// provider, controller and routes files.  The pure parts (name
/// normalisation, namespace derivation, layout planning) are exposed
/// separately so they can be used without a host.
///
/// There is no rollback.  If a write fails half way, whatever was created
/// before it stays on disk.
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ScaffoldError;
use crate::host::{Host, InputRequest, NoticeLevel};
use crate::templates;
use crate::types::ModuleLayout;

/// Root namespace every scaffolded module lives under.
pub const VENDOR_NAMESPACE: &str = "Webkul";

/// Subdirectories created for every module, relative to its root.
const MODULE_DIRECTORIES: &[&str] = &[
    "src/Database",
    "src/Models",
    "src/Provider",
    "src/Http/Controllers",
    "src/Routes",
];

#[derive(Debug)]
pub enum ScaffoldOutcome {
    /// The prompt was cancelled or left empty; nothing was touched.
    Cancelled,
    /// No workspace folder to create the module in; nothing was touched.
    NoWorkspace,
    Created(ModuleLayout),
    /// Something failed after writing started.  Earlier writes remain.
    Failed(ScaffoldError),
}

/// Capitalise the first character and lower-case the rest: `pOS` → `Pos`.
pub fn normalize_module_name(input: &str) -> Option<String> {
    let input = input.trim();
    let mut chars = input.chars();
    let first = chars.next()?;
    let mut name: String = first.to_uppercase().collect();
    name.push_str(&chars.as_str().to_lowercase());
    Some(name)
}

/// `Pos` → `Webkul\Pos`, `Point of sale` → `Webkul\PointOfSale`.
pub fn derive_namespace(module_name: &str) -> String {
    let studly: String = module_name
        .to_uppercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect();
    format!("{}\\{}", VENDOR_NAMESPACE, studly)
}

/// Work out every directory and file for a module without touching disk.
///
/// `packages_dir` is relative to `workspace_root` (normally
/// `packages/Webkul`).  Returns `None` when the name is empty.
pub fn plan_module(workspace_root: &Path, packages_dir: &Path, input: &str) -> Option<ModuleLayout> {
    let module_name = normalize_module_name(input)?;
    let namespace = derive_namespace(&module_name);
    let root = workspace_root.join(packages_dir).join(&module_name);

    let directories = MODULE_DIRECTORIES.iter().map(|d| root.join(d)).collect();

    let files = vec![
        (
            root.join("src/Provider")
                .join(format!("{}ServiceProvider.php", module_name)),
            templates::service_provider(&namespace, &module_name),
        ),
        (
            root.join("src/Http/Controllers").join("Controller.php"),
            templates::controller(&namespace),
        ),
        (
            root.join("src/Routes").join("web.php"),
            templates::routes(&namespace, &module_name),
        ),
    ];

    Some(ModuleLayout {
        module_name,
        namespace,
        root,
        directories,
        files,
    })
}

/// Create the directories, then write the files, stopping at the first
/// failure.
pub fn write_layout(layout: &ModuleLayout) -> Result<(), ScaffoldError> {
    for dir in &layout.directories {
        std::fs::create_dir_all(dir).map_err(|source| ScaffoldError::CreateDir {
            path: dir.clone(),
            source,
        })?;
    }

    for (path, content) in &layout.files {
        std::fs::write(path, content).map_err(|source| ScaffoldError::WriteFile {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}

/// The interactive `extension.createModule` flow.
///
/// The module is created under the first workspace folder.
pub async fn create_module(
    host: &dyn Host,
    workspace_folders: &[PathBuf],
    config: &Config,
) -> ScaffoldOutcome {
    let request = InputRequest::new("Enter the Module Name").with_placeholder("e.g., POS");
    let Some(input) = host.prompt(request).await else {
        return ScaffoldOutcome::Cancelled;
    };

    let Some(workspace_root) = workspace_folders.first() else {
        host.notify(
            NoticeLevel::Error,
            "Please open a workspace folder first.".to_string(),
        )
        .await;
        return ScaffoldOutcome::NoWorkspace;
    };

    let Some(layout) = plan_module(workspace_root, &config.packages_dir, &input) else {
        return ScaffoldOutcome::Cancelled;
    };

    match write_layout(&layout) {
        Ok(()) => {
            tracing::info!(root = %layout.root.display(), "module created");
            host.notify(
                NoticeLevel::Info,
                format!("Module \"{}\" created successfully!", layout.module_name),
            )
            .await;
            ScaffoldOutcome::Created(layout)
        }
        Err(e) => {
            tracing::error!("{e}");
            host.notify(
                NoticeLevel::Error,
                "An error occurred while creating the module.".to_string(),
            )
            .await;
            ScaffoldOutcome::Failed(e)
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_module_name() {
        assert_eq!(normalize_module_name("pos").as_deref(), Some("Pos"));
        assert_eq!(normalize_module_name("POS").as_deref(), Some("Pos"));
        assert_eq!(normalize_module_name("  blog ").as_deref(), Some("Blog"));
        assert_eq!(normalize_module_name("   "), None);
        assert_eq!(normalize_module_name(""), None);
    }

    #[test]
    fn test_derive_namespace() {
        assert_eq!(derive_namespace("Pos"), "Webkul\\Pos");
        assert_eq!(derive_namespace("Point of sale"), "Webkul\\PointOfSale");
        assert_eq!(derive_namespace("Point  of   sale"), "Webkul\\PointOfSale");
    }
}
