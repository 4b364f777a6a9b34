/// Recursive directory traversal.
///
/// Every walk descends from its roots without a depth limit and without
/// following symlinks.  Any entry that cannot be read (permission denied,
/// vanished while walking, root missing altogether) is skipped: a partial
/// result is more useful to a completion request than an error.
///
/// Hidden and git-ignored entries are included; the workspace layout rather
/// than VCS state decides what is importable.
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use regex::Regex;

/// A walker over one or more roots, visited in the order given.  Returns
/// `None` when `roots` is empty.
fn build_walker<P: AsRef<Path>>(roots: &[P]) -> Option<WalkBuilder> {
    let (first, rest) = roots.split_first()?;
    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }
    builder.standard_filters(false);
    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));
    Some(builder)
}

/// Every directory below `root` whose name matches `name_pattern`.
///
/// The root itself is never returned.  Matching directories are still
/// descended into, so nested matches are reported too.
pub fn find_directories(root: &Path, name_pattern: &Regex) -> Vec<PathBuf> {
    let mut directories = Vec::new();
    let Some(walker) = build_walker(&[root]) else {
        return directories;
    };

    for entry in walker.build() {
        let Ok(entry) = entry else {
            continue;
        };

        if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }

        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| name_pattern.is_match(name))
        {
            directories.push(entry.into_path());
        }
    }

    directories
}

/// Every regular file below `root` whose name ends with `.{extension}`.
pub fn find_files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    find_files_under(&[root], extension)
}

/// Like [`find_files_with_extension`] over several roots in one walk.
/// Roots that are missing or unreadable contribute nothing; the others are
/// still walked.
pub fn find_files_under<P: AsRef<Path>>(roots: &[P], extension: &str) -> Vec<PathBuf> {
    let suffix = format!(".{}", extension);
    let mut files = Vec::new();
    let Some(walker) = build_walker(roots) else {
        return files;
    };

    for entry in walker.build() {
        let Ok(entry) = entry else {
            tracing::debug!("skipping unreadable entry");
            continue;
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(&suffix))
        {
            files.push(entry.into_path());
        }
    }

    files
}

/// Shorthand for `find_files_with_extension(root, "php")`.
pub fn find_php_files(root: &Path) -> Vec<PathBuf> {
    find_files_with_extension(root, "php")
}
