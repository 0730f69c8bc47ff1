//! Template discovery
//!
//! Templates are re-enumerated from the bundled source roots on every
//! invocation; there is no persisted manifest, so the result always reflects
//! the currently installed bundle. A missing source root is an empty bundle,
//! not an error.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::{Category, TemplatePaths};
use crate::error::{ProvisionError, Result};

/// One bundled template file, identified by its path relative to the
/// source root of its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub relative_path: PathBuf,
    pub category: Category,
}

/// Enumerate all bundled templates, rules first, then commands
pub fn enumerate_templates(paths: &TemplatePaths) -> Result<Vec<TemplateEntry>> {
    let mut entries = Vec::new();
    for category in Category::ALL {
        entries.extend(scan_category(paths, category)?);
    }
    Ok(entries)
}

fn scan_category(paths: &TemplatePaths, category: Category) -> Result<Vec<TemplateEntry>> {
    let source_root = paths.source_root(category);
    if !source_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(&source_root)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ProvisionError::ScanFailed {
            path: source_root.display().to_string(),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some(category.extension()) {
            continue;
        }
        let relative_path = entry
            .path()
            .strip_prefix(&source_root)
            .unwrap_or(entry.path())
            .to_path_buf();
        entries.push(TemplateEntry {
            relative_path,
            category,
        });
    }
    Ok(entries)
}
