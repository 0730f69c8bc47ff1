//! Clean command implementation
//!
//! Removes previously provisioned template files from the destination roots.
//! Only files present in the current bundle enumeration are candidates for
//! deletion; user-added files are never touched. Destination roots that end
//! up empty are removed, roots holding other files are kept.

use std::path::Path;

use console::Style;

use crate::config::{Category, TemplatePaths};
use crate::error::{ProvisionError, Result};
use crate::templates::enumerate_templates;

/// Run clean command
pub fn run(paths: &TemplatePaths) -> Result<()> {
    println!(
        "{}",
        Style::new().bold().apply_to("Cleaning Cursor templates")
    );

    let entries = enumerate_templates(paths)?;
    if entries.is_empty() {
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("No template files found to clean")
        );
        return Ok(());
    }

    let mut removed_count = 0usize;
    let mut not_found_count = 0usize;

    for entry in &entries {
        let target = paths
            .destination_root(entry.category)
            .join(&entry.relative_path);
        if target.exists() {
            std::fs::remove_file(&target).map_err(|e| ProvisionError::RemoveFailed {
                path: target.display().to_string(),
                reason: e.to_string(),
            })?;
            println!(
                "  {} {} (from .cursor/{})",
                Style::new().green().apply_to("Removed:"),
                entry.relative_path.display(),
                entry.category.label()
            );
            removed_count += 1;
        } else {
            println!(
                "  {} {}",
                Style::new().dim().apply_to("Not found:"),
                entry.relative_path.display()
            );
            not_found_count += 1;
        }
    }

    for category in Category::ALL {
        prune_destination_root(paths, category)?;
    }

    println!();
    println!("{}", Style::new().green().apply_to("Cleanup complete"));
    println!("  Removed: {} file(s)", removed_count);
    println!("  Not found: {} file(s)", not_found_count);

    Ok(())
}

/// Remove a destination root if nothing but empty directories remain in it,
/// otherwise report it kept
fn prune_destination_root(paths: &TemplatePaths, category: Category) -> Result<()> {
    let root = paths.destination_root(category);
    if !root.exists() {
        return Ok(());
    }

    if prune_empty_subdirs(&root)? {
        std::fs::remove_dir(&root).map_err(|e| ProvisionError::RemoveFailed {
            path: root.display().to_string(),
            reason: e.to_string(),
        })?;
        println!("  Removed empty directory: {}", root.display());
    } else {
        println!("  Directory {} kept (contains other files)", root.display());
    }
    Ok(())
}

/// Delete empty subdirectories bottom-up. Returns true if `dir` itself is
/// empty afterwards. Any remaining file blocks removal of every ancestor.
fn prune_empty_subdirs(dir: &Path) -> Result<bool> {
    let read_dir_error = |e: std::io::Error| ProvisionError::ReadDirFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    };

    let mut is_empty = true;
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();
        if path.is_dir() {
            if prune_empty_subdirs(&path)? {
                std::fs::remove_dir(&path).map_err(|e| ProvisionError::RemoveFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            } else {
                is_empty = false;
            }
        } else {
            is_empty = false;
        }
    }
    Ok(is_empty)
}
