//! Apply command implementation
//!
//! Copies every bundled template into the project's destination roots,
//! overwriting existing copies unconditionally. Partial copies from an
//! aborted run are left in place; re-running heals them.

use console::Style;

use crate::config::{Category, TemplatePaths};
use crate::error::{ProvisionError, Result};
use crate::templates::{TemplateEntry, enumerate_templates};

/// Run apply command
pub fn run(paths: &TemplatePaths) -> Result<()> {
    println!(
        "{}",
        Style::new().bold().apply_to("Provisioning Cursor templates")
    );

    for category in Category::ALL {
        let destination_root = paths.destination_root(category);
        std::fs::create_dir_all(&destination_root).map_err(|e| {
            ProvisionError::CreateDirFailed {
                path: destination_root.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        println!("  Created directory: {}", destination_root.display());
    }

    let entries = enumerate_templates(paths)?;
    if entries.is_empty() {
        println!(
            "{}",
            Style::new().yellow().apply_to("No template files found")
        );
        return Ok(());
    }

    println!("Found {} template file(s):", entries.len());
    for entry in &entries {
        copy_template(paths, entry)?;
        println!(
            "  {} {} (from {} to .cursor/{})",
            Style::new().green().apply_to("Copied:"),
            entry.relative_path.display(),
            entry.category.label(),
            entry.category.label()
        );
    }

    let rules_count = entries
        .iter()
        .filter(|e| e.category == Category::Rules)
        .count();
    let commands_count = entries.len() - rules_count;

    println!();
    println!(
        "{}",
        Style::new()
            .green()
            .apply_to("Successfully copied template files:")
    );
    println!(
        "  Rules: {} file(s) to {}",
        rules_count,
        paths.destination_root(Category::Rules).display()
    );
    println!(
        "  Commands: {} file(s) to {}",
        commands_count,
        paths.destination_root(Category::Commands).display()
    );

    Ok(())
}

/// Copy one template to its destination, creating intermediate directories
fn copy_template(paths: &TemplatePaths, entry: &TemplateEntry) -> Result<()> {
    let source = paths.source_root(entry.category).join(&entry.relative_path);
    let target = paths
        .destination_root(entry.category)
        .join(&entry.relative_path);

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ProvisionError::CreateDirFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::copy(&source, &target)
        .map(|_| ())
        .map_err(|e| ProvisionError::CopyFailed {
            path: target.display().to_string(),
            reason: e.to_string(),
        })
}
