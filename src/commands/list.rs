//! List command implementation
//!
//! Prints the bundled templates without touching the filesystem beyond the
//! enumeration itself. Entries are numbered contiguously from 1, rules
//! before commands, each tagged with its category.

use console::Style;

use crate::config::TemplatePaths;
use crate::error::Result;
use crate::templates::enumerate_templates;

/// Run list command
pub fn run(paths: &TemplatePaths) -> Result<()> {
    let entries = enumerate_templates(paths)?;

    println!(
        "{}",
        Style::new().bold().apply_to("Available Cursor templates:")
    );

    if entries.is_empty() {
        println!(
            "{}",
            Style::new().yellow().apply_to("No template files found")
        );
        return Ok(());
    }

    for (index, entry) in entries.iter().enumerate() {
        println!(
            "  {}. {} ({})",
            index + 1,
            entry.relative_path.display(),
            Style::new().cyan().apply_to(entry.category.label())
        );
    }

    Ok(())
}
