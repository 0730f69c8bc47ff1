//! Source and destination path configuration
//!
//! `TemplatePaths` is resolved once at startup and passed immutably to the
//! command implementations. Each template category has its own source root
//! inside the bundled templates directory and its own destination root under
//! the project's `.cursor/` directory.

use std::path::PathBuf;

use crate::error::{ProvisionError, Result};

/// Template category, each with its own source root, destination root,
/// and file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Rules,
    Commands,
}

impl Category {
    /// Fixed processing order: rules first, then commands
    pub const ALL: [Category; 2] = [Category::Rules, Category::Commands];

    /// Directory name under both the templates bundle and `.cursor/`
    pub fn label(self) -> &'static str {
        match self {
            Category::Rules => "rules",
            Category::Commands => "commands",
        }
    }

    /// File extension matched when enumerating this category
    pub fn extension(self) -> &'static str {
        match self {
            Category::Rules => "mdc",
            Category::Commands => "md",
        }
    }
}

/// Resolved source and destination roots for both categories
#[derive(Debug, Clone)]
pub struct TemplatePaths {
    /// Directory containing the bundled `rules/` and `commands/` subdirectories
    pub templates_dir: PathBuf,
    /// Project directory under which `.cursor/` is provisioned
    pub project_dir: PathBuf,
}

impl TemplatePaths {
    pub fn new(templates_dir: PathBuf, project_dir: PathBuf) -> Self {
        Self {
            templates_dir,
            project_dir,
        }
    }

    /// Resolve paths from CLI arguments, falling back to the bundle directory
    /// next to the executable and the current working directory
    pub fn resolve(templates_dir: Option<PathBuf>, project_dir: Option<PathBuf>) -> Result<Self> {
        let templates_dir = match templates_dir {
            Some(dir) => dir,
            None => default_templates_dir()?,
        };
        let project_dir = match project_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| ProvisionError::IoError {
                message: format!("Failed to get current directory: {}", e),
            })?,
        };
        Ok(Self::new(templates_dir, project_dir))
    }

    /// Source root for a category, e.g. `<templates>/rules`
    pub fn source_root(&self, category: Category) -> PathBuf {
        self.templates_dir.join(category.label())
    }

    /// Destination root for a category, e.g. `<project>/.cursor/rules`
    pub fn destination_root(&self, category: Category) -> PathBuf {
        self.project_dir.join(".cursor").join(category.label())
    }
}

/// Templates directory bundled alongside the installed binary
fn default_templates_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| ProvisionError::IoError {
        message: format!("Failed to locate executable: {}", e),
    })?;
    Ok(exe
        .parent()
        .map(|dir| dir.join("templates"))
        .unwrap_or_else(|| PathBuf::from("templates")))
}
