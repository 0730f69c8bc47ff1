//! Common test utilities for cursor-rules integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A test fixture holding a templates bundle and a project directory
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the fixture root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new fixture with empty templates and project directories
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("templates")).expect("Failed to create templates dir");
        std::fs::create_dir_all(path.join("project")).expect("Failed to create project dir");
        Self { temp, path }
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.path.join("templates")
    }

    pub fn project_dir(&self) -> PathBuf {
        self.path.join("project")
    }

    /// Add a bundled template under templates/<category>/<relative>
    pub fn add_template(&self, category: &str, relative: &str, content: &str) {
        let file_path = self.templates_dir().join(category).join(relative);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create template parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write template");
    }

    /// Write a file in the project directory
    pub fn write_project_file(&self, relative: &str, content: &str) {
        let file_path = self.project_dir().join(relative);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project directory
    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_dir().join(relative)).expect("Failed to read file")
    }

    /// Check if a path exists in the project directory
    pub fn project_path_exists(&self, relative: &str) -> bool {
        self.project_dir().join(relative).exists()
    }
}

/// Build a cursor-rules command pinned to the fixture's directories
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn cursor_rules_cmd(fixture: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("cursor-rules").expect("Failed to find cursor-rules binary");
    cmd.arg("--templates-dir")
        .arg(fixture.templates_dir())
        .arg("--project")
        .arg(fixture.project_dir());
    cmd
}
