//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cursor-rules - Cursor template provisioner
///
/// Copies the bundled rule and command templates into a project's `.cursor/`
/// directory, lists them, and removes previously provisioned copies.
#[derive(Parser, Debug)]
#[command(
    name = "cursor-rules",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Provision Cursor rule and command templates",
    long_about = "cursor-rules copies the rule and command templates bundled with the tool \
                  into a project's .cursor/rules and .cursor/commands directories, lists the \
                  available templates, and removes previously provisioned copies while \
                  leaving user-added files untouched.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  cursor-rules apply\n    \
                  cursor-rules list\n    \
                  cursor-rules clean\n    \
                  cursor-rules apply --project ./my-project"
)]
pub struct Cli {
    /// Project directory to provision into (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Directory containing the bundled templates
    #[arg(long, global = true, env = "CURSOR_RULES_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy all bundled templates into the project's .cursor directory
    #[command(visible_alias = "copy")]
    Apply,

    /// List available templates
    List,

    /// Remove previously provisioned templates
    Clean,
}
