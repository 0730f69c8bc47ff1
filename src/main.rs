//! cursor-rules - Cursor template provisioner
//!
//! A command line tool that copies the rule and command templates bundled
//! with the tool into a project's `.cursor/` directory, lists them, and
//! removes previously provisioned copies while leaving user-added files
//! untouched.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod templates;

use cli::{Cli, Commands};
use config::TemplatePaths;
use error::Result;

fn main() {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        print_banner();
        return;
    };

    let result = run_command(command, cli.templates_dir, cli.project);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_command(
    command: Commands,
    templates_dir: Option<std::path::PathBuf>,
    project: Option<std::path::PathBuf>,
) -> Result<()> {
    let paths = TemplatePaths::resolve(templates_dir, project)?;

    match command {
        Commands::Apply => commands::apply::run(&paths),
        Commands::List => commands::list::run(&paths),
        Commands::Clean => commands::clean::run(&paths),
    }
}

fn print_banner() {
    println!("cursor-rules - Cursor template provisioner");
    println!();
    println!("Available commands:");
    println!("  apply   Copy all bundled templates into .cursor/rules and .cursor/commands");
    println!("  list    List available templates");
    println!("  clean   Remove previously provisioned templates");
    println!();
    println!("Use --help for more information.");
}
