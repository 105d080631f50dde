//! # ccw
//!
//! CLI for CodeCompanion workspaces: scaffolds a new workspace config and
//! compiles the YAML config into the `codecompanion-workspace.json` artifact
//! the editor integration consumes.
//!
//! ## Usage
//!
//! ```bash
//! # Scaffold .cc/ and compile the default template
//! ccw init .
//!
//! # Scaffold without compiling
//! ccw init . --skip-compile
//!
//! # Compile an existing config
//! ccw compile .cc/codecompanion.yaml
//!
//! # Compile to a custom location
//! ccw compile .cc/codecompanion.yaml --output build/workspace.json
//! ```
//!
//! All the interesting work (ignore-rule resolution, glob discovery,
//! deterministic document assembly) lives in ccwlib; this crate is argument
//! parsing, scaffolding, and user-facing messages.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::bail;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;

mod scaffold;
mod templates;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("ccw")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Compile CodeCompanion workspace configs from YAML to JSON")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("init")
                .about("Initialize a new CodeCompanion workspace")
                .arg(
                    Arg::new("path")
                        .help("Project path (defaults to current directory)")
                        .default_value("."),
                )
                .arg(
                    Arg::new("template")
                        .short('t')
                        .long("template")
                        .help(format!("Template to use: {}", templates::names().join(", "))),
                )
                .arg(
                    Arg::new("skip-compile")
                        .long("skip-compile")
                        .action(ArgAction::SetTrue)
                        .help("Skip compiling to JSON after initialization"),
                ),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile a YAML workspace config to codecompanion-workspace.json")
                .arg(Arg::new("config").required(true).help("Path to YAML config"))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output JSON path (defaults next to the project's .cc directory)"),
                ),
        )
}

/// Handler for the init command
fn init_handler(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = PathBuf::from(
        matches
            .get_one::<String>("path")
            .map(String::as_str)
            .unwrap_or("."),
    );
    if !path.is_dir() {
        bail!("project path is not a directory: {}", path.display());
    }
    let template = matches.get_one::<String>("template").map(String::as_str);

    let (config_path, cc_dir) = scaffold::init_workspace(&path, template)?;
    println!("✨ Initialized workspace at {}", path.display());
    println!("📁 CCW files stored in {}", cc_dir.display());

    if !matches.get_flag("skip-compile") {
        ccwlib::compile_file(&config_path, None)?;
        println!("✨ Compiled workspace config");
    }
    Ok(())
}

/// Handler for the compile command
fn compile_handler(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = Path::new(matches.get_one::<String>("config").expect("required arg"));
    let output = matches.get_one::<String>("output").map(Path::new);

    let written = ccwlib::compile_file(config, output)?;
    println!("✨ Compiled workspace config");
    println!("   {}", style(written.display()).dim());
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let result = match matches.subcommand() {
        Some(("init", sub)) => init_handler(sub),
        Some(("compile", sub)) => compile_handler(sub),
        _ => unreachable!("subcommand is required"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
