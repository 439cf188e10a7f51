//! list-visitor driver
//!
//! Builds one document, wraps it and prints it to stdout. Without
//! arguments it prints an HTML list holding the single line
//! "This is line".

use clap::{Arg, ArgAction, Command};
use list_visitor::{build_document, Config, DocumentKind, DocumentPrinter, LineCounter, Result};
use tracing::{debug, info};

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = cli().get_matches();

    // Load configuration
    let mut config = if let Some(config_path) = matches.get_one::<String>("config") {
        Config::load_from(config_path)?
    } else {
        Config::load()?
    };

    // Apply CLI overrides, then validate the merged result
    apply_cli_overrides(&mut config, &matches)?;
    config.validate()?;

    list_visitor::init(&config)?;
    info!(kind = %config.driver.kind, lines = config.driver.lines.len(), "building document");

    let doc = build_document(config.driver.kind, config.driver.lines);
    debug!(expected_lines = doc.accept(&mut LineCounter), "printing document");

    DocumentPrinter::stdout().print(&doc)?;
    Ok(())
}

/// Command line definition
fn cli() -> Command {
    Command::new("list-visitor")
        .version(list_visitor::VERSION)
        .about("Render a bullet or HTML list to stdout.")
        .arg(
            Arg::new("kind")
                .short('k')
                .long("kind")
                .value_name("KIND")
                .help("Document kind (bullet, html)")
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
        )
        .arg(
            Arg::new("lines")
                .value_name("LINE")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Lines to append, in order")
        )
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &clap::ArgMatches) -> Result<()> {
    if let Some(kind) = matches.get_one::<String>("kind") {
        config.driver.kind = kind.parse::<DocumentKind>()?;
    }

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    if let Some(lines) = matches.get_many::<String>("lines") {
        config.driver.lines = lines.cloned().collect();
    }

    Ok(())
}
