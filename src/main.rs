//! CLI entry point for tree-exporter

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, error};
use tree_exporter::{CommandError, LogLevel, Workspace, generate_tree};

#[derive(Parser, Debug)]
#[command(name = "tree-exporter")]
#[command(about = "Render the first workspace folder as a plain-text file tree")]
#[command(version)]
struct Args {
    /// Workspace folders; the tree is generated for the first one
    /// (defaults to the current directory)
    folders: Vec<PathBuf>,

    /// Diagnostic log level written to stderr
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", value_enum)]
    log_level: LogLevel,
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("tree-exporter is now active");

    let workspace = if args.folders.is_empty() {
        Workspace::from_current_dir()
    } else {
        Workspace::new(args.folders)
    };

    let tree = match generate_tree(&workspace) {
        Ok(tree) => tree,
        Err(CommandError::NoWorkspace) => {
            eprintln!("tree-exporter: No workspace folder open");
            process::exit(1);
        }
        Err(e) => {
            error!("Error generating file tree: {e:?}");
            eprintln!("tree-exporter: Failed to generate file tree: {e}");
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(tree.as_bytes()).and_then(|()| stdout.flush()) {
        eprintln!("tree-exporter: error writing output: {e}");
        process::exit(1);
    }

    debug!("tree-exporter is now deactivated");
}
