use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use redirex_core::{GenerateOptions, GenerationSummary, generate_redirects};
use std::env;
use std::io;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber so stdout only carries the summary line.
///
/// `RUST_LOG` wins over the verbosity flag when it is set.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second install (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Generate redirects from `sitemap.xml` in `dir` into `django_redirects.txt` in `dir`
pub fn run_generate(dir: &Path) -> Result<GenerationSummary> {
    let options = GenerateOptions::in_dir(dir);
    debug!(?options, "resolved generation options");
    let summary = generate_redirects(&options)?;
    Ok(summary)
}

pub fn handle_generate(args: &ArgMatches) {
    init_tracing(args.get_flag("verbose"));

    let result = env::current_dir()
        .context("Failed to resolve the current directory")
        .and_then(|dir| run_generate(&dir));

    match result {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
