//! CLI entry point for toc

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use termcolor::Color;
use toc::{
    DescriptionExtractor, TableOfContents, print_error, print_json, print_missing, print_status,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TOC_LOG=debug`.
const LOG_ENV: &str = "TOC_LOG";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "toc")]
#[command(about = "Generate a table of contents for your repo")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the table of contents
    Build(BuildArgs),
    /// Check the table of contents is up to date
    Check(TargetArgs),
    /// Print the description toc extracts from a single file
    Describe {
        /// File to describe
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
struct TargetArgs {
    /// Directory to create TOC.md from
    #[arg(default_value = "./")]
    dir: PathBuf,

    /// Show missing descriptions in files and directories
    #[arg(long = "show-missing", alias = "showMissing")]
    show_missing: bool,
}

#[derive(Args, Debug)]
struct BuildArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Print the table of contents as JSON instead of writing TOC.md
    #[arg(long = "json")]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let use_color = should_use_color(cli.color);

    let result = match cli.command {
        Command::Build(args) => build(&args, use_color),
        Command::Check(args) => check(&args, use_color),
        Command::Describe { file } => describe(&file),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            // Nothing more useful to do if stderr itself is gone
            let _ = print_error(&format!("{:#}", err), use_color);
            process::exit(1);
        }
    }
}

fn generate(dir: &Path) -> Result<TableOfContents> {
    debug!(dir = %dir.display(), "generating table of contents");
    TableOfContents::generate(dir)
        .with_context(|| format!("cannot build table of contents for '{}'", dir.display()))
}

fn build(args: &BuildArgs, use_color: bool) -> Result<bool> {
    let dir = &args.target.dir;
    let toc = generate(dir)?;

    if args.json {
        print_json(&toc.layout, &toc.stats).context("error writing output")?;
    } else {
        toc.write(dir)?;
    }

    if args.target.show_missing {
        print_missing(&toc.stats, use_color).context("error writing output")?;
    }
    Ok(true)
}

fn check(args: &TargetArgs, use_color: bool) -> Result<bool> {
    let toc = generate(&args.dir)?;

    if !toc.is_current(&args.dir) {
        print_status("TOC.md is out of date", Color::Red, use_color)
            .context("error writing output")?;
        return Ok(false);
    }

    if args.show_missing {
        print_missing(&toc.stats, use_color).context("error writing output")?;
    }
    Ok(true)
}

fn describe(file: &Path) -> Result<bool> {
    let description = DescriptionExtractor::builtin().describe_required_file(file)?;
    println!("{}", description);
    Ok(true)
}
