//! CLI entry point for gather

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use gather::{
    BuiltinTree, CollectConfig, CollectError, CollectSummary, Collector, ExternalTree,
    NoStructure, default_output_path, print_json, print_summary,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

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

/// How to render the directory structure at the top of the snapshot
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum StructureMode {
    /// Run the `tree` command
    #[default]
    External,
    /// Render the tree without external tools
    Builtin,
    /// Skip rendering and write the fallback note
    None,
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
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gather")]
#[command(about = "Flatten a project's source files into a single line-numbered snapshot")]
#[command(version)]
struct Args {
    /// Project root to collect
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file (default: <PATH>/scripts/go_project_code.txt)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON configuration file; flags below are applied on top of it
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Include files with this extension (replaces the configured set; repeatable)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Skip directories with this exact name (repeatable)
    #[arg(short = 'I', long = "exclude-dir", value_name = "NAME")]
    exclude_dirs: Vec<String>,

    /// Skip files with this exact name (repeatable)
    #[arg(short = 'x', long = "exclude-file", value_name = "NAME")]
    exclude_files: Vec<String>,

    /// Depth of the directory structure summary (at least 1)
    #[arg(
        short = 'L',
        long = "level",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    level: Option<usize>,

    /// Do not collect files more than N directory levels below the root
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Also skip paths matched by .gitignore and .ignore files
    #[arg(long = "gitignore")]
    gitignore: bool,

    /// How to render the structure summary
    #[arg(long = "structure", value_name = "KIND", default_value = "external")]
    structure: StructureMode,

    /// Print the run summary as JSON
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing on stderr. RUST_LOG takes precedence over -v.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gather={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Build the configuration: defaults, then the config file, then flags.
fn build_config(args: &Args) -> Result<CollectConfig, CollectError> {
    let mut config = match &args.config {
        Some(path) => CollectConfig::from_json_file(path)?,
        None => CollectConfig::default(),
    };

    if !args.extensions.is_empty() {
        config = config.with_extensions(&args.extensions);
    }
    config = config
        .exclude_dirs(args.exclude_dirs.iter().cloned())
        .exclude_files(args.exclude_files.iter().cloned());

    if let Some(level) = args.level {
        config.structure_depth = level;
    }
    if args.max_depth.is_some() {
        config.max_depth = args.max_depth;
    }
    if args.gitignore {
        config.respect_gitignore = true;
    }
    Ok(config)
}

fn run(args: &Args, root: &Path) -> Result<CollectSummary, CollectError> {
    let config = build_config(args)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(root));

    let collector = Collector::new(config);
    let collector = match args.structure {
        StructureMode::External => collector.with_renderer(ExternalTree::new()),
        StructureMode::Builtin => collector.with_renderer(BuiltinTree),
        StructureMode::None => collector.with_renderer(NoStructure),
    };
    collector.collect(root, &output)
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !root.is_dir() {
        eprintln!(
            "gather: cannot access '{}': No such directory",
            args.path.display()
        );
        process::exit(1);
    }

    let summary = match run(&args, &root) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("gather: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&summary)
    } else {
        print_summary(&summary, should_use_color(args.color))
    };

    if let Err(e) = result {
        eprintln!("gather: error writing summary: {}", e);
        process::exit(1);
    }
}
