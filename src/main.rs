//! CLI entry point for canopy

use std::fs;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use canopy::logging::{LogFormat, init_logging};
use canopy::tree::depth_limit;
use canopy::{
    ConsoleOutput, ExportOptions, Explorer, Policy, PolicyFamily, PolicyRegistry, RenderOptions,
    WalkerConfig, print_json,
};

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
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Policy-filtered directory trees, architecture diagrams and file exports")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log line format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// TOML file with policy overrides ([[policy]] tables)
    #[arg(long = "policies", value_name = "FILE", global = true)]
    policies: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available policies
    Policies {
        /// Output in JSON format
        #[arg(long = "json")]
        json: bool,
    },

    /// Build the filtered tree of a directory
    Tree {
        /// Directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Size-family policy id (default: include everything)
        #[arg(short = 'p', long = "policy")]
        policy: Option<u32>,

        /// Descend only N levels deep (0 = unlimited, default: 10)
        #[arg(short = 'L', long = "level")]
        level: Option<usize>,

        /// Print selected file paths, one per line, instead of JSON
        #[arg(long = "files")]
        files: bool,
    },

    /// Render the architecture diagram of a directory
    Render {
        /// Directory to render
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Policy id within the chosen family
        #[arg(short = 'p', long = "policy")]
        policy: Option<u32>,

        /// Policy family (default: detected from the project layout)
        #[arg(long = "family")]
        family: Option<PolicyFamily>,

        /// Render only N levels deep (0 = all levels)
        #[arg(short = 'L', long = "level")]
        level: Option<usize>,

        /// Show folders without matching files instead of hiding them
        #[arg(long = "full")]
        full: bool,

        /// Mark folders without matching files
        #[arg(long = "empty-marker")]
        empty_marker: bool,

        /// Show file sizes next to filenames
        #[arg(short = 's', long = "size")]
        size: bool,

        /// Let compact mode look for matches below the depth limit
        #[arg(long = "probe-beyond-depth")]
        probe_beyond_depth: bool,

        /// Write the diagram to FILE instead of the terminal
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Concatenate files into one annotated document
    Concat {
        /// Root the section headers are relative to
        #[arg(long = "root", default_value = ".")]
        root: PathBuf,

        /// Files to include (default: every file the policy selects under --root)
        files: Vec<PathBuf>,

        /// Size-family policy id used when no files are given
        #[arg(short = 'p', long = "policy")]
        policy: Option<u32>,

        /// Show file sizes and a statistics footer
        #[arg(short = 's', long = "size")]
        size: bool,

        /// Write the document to FILE instead of stdout
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

fn load_registry(path: Option<&Path>) -> Result<PolicyRegistry> {
    match path {
        Some(path) => Ok(PolicyRegistry::from_file(path)?),
        None => Ok(PolicyRegistry::builtin()),
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("cannot write '{}'", path.display()))?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn print_policies(policies: &[&Policy]) {
    for policy in policies {
        let extensions = if policy.accepts_any_extension() {
            "any file".to_string()
        } else {
            policy.include_extensions.join(" ")
        };
        println!(
            "{:<8} {:>2}  {:<10} {}",
            policy.family.as_str(),
            policy.id,
            policy.name,
            policy.description
        );
        println!("{:<14}{}", "", extensions);
    }
}

fn run(args: Args) -> Result<()> {
    let registry = load_registry(args.policies.as_deref())?;
    let explorer = Explorer::new(&registry);

    match args.command {
        Command::Policies { json } => {
            let policies = explorer.list_policies();
            if json {
                print_json(&policies)?;
            } else {
                print_policies(&policies);
            }
        }
        Command::Tree {
            path,
            policy,
            level,
            files,
        } => {
            let config = WalkerConfig {
                max_depth: match level {
                    Some(level) => depth_limit(Some(level)),
                    None => WalkerConfig::default().max_depth,
                },
            };
            let tree = explorer
                .with_walker_config(config)
                .build_tree(&absolute(&path), policy)?;
            if files {
                for file in tree.file_paths() {
                    println!("{}", file.display());
                }
            } else {
                print_json(&tree)?;
            }
        }
        Command::Render {
            path,
            policy,
            family,
            level,
            full,
            empty_marker,
            size,
            probe_beyond_depth,
            output,
        } => {
            let options = RenderOptions {
                max_depth: depth_limit(level),
                compact: !full,
                show_empty_indicator: empty_marker,
                show_file_size: size,
                probe_beyond_depth,
                family,
                generated_at: None,
            };
            let root = absolute(&path);
            match output {
                Some(file) => {
                    let text = explorer.render_architecture(&root, policy, &options)?;
                    write_output(Some(&file), &text)?;
                }
                None => {
                    let mut console = ConsoleOutput::new(should_use_color(args.color));
                    explorer.render_to(&root, policy, &options, &mut console)?;
                }
            }
        }
        Command::Concat {
            root,
            files,
            policy,
            size,
            output,
        } => {
            let root = absolute(&root);
            let paths = if files.is_empty() {
                explorer.build_tree(&root, policy)?.file_paths()
            } else {
                files.iter().map(|file| absolute(file)).collect()
            };
            let options = ExportOptions {
                show_file_size: size,
                generated_at: None,
            };
            let export = explorer.concatenate_selected(&paths, &root, &options);
            tracing::info!(
                processed = export.processed,
                total_size = export.total_size,
                "concatenated files"
            );
            write_output(output.as_deref(), &export.text)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose, args.log_format, should_use_color(args.color)) {
        eprintln!("canopy: cannot initialize logging: {}", e);
    }

    if let Err(e) = run(args) {
        eprintln!("canopy: {:#}", e);
        process::exit(1);
    }
}
