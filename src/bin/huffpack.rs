use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;

use huffpack::bridge::{analyze_artifact, compress_file, decompress_file, inspect_codes};
use huffpack::observability::init_logging;
use huffpack::HuffpackConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Compress and decompress files with a Huffman code", long_about = None)]
struct Args {
    /// JSON config file. Missing fields take their defaults.
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Append log lines to this file instead of stderr.
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file into <OUT_DIR>/<stem>.<compressed_extension from config>
    Compress {
        input: PathBuf,
        #[clap(short, long, default_value = "compressed")]
        out_dir: PathBuf,
    },
    /// Decompress an artifact into <OUT_DIR>/<stem><decompressed_suffix from config>
    Decompress {
        input: PathBuf,
        #[clap(short, long, default_value = "decompressed")]
        out_dir: PathBuf,
    },
    /// Print the codes and frequencies for a text sample as JSON.
    Inspect {
        /// The sample text. Ignored when --file is given.
        #[clap(required_unless_present = "file")]
        text: Option<String>,
        #[clap(short, long)]
        file: Option<PathBuf>,
    },
    /// Print header statistics of an artifact as JSON.
    Analyze { input: PathBuf },
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => HuffpackConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => HuffpackConfig::default(),
    };

    let level = match args.verbose {
        0 => LevelFilter::from(config.log_level),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_logging(level, args.log_file.as_deref())?;

    match args.command {
        Command::Compress { input, out_dir } => {
            let result = compress_file(&input, &out_dir, &config)
                .with_context(|| format!("compressing {}", input.display()))?;
            println!("{} {}", "compressed".green().bold(), result.output_path.display());
            println!(
                "  original:   {} bytes\n  compressed: {} bytes\n  ratio:      {:.2}%",
                result.report.original_size,
                result.report.compressed_size,
                result.report.compression_ratio
            );
        }
        Command::Decompress { input, out_dir } => {
            let output = decompress_file(&input, &out_dir, &config)
                .with_context(|| format!("decompressing {}", input.display()))?;
            println!("{} {}", "decompressed".green().bold(), output.display());
        }
        Command::Inspect { text, file } => {
            let sample = match (file, text) {
                (Some(path), _) => std::fs::read(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, Some(text)) => text.into_bytes(),
                (None, None) => Vec::new(),
            };
            let report = inspect_codes(&sample)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Analyze { input } => {
            let bytes = std::fs::read(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let stats = analyze_artifact(&bytes)
                .with_context(|| format!("analyzing {}", input.display()))?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
