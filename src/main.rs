//! # FS River CLI (`fsriver`)
//!
//! Decodes, normalizes and generates filesystem river documents and the
//! index mapping used for crawled files.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fsriver decode <file>` | Decode a river document and print its canonical form |
//! | `fsriver encode <river>` | Print the document for a river defined in the config |
//! | `fsriver schema --type <t>` | Print the index mapping for a document type |
//! | `fsriver rivers` | List configured rivers |
//! | `fsriver scan <river>` | List the files a configured river would crawl |
//!
//! ## Examples
//!
//! ```bash
//! fsriver decode river.json
//! cat river.json | fsriver decode - --lenient
//! fsriver schema --type doc --analyzer french
//! fsriver --config ./config/fsriver.toml encode tmp
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use fs_river::config::{self, Config};
use fs_river::{decode_str, encode_to_writer, rivers, scan, schema, DecodeMode};

const DEFAULT_CONFIG: &str = "./config/fsriver.toml";

/// fsriver: translate filesystem river definitions to and from JSON documents.
#[derive(Parser)]
#[command(name = "fsriver", version, about)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Optional for `decode` and `schema`; required for commands that
    /// look up rivers by name.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Print compact JSON regardless of `[output].pretty`.
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a river document and print it re-encoded.
    ///
    /// Fails on the first invalid field unless `--lenient` is given or
    /// `[decode].mode = "lenient"` is configured.
    Decode {
        /// JSON file to read, or `-` for stdin.
        input: PathBuf,

        /// Keep whatever decodes instead of failing.
        #[arg(long)]
        lenient: bool,
    },

    /// Print the document for a configured river.
    Encode {
        /// River name (`[rivers.<name>]`).
        river: String,
    },

    /// Print the index mapping for crawled files.
    Schema {
        /// Document type name the mapping is registered under.
        #[arg(long = "type")]
        type_name: String,

        /// Analyzer for file content. Defaults to `[schema].analyzer`.
        #[arg(long)]
        analyzer: Option<String>,
    },

    /// List configured rivers.
    Rivers,

    /// List the files a configured river would crawl.
    Scan {
        /// River name (`[rivers.<name>]`).
        river: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fsriver=info,fs_river=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { input, lenient } => {
            let cfg = load_optional_config(&cli.config)?;
            let mode = if lenient {
                DecodeMode::Lenient
            } else {
                cfg.decode.mode
            };
            let json = read_input(&input)?;
            let river = decode_str(&json, mode)
                .with_context(|| format!("Failed to decode {}", input.display()))?;
            print_river(&river, pretty(&cfg, cli.compact))?;
        }
        Commands::Encode { river } => {
            let cfg = config::load_config(&cli.config)?;
            let river = cfg.river(&river)?;
            print_river(&river, pretty(&cfg, cli.compact))?;
        }
        Commands::Schema {
            type_name,
            analyzer,
        } => {
            let cfg = load_optional_config(&cli.config)?;
            let analyzer = analyzer.unwrap_or_else(|| cfg.schema.analyzer.clone());
            let text = schema::schema_to_string(&type_name, &analyzer, pretty(&cfg, cli.compact))?;
            println!("{}", text);
        }
        Commands::Rivers => {
            let cfg = config::load_config(&cli.config)?;
            rivers::list_rivers(&cfg)?;
        }
        Commands::Scan { river } => {
            let cfg = config::load_config(&cli.config)?;
            let river = cfg.river(&river)?;
            for file in scan::scan_river(&river)? {
                println!("{}", file);
            }
        }
    }

    Ok(())
}

/// Missing file at the default location means defaults; anything else must load.
fn load_optional_config(path: &Path) -> Result<Config> {
    if path == Path::new(DEFAULT_CONFIG) && !path.exists() {
        tracing::debug!("no config at {}, using defaults", DEFAULT_CONFIG);
        return Ok(Config::default());
    }
    config::load_config(path)
}

fn pretty(cfg: &Config, compact: bool) -> bool {
    cfg.output.pretty && !compact
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn print_river(river: &fs_river::FsRiver, pretty: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    encode_to_writer(river, &mut out, pretty)?;
    writeln!(out)?;
    Ok(())
}
