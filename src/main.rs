//! Command-line front-end for inspecting decoded combo paths.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use combo_path_decoder::{ComboRequest, ComboStrategy, DecodeOptions, DecoderConfig, PathDecoder};

/// Decode combo paths and print the result as JSON.
#[derive(Debug, Parser)]
#[command(name = "combo-decode")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Decode compact combo URL paths into module groups")]
struct Cli {
  /// Paths to decode, e.g. `/core+3.12.0+oop,node-base.debug.js`.
  paths: Vec<String>,
  /// Configuration file; defaults to `combo.config.json` in the working directory.
  #[arg(long)]
  config: Option<PathBuf>,
  /// Reject bare paths and paths without a leading `/`.
  #[arg(long)]
  strict: bool,
  /// Treat every argument as a JSON request object instead of a raw path.
  #[arg(long)]
  request: bool,
  /// Pretty-print the JSON output.
  #[arg(long)]
  pretty: bool,
  /// Print the decoder namespace and exit.
  #[arg(long)]
  namespace: bool,
}

fn main() -> Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let options = resolve_options(&cli)?;
  let decoder = PathDecoder::new(options);

  if cli.namespace {
    println!("{}", decoder.namespace());
    return Ok(ExitCode::SUCCESS);
  }

  let mut failed = false;
  for argument in &cli.paths {
    let request = if cli.request {
      serde_json::from_str::<ComboRequest>(argument)
        .with_context(|| format!("failed to parse request {argument}"))?
    } else {
      ComboRequest::new(argument.as_str())
    };

    match decoder.decode(&request) {
      Ok(decoded) => {
        let rendered = if cli.pretty {
          serde_json::to_string_pretty(&decoded)?
        } else {
          serde_json::to_string(&decoded)?
        };
        println!("{rendered}");
      }
      Err(err) => {
        eprintln!("{}: {err}", request.path);
        failed = true;
      }
    }
  }

  Ok(if failed {
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  })
}

fn resolve_options(cli: &Cli) -> Result<DecodeOptions> {
  let config = match &cli.config {
    Some(path) => DecoderConfig::load(path)?,
    None => {
      let cwd = std::env::current_dir().context("failed to resolve working directory")?;
      DecoderConfig::discover(&cwd)
    }
  };

  let mut options = config.to_options();
  if cli.strict {
    options.allow_bare_paths = false;
    options.require_leading_slash = true;
  }
  Ok(options)
}
