// SPDX-License-Identifier: MIT
//
// tessera — deterministic tiling SVG patterns from any string.
//
// This is the command-line front end over tessera-pattern:
//
//   flags + optional TOML config → Options
//   INPUT (or the current time)  → generate → Pattern
//   Pattern → svg | base64 | data URI | CSS url() → stdout or file
//
// Logging goes to stderr so stdout only ever carries the image.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tessera_color::Rgb;
use tessera_pattern::{Generator, Options, Pattern, generate};
use tracing_subscriber::EnvFilter;

// ─── Arguments ──────────────────────────────────────────────────────────────

/// Generate a seamless SVG tile from any string.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// String to hash (defaults to the current time)
    input: Option<String>,

    /// Generator to use instead of the one the hash picks
    #[arg(short, long, value_name = "NAME")]
    generator: Option<String>,

    /// Exact background color, e.g. #ff7f00
    #[arg(short, long, value_name = "HEX")]
    color: Option<Rgb>,

    /// Color the background hue is derived from
    #[arg(short, long, value_name = "HEX")]
    base_color: Option<Rgb>,

    /// 40-digit hex hash to use instead of hashing INPUT
    #[arg(long, value_name = "HEX40")]
    hash: Option<String>,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// TOML file with default options (flags win)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Print the generator names and exit
    #[arg(long)]
    list: bool,

    /// Log generation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Svg,
    Base64,
    DataUri,
    DataUrl,
}

impl Format {
    fn render(self, pattern: &Pattern) -> String {
        match self {
            Self::Svg => pattern.to_svg(),
            Self::Base64 => pattern.to_base64(),
            Self::DataUri => pattern.to_data_uri(),
            Self::DataUrl => pattern.to_data_url(),
        }
    }
}

// ─── Options ────────────────────────────────────────────────────────────────

/// Read options from a TOML file.
fn load_config(path: &Path) -> Result<Options> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

impl Cli {
    /// Lay the command-line flags over `base`.
    fn overlay(&self, mut base: Options) -> Options {
        if let Some(color) = self.base_color {
            base.base_color = color;
        }
        if let Some(color) = self.color {
            base.color = Some(color);
        }
        if let Some(name) = &self.generator {
            base.generator = Some(name.clone());
        }
        if let Some(hash) = &self.hash {
            base.hash = Some(hash.clone());
        }
        base
    }

    fn options(&self) -> Result<Options> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => Options::default(),
        };
        Ok(self.overlay(base))
    }
}

// ─── Entry ──────────────────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list {
        let mut out = io::stdout().lock();
        for generator in Generator::all() {
            writeln!(out, "{generator}")?;
        }
        return Ok(());
    }

    let options = cli.options()?;
    let pattern = generate(cli.input.as_deref(), &options)?;
    let text = cli.format.render(&pattern);

    match &cli.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), generator = %pattern.generator(), "wrote pattern");
        }
        None => writeln!(io::stdout().lock(), "{text}")?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("tessera: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
