//! fingerprint command-line tool (default binary).
//!
//! Renders bytes as random art, encodes them as proquint words, and decodes
//! words back to hex. Input comes from a file, stdin, or a hex argument.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

use fingerprint::config::Settings;
use fingerprint::core::{self as fp, ArtConfig};
use fingerprint::term::{ArtView, TerminalRenderer};

#[derive(Parser)]
#[command(name = "fingerprint", version, about = "Random-art and proquint fingerprints")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw the random-art picture of the input
    Art {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        art: ArtArgs,
    },
    /// Encode the input as proquint words
    Words {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Decode proquint words and print the bytes as hex
    Decode {
        /// Words to decode, e.g. lusab-babad
        words: String,
        /// Accept consonants and vowels in any slot and read other characters as zero
        #[arg(long)]
        lenient: bool,
    },
    /// Print both the words and the art
    Show {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        art: ArtArgs,
        /// Emit a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// File to read, or '-' for stdin (default). With --hex, the hex text itself or '-'
    input: Option<String>,
    /// Treat INPUT as hex-encoded bytes
    #[arg(long)]
    hex: bool,
}

#[derive(Args)]
struct ArtArgs {
    /// Visit-count symbols, cycled by visit count
    #[arg(long)]
    alphabet: Option<String>,
    /// Grid rows
    #[arg(long)]
    height: Option<u16>,
    /// Grid columns
    #[arg(long)]
    width: Option<u16>,
    /// Color the start, end and visit density
    #[arg(long)]
    color: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    bytes: usize,
    hex: String,
    words: String,
    config: &'a ArtConfig,
    art: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let env = Settings::from_env();
    debug!("settings from environment: {:?}", env);

    match cli.command {
        Command::Art { input, art } => {
            let bytes = read_input(&input)?;
            let settings = apply_art_args(env, art);
            let config = settings.art_config()?;
            draw_art(&bytes, &config, settings.color)?;
        }
        Command::Words { input } => {
            let bytes = read_input(&input)?;
            println!("{}", fp::encode_words(&bytes));
        }
        Command::Decode { words, lenient } => {
            let bytes = if lenient {
                fp::from_words_lenient(words.trim())
            } else {
                fp::decode_words(words.trim())
            }
            .with_context(|| format!("decoding {:?}", words))?;
            println!("{}", hex::encode(bytes));
        }
        Command::Show { input, art, json } => {
            let bytes = read_input(&input)?;
            let settings = apply_art_args(env, art);
            let config = settings.art_config()?;
            let words = fp::encode_words(&bytes);

            if json {
                let report = Report {
                    bytes: bytes.len(),
                    hex: hex::encode(&bytes),
                    words,
                    config: &config,
                    art: fp::render_grid(&bytes, &config)
                        .lines()
                        .map(str::to_owned)
                        .collect(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", words);
                draw_art(&bytes, &config, settings.color)?;
            }
        }
    }
    Ok(())
}

fn apply_art_args(env: Settings, art: ArtArgs) -> Settings {
    env.with_overrides(art.alphabet, art.height, art.width, art.color)
}

fn draw_art(bytes: &[u8], config: &ArtConfig, color: bool) -> Result<()> {
    if !color {
        print!("{}", fp::render_grid(bytes, config));
        return Ok(());
    }
    let grid = fp::walk(bytes, config);
    let fb = ArtView::new(config.alphabet()).render(&grid);
    TerminalRenderer::new().draw(&fb)
}

/// Where the input bytes come from.
#[derive(Debug, PartialEq, Eq)]
enum Source<'a> {
    Stdin,
    StdinHex,
    Hex(&'a str),
    File(&'a str),
}

impl InputArgs {
    fn source(&self) -> Source<'_> {
        match (self.hex, self.input.as_deref()) {
            (true, None) | (true, Some("-")) => Source::StdinHex,
            (true, Some(text)) => Source::Hex(text),
            (false, None) | (false, Some("-")) => Source::Stdin,
            (false, Some(path)) => Source::File(path),
        }
    }
}

fn read_input(args: &InputArgs) -> Result<Vec<u8>> {
    let bytes = match args.source() {
        Source::Hex(text) => decode_hex(text)?,
        Source::StdinHex => {
            let text = String::from_utf8(read_stdin()?).context("hex input on stdin is not UTF-8")?;
            decode_hex(&text)?
        }
        Source::Stdin => read_stdin()?,
        Source::File(path) => {
            let path = PathBuf::from(path);
            fs::read(&path).with_context(|| format!("reading {}", path.display()))?
        }
    };
    info!("read {} input bytes", bytes.len());
    Ok(bytes)
}

/// Hex with optional whitespace and `:` byte separators.
fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&cleaned).with_context(|| format!("invalid hex input {:?}", text.trim()))
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}
