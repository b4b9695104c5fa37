//! Command-line interface for wavdec.
//!
//! The positional surface mirrors the classic batch decoder invocation:
//! script, batch size, output path, then the decoder's own arguments
//! verbatim.

use clap::Parser;
use std::path::PathBuf;

/// Batch streaming speech decoding for WAV utterance scripts
#[derive(Parser, Debug)]
#[command(
    name = "wavdec",
    version,
    about = "Batch streaming speech decoding for WAV utterance scripts"
)]
pub struct Cli {
    /// Script file with one `<utterance_name> <waveform_path>` per line
    pub audio_script: PathBuf,

    /// Samples fed to the decoder per incremental decode step
    #[arg(value_parser = parse_batch_size)]
    pub batch_size: usize,

    /// Decoded output file (overwritten)
    pub output: PathBuf,

    /// Arguments passed verbatim to the decoder constructor; a value
    /// ending in `words.txt` is also loaded as the word symbol table
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub decoder_args: Vec<String>,

    /// Suppress all progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Echo per-utterance progress and decoded lines to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Feed each utterance as one decode step, ignoring the batch size
    #[arg(long)]
    pub once: bool,
}

/// Parse a positive sample count.
fn parse_batch_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("batch size must be positive".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
