//! Decoder configuration parsed from the pass-through argument list.
//!
//! The list mirrors a Kaldi-style decoder invocation: `--key=value`
//! options followed by resource positionals, the first of which is the
//! model. Unknown options and extra positionals are preserved rather
//! than rejected, since the argument list belongs to the engine.

use crate::defaults;
use crate::error::{Result, WavdecError};
use std::path::PathBuf;
use std::str::FromStr;

/// Engine construction settings.
///
/// Tuning options are parsed so malformed values fail fast before any
/// utterance is processed; the vosk engine reads its actual tuning from
/// the model directory, so they are not re-applied per recognizer.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoderConfig {
    /// Model directory or file, the first positional argument.
    pub model_path: PathBuf,
    /// Word symbol table detected among the arguments, if any.
    pub word_symbols: Option<PathBuf>,
    /// Recognizer sample rate (`--sample-frequency`).
    pub sample_rate: u32,
    /// Beam width (`--beam`).
    pub beam: Option<f32>,
    /// Maximum active decoding states (`--max-active`).
    pub max_active: Option<u32>,
    /// Acoustic likelihood scale (`--acoustic-scale`).
    pub acoustic_scale: Option<f32>,
    /// Arguments not consumed above, preserved in order.
    pub extra_args: Vec<String>,
}

impl DecoderConfig {
    /// Parse the decoder argument list as passed verbatim from the CLI.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut sample_rate = defaults::SAMPLE_RATE;
        let mut beam = None;
        let mut max_active = None;
        let mut acoustic_scale = None;
        let mut word_symbols = None;
        let mut model_path: Option<PathBuf> = None;
        let mut extra_args = Vec::new();

        for arg in args {
            // Any value ending in words.txt doubles as the symbol table,
            // whether it arrives as a positional or an option value.
            let value = arg.split_once('=').map_or(arg.as_str(), |(_, v)| v);
            if value.ends_with(defaults::WORD_SYMBOLS_SUFFIX) {
                word_symbols = Some(PathBuf::from(value));
            }

            if let Some(option) = arg.strip_prefix("--") {
                let (key, value) =
                    option
                        .split_once('=')
                        .ok_or_else(|| WavdecError::DecoderConfig {
                            message: format!("expected --key=value, got {arg:?}"),
                        })?;
                match key {
                    "sample-frequency" => sample_rate = parse_option(key, value)?,
                    "beam" => beam = Some(parse_option(key, value)?),
                    "max-active" => max_active = Some(parse_option(key, value)?),
                    "acoustic-scale" => acoustic_scale = Some(parse_option(key, value)?),
                    _ => extra_args.push(arg.clone()),
                }
            } else if model_path.is_none() {
                model_path = Some(PathBuf::from(arg));
            } else {
                extra_args.push(arg.clone());
            }
        }

        let model_path = model_path.ok_or_else(|| WavdecError::DecoderConfig {
            message: "missing model path argument".to_string(),
        })?;

        Ok(Self {
            model_path,
            word_symbols,
            sample_rate,
            beam,
            max_active,
            acoustic_scale,
            extra_args,
        })
    }
}

fn parse_option<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| WavdecError::DecoderConfig {
        message: format!("invalid value for --{key}: {value:?}"),
    })
}
