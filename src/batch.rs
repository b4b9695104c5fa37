//! Utterance batch runner.
//!
//! Drives one shared decoder through every script entry in order and
//! streams one decoded line per utterance to the output sink. The
//! decoder is never reconstructed mid-batch: `decode(true)` resets it
//! between utterances.

use crate::audio::wav;
use crate::decoder::driver::{decode_utterance, decode_utterance_once};
use crate::decoder::engine::Decoder;
use crate::error::Result;
use crate::output;
use crate::script::ScriptEntry;
use crate::symbols::SymbolTable;
use std::io::Write;

/// Batch run settings beyond the decoder itself.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Samples fed to the decoder per incremental decode step.
    pub batch_size: usize,
    /// Sample rate waveforms are normalized to before decoding.
    pub sample_rate: u32,
    /// Feed each utterance as a single forced step instead of batching.
    pub once: bool,
    /// Echo per-utterance progress to stderr.
    pub verbose: bool,
}

/// Decode every entry, writing each line as soon as its utterance
/// finishes.
///
/// The first failure aborts the batch: nothing is written for the
/// failing entry or any later one, and the error propagates to the
/// caller (whose guard still releases the decoder).
pub fn run_batch<D, W>(
    decoder: &mut D,
    entries: &[ScriptEntry],
    symbols: Option<&SymbolTable>,
    sink: &mut W,
    options: &BatchOptions,
) -> Result<()>
where
    D: Decoder + ?Sized,
    W: Write,
{
    for entry in entries {
        let pcm = wav::load_pcm(&entry.path, options.sample_rate)?;
        if options.verbose {
            let batches = pcm.len().checked_div(options.batch_size).unwrap_or(0);
            output::report_utterance(&entry.name, pcm.len(), batches);
        }

        let decoded = if options.once {
            decode_utterance_once(decoder, &pcm)?
        } else {
            decode_utterance(decoder, &pcm, options.batch_size)?
        };

        let line = output::decoded_line(&entry.name, &decoded.word_ids, symbols)?;
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        if options.verbose {
            output::report_decoded(&line, decoded.probability);
        }
    }
    Ok(())
}
