//! wavdec - Batch streaming speech decoding for WAV utterance scripts
//!
//! Feeds scripted utterances through a stateful speech decoder in
//! fixed-size sample batches and writes one decoded line per utterance.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod audio;
pub mod batch;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod defaults;
pub mod error;
pub mod output;
pub mod script;
pub mod symbols;

// Core seam (audio → decode steps → words)
pub use decoder::engine::{DecodeStep, Decoder, MockDecoder, ScoredWord};
pub use decoder::guard::DecoderGuard;

// Chunked decode driver
pub use decoder::driver::{DecodedUtterance, decode_utterance, decode_utterance_once};

// Batch runner
pub use batch::{BatchOptions, run_batch};

// Error handling
pub use error::{Result, WavdecError};

// Config
pub use config::DecoderConfig;
