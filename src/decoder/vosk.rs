//! Vosk-based speech decoding engine.
//!
//! Binds the [`Decoder`] seam to the Vosk online recognizer (Kaldi
//! underneath). Audio handed to `accept_audio` is held in a pending
//! buffer and drained into the engine by the next decode step, so the
//! accept/decode split of the driver maps onto Vosk's single
//! `accept_waveform` entry point.
//!
//! # Feature Gate
//!
//! This module requires the `vosk` feature and `libvosk` available at
//! link time:
//!
//! ```bash
//! cargo build --features vosk
//! ```

use crate::config::DecoderConfig;
use crate::decoder::engine::{DecodeStep, Decoder};
use crate::error::{Result, WavdecError};

#[cfg(feature = "vosk")]
use crate::decoder::engine::ScoredWord;
#[cfg(feature = "vosk")]
use vosk::{DecodingState, Model, Recognizer};

/// Vosk-backed decoder.
///
/// Holds the recognizer in an `Option` so `close` can release it while
/// keeping later contract-violating calls detectable.
#[cfg(feature = "vosk")]
pub struct VoskDecoder {
    recognizer: Option<Recognizer>,
    pending: Vec<i16>,
    model_name: String,
}

/// Vosk-backed decoder placeholder (without the `vosk` feature).
///
/// Construction works so configuration errors still surface early, but
/// any decoding call reports that the engine is not compiled in.
#[cfg(not(feature = "vosk"))]
#[derive(Debug)]
pub struct VoskDecoder {
    model_name: String,
}

#[cfg(feature = "vosk")]
impl VoskDecoder {
    /// Build a decoder from the CLI's pass-through configuration.
    ///
    /// # Errors
    /// `WavdecError::DecoderConfig` when the model is missing or the
    /// engine rejects it.
    pub fn new(config: &DecoderConfig) -> Result<Self> {
        if !config.model_path.exists() {
            return Err(WavdecError::DecoderConfig {
                message: format!("model not found at {}", config.model_path.display()),
            });
        }

        let model_str = config
            .model_path
            .to_str()
            .ok_or_else(|| WavdecError::DecoderConfig {
                message: "invalid UTF-8 in model path".to_string(),
            })?;
        let model = Model::new(model_str).ok_or_else(|| WavdecError::DecoderConfig {
            message: format!("failed to load model from {}", config.model_path.display()),
        })?;

        let mut recognizer = Recognizer::new(&model, config.sample_rate as f32).ok_or_else(
            || WavdecError::DecoderConfig {
                message: "failed to construct recognizer".to_string(),
            },
        )?;
        recognizer.set_max_alternatives(0);
        recognizer.set_words(true);

        Ok(Self {
            recognizer: Some(recognizer),
            pending: Vec::new(),
            model_name: model_name_of(config),
        })
    }

    /// Name of the loaded model.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn recognizer_mut(&mut self) -> Result<&mut Recognizer> {
        self.recognizer.as_mut().ok_or_else(closed_error)
    }
}

#[cfg(feature = "vosk")]
impl Decoder for VoskDecoder {
    fn accept_audio(&mut self, samples: &[i16]) -> Result<()> {
        self.recognizer_mut()?;
        self.pending.extend_from_slice(samples);
        Ok(())
    }

    fn decode(&mut self, force_end_of_utterance: bool) -> Result<DecodeStep> {
        let pending = std::mem::take(&mut self.pending);
        let recognizer = self.recognizer.as_mut().ok_or_else(closed_error)?;

        let mut step = DecodeStep::default();
        if !pending.is_empty() {
            match recognizer.accept_waveform(&pending) {
                DecodingState::Running => {}
                // Endpoint: this segment's words are final now. Collect
                // them here so each word is reported exactly once.
                DecodingState::Finalized => {
                    if let Some(single) = recognizer.result().single() {
                        step.words.extend(
                            single
                                .result
                                .into_iter()
                                .map(|w| ScoredWord::new(w.word, w.conf)),
                        );
                    }
                }
                DecodingState::Failed => {
                    return Err(WavdecError::Decode {
                        message: "engine rejected waveform".to_string(),
                    });
                }
            }
        }

        if force_end_of_utterance {
            if let Some(single) = recognizer.final_result().single() {
                step.words.extend(
                    single
                        .result
                        .into_iter()
                        .map(|w| ScoredWord::new(w.word, w.conf)),
                );
            }
            recognizer.reset();
        }

        step.probability = step_probability(&step.words);
        Ok(step)
    }

    fn close(&mut self) -> Result<()> {
        if self.recognizer.take().is_none() {
            return Err(closed_error());
        }
        Ok(())
    }
}

#[cfg(not(feature = "vosk"))]
impl VoskDecoder {
    /// Build a decoder from the CLI's pass-through configuration
    /// (stub implementation).
    pub fn new(config: &DecoderConfig) -> Result<Self> {
        if !config.model_path.exists() {
            return Err(WavdecError::DecoderConfig {
                message: format!("model not found at {}", config.model_path.display()),
            });
        }
        Ok(Self {
            model_name: model_name_of(config),
        })
    }

    /// Name of the configured model.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(not(feature = "vosk"))]
impl Decoder for VoskDecoder {
    fn accept_audio(&mut self, _samples: &[i16]) -> Result<()> {
        Err(engine_disabled())
    }

    fn decode(&mut self, _force_end_of_utterance: bool) -> Result<DecodeStep> {
        Err(engine_disabled())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

fn model_name_of(config: &DecoderConfig) -> String {
    config
        .model_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(feature = "vosk")]
fn closed_error() -> WavdecError {
    WavdecError::Decode {
        message: "decoder used after close".to_string(),
    }
}

/// Mean word confidence of a step, 1.0 when the step carries no words
/// (silence finalizes cleanly).
#[cfg(feature = "vosk")]
fn step_probability(words: &[ScoredWord]) -> f64 {
    if words.is_empty() {
        1.0
    } else {
        words.iter().map(|w| w.score as f64).sum::<f64>() / words.len() as f64
    }
}

#[cfg(not(feature = "vosk"))]
fn engine_disabled() -> WavdecError {
    WavdecError::Decode {
        message: concat!(
            "vosk feature not enabled. This binary was built without a decoding engine.\n",
            "To fix: cargo build --features vosk (requires libvosk)"
        )
        .to_string(),
    }
}
