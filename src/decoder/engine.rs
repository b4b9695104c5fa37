use crate::error::{Result, WavdecError};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One word hypothesis finalized by a decode step.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    /// Engine token: a numeric word id for symbol-table engines, or the
    /// word itself for engines that emit text directly.
    pub id: String,
    /// Local score for this word.
    pub score: f32,
}

impl ScoredWord {
    pub fn new(id: &str, score: f32) -> Self {
        Self {
            id: id.to_string(),
            score,
        }
    }
}

/// Result of one decode step: the words this step finalized (each word is
/// reported exactly once across an utterance) and the hypothesis
/// probability as of this step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodeStep {
    pub words: Vec<ScoredWord>,
    pub probability: f64,
}

/// Trait for stateful, single-utterance-at-a-time speech decoders.
///
/// This seam keeps the chunking and lifecycle logic testable against a
/// fake engine. All calls for one utterance must be issued sequentially
/// from one thread: buffer audio with `accept_audio`, advance with
/// `decode`, and finish with `decode(true)`, which flushes everything
/// buffered, finalizes the hypothesis, and leaves the decoder ready for
/// the next utterance.
pub trait Decoder {
    /// Append samples to the decoder's audio buffer.
    fn accept_audio(&mut self, samples: &[i16]) -> Result<()>;

    /// Consume buffered audio and advance decoding.
    ///
    /// With `force_end_of_utterance` the current hypothesis is finalized,
    /// remaining buffered audio included, and per-utterance state resets.
    /// Calling with nothing buffered and without forcing is legal and
    /// returns an empty step.
    fn decode(&mut self, force_end_of_utterance: bool) -> Result<DecodeStep>;

    /// Release engine resources. Must be called exactly once; any call
    /// after `close` is an error. `DecoderGuard` enforces this.
    fn close(&mut self) -> Result<()>;
}

/// Scripted decoder for tests and benches.
///
/// Word batches queued with [`with_step_words`](Self::with_step_words) are
/// handed out by successive incremental decode calls; batches queued with
/// [`with_final_words`](Self::with_final_words) by successive forced
/// calls. Every `accept_audio` slice is recorded so tests can assert the
/// exact partition of delivered audio.
#[derive(Debug, Clone, Default)]
pub struct MockDecoder {
    step_words: VecDeque<Vec<ScoredWord>>,
    final_words: VecDeque<Vec<ScoredWord>>,
    final_probability: f64,
    fail_on_accept: Option<usize>,
    fail_on_decode: Option<usize>,
    accepted: Vec<Vec<i16>>,
    accept_calls: usize,
    decode_calls: usize,
    forced_calls: usize,
    close_probe: Arc<AtomicUsize>,
    closed: bool,
}

impl MockDecoder {
    pub fn new() -> Self {
        Self {
            final_probability: 1.0,
            ..Self::default()
        }
    }

    /// Queue a word batch for the next unserved incremental decode call.
    pub fn with_step_words(mut self, ids: &[&str]) -> Self {
        self.step_words
            .push_back(ids.iter().map(|id| ScoredWord::new(id, 1.0)).collect());
        self
    }

    /// Queue a word batch for the next unserved forced decode call.
    pub fn with_final_words(mut self, ids: &[&str], probability: f64) -> Self {
        self.final_words
            .push_back(ids.iter().map(|id| ScoredWord::new(id, 1.0)).collect());
        self.final_probability = probability;
        self
    }

    /// Fail the nth `accept_audio` call (1-based).
    pub fn with_accept_failure(mut self, nth: usize) -> Self {
        self.fail_on_accept = Some(nth);
        self
    }

    /// Fail the nth `decode` call (1-based).
    pub fn with_decode_failure(mut self, nth: usize) -> Self {
        self.fail_on_decode = Some(nth);
        self
    }

    /// Every `accept_audio` slice in call order.
    pub fn accepted(&self) -> &[Vec<i16>] {
        &self.accepted
    }

    pub fn decode_count(&self) -> usize {
        self.decode_calls
    }

    pub fn forced_count(&self) -> usize {
        self.forced_calls
    }

    /// Shareable close counter, observable after the decoder is moved.
    pub fn close_probe(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.close_probe)
    }
}

impl Decoder for MockDecoder {
    fn accept_audio(&mut self, samples: &[i16]) -> Result<()> {
        if self.closed {
            return Err(WavdecError::Decode {
                message: "decoder used after close".to_string(),
            });
        }
        self.accept_calls += 1;
        if self.fail_on_accept == Some(self.accept_calls) {
            return Err(WavdecError::Decode {
                message: "mock accept failure".to_string(),
            });
        }
        self.accepted.push(samples.to_vec());
        Ok(())
    }

    fn decode(&mut self, force_end_of_utterance: bool) -> Result<DecodeStep> {
        if self.closed {
            return Err(WavdecError::Decode {
                message: "decoder used after close".to_string(),
            });
        }
        self.decode_calls += 1;
        if self.fail_on_decode == Some(self.decode_calls) {
            return Err(WavdecError::Decode {
                message: "mock decode failure".to_string(),
            });
        }

        if force_end_of_utterance {
            self.forced_calls += 1;
            let words = self.final_words.pop_front().unwrap_or_default();
            Ok(DecodeStep {
                words,
                probability: self.final_probability,
            })
        } else {
            let words = self.step_words.pop_front().unwrap_or_default();
            Ok(DecodeStep {
                words,
                probability: 1.0,
            })
        }
    }

    fn close(&mut self) -> Result<()> {
        self.close_probe.fetch_add(1, Ordering::SeqCst);
        if self.closed {
            return Err(WavdecError::Decode {
                message: "decoder closed twice".to_string(),
            });
        }
        self.closed = true;
        Ok(())
    }
}
