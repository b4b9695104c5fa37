//! Chunked decode driver.
//!
//! Feeds one utterance's PCM to a decoder in fixed-size sample batches,
//! collecting the words each incremental step finalizes, then forces
//! end-of-utterance to flush whatever remains.

use crate::decoder::engine::{DecodeStep, Decoder};
use crate::error::{Result, WavdecError};

/// Decoded output for one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedUtterance {
    /// Word ids in decode-step order across the whole utterance.
    pub word_ids: Vec<String>,
    /// Hypothesis probability reported by the finalizing step.
    pub probability: f64,
}

/// Decode `pcm` in batches of `batch_size` samples.
///
/// Every sample is delivered exactly once: each full batch is fed and
/// followed by an incremental decode, then the remainder (delivered even
/// when empty) immediately precedes the forced end-of-utterance step.
/// Word ids keep decode-step order; the forced step's probability is the
/// utterance's probability. Any engine failure aborts the utterance and
/// propagates.
pub fn decode_utterance<D: Decoder + ?Sized>(
    decoder: &mut D,
    pcm: &[i16],
    batch_size: usize,
) -> Result<DecodedUtterance> {
    if batch_size == 0 {
        return Err(WavdecError::DecoderConfig {
            message: "audio batch size must be positive".to_string(),
        });
    }

    let mut word_ids = Vec::new();
    let mut batches = pcm.chunks_exact(batch_size);
    for batch in batches.by_ref() {
        decoder.accept_audio(batch)?;
        collect(decoder.decode(false)?, &mut word_ids);
    }

    // The tail partial batch always goes in, even empty, so the decoder
    // has seen the whole utterance before it finalizes.
    decoder.accept_audio(batches.remainder())?;
    let last = decoder.decode(true)?;
    let probability = last.probability;
    collect(last, &mut word_ids);

    Ok(DecodedUtterance {
        word_ids,
        probability,
    })
}

/// Decode a whole utterance in a single step, ignoring batching.
///
/// The full buffer goes in through one `accept_audio` followed by one
/// forced decode. Kept distinct from [`decode_utterance`]: engines whose
/// pruning depends on step boundaries may finalize different hypotheses.
pub fn decode_utterance_once<D: Decoder + ?Sized>(
    decoder: &mut D,
    pcm: &[i16],
) -> Result<DecodedUtterance> {
    decoder.accept_audio(pcm)?;
    let last = decoder.decode(true)?;
    let probability = last.probability;

    let mut word_ids = Vec::new();
    collect(last, &mut word_ids);
    Ok(DecodedUtterance {
        word_ids,
        probability,
    })
}

fn collect(step: DecodeStep, out: &mut Vec<String>) {
    out.extend(step.words.into_iter().map(|w| w.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::engine::MockDecoder;

    #[test]
    fn batches_partition_the_buffer_exactly() {
        let pcm: Vec<i16> = (0..10).collect();
        let mut decoder = MockDecoder::new();

        decode_utterance(&mut decoder, &pcm, 4).unwrap();

        let accepted = decoder.accepted();
        assert_eq!(accepted.len(), 3);
        assert_eq!(accepted[0], (0..4).collect::<Vec<i16>>());
        assert_eq!(accepted[1], (4..8).collect::<Vec<i16>>());
        assert_eq!(accepted[2], (8..10).collect::<Vec<i16>>());

        let delivered: Vec<i16> = accepted.iter().flatten().copied().collect();
        assert_eq!(delivered, pcm);
    }

    #[test]
    fn empty_remainder_is_still_delivered_before_forcing() {
        let pcm: Vec<i16> = (0..8).collect();
        let mut decoder = MockDecoder::new();

        decode_utterance(&mut decoder, &pcm, 4).unwrap();

        let accepted = decoder.accepted();
        assert_eq!(accepted.len(), 3);
        assert!(accepted[2].is_empty());
        assert_eq!(decoder.forced_count(), 1);
        assert_eq!(decoder.decode_count(), 3);
    }

    #[test]
    fn buffer_shorter_than_batch_goes_in_whole_as_remainder() {
        let pcm = vec![1i16, 2, 3];
        let mut decoder = MockDecoder::new();

        decode_utterance(&mut decoder, &pcm, 4).unwrap();

        assert_eq!(decoder.accepted(), &[vec![1i16, 2, 3]]);
        assert_eq!(decoder.decode_count(), 1);
        assert_eq!(decoder.forced_count(), 1);
    }

    #[test]
    fn empty_buffer_yields_empty_result() {
        let mut decoder = MockDecoder::new().with_final_words(&[], 0.5);

        let decoded = decode_utterance(&mut decoder, &[], 4).unwrap();

        assert!(decoded.word_ids.is_empty());
        assert_eq!(decoded.probability, 0.5);
        assert_eq!(decoder.accepted(), &[Vec::<i16>::new()]);
        assert_eq!(decoder.forced_count(), 1);
    }

    #[test]
    fn word_ids_keep_decode_step_order() {
        let pcm = vec![0i16; 10];
        let mut decoder = MockDecoder::new()
            .with_step_words(&["1", "2"])
            .with_step_words(&["3"])
            .with_final_words(&["4", "5"], 0.9);

        let decoded = decode_utterance(&mut decoder, &pcm, 4).unwrap();

        assert_eq!(decoded.word_ids, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(decoded.probability, 0.9);
    }

    #[test]
    fn steps_without_words_contribute_nothing() {
        let pcm = vec![0i16; 9];
        let mut decoder = MockDecoder::new().with_final_words(&["1"], 1.0);

        let decoded = decode_utterance(&mut decoder, &pcm, 4).unwrap();
        assert_eq!(decoded.word_ids, vec!["1"]);
    }

    #[test]
    fn zero_batch_size_is_rejected_before_touching_the_decoder() {
        let mut decoder = MockDecoder::new();

        let err = decode_utterance(&mut decoder, &[1i16, 2], 0).unwrap_err();
        assert!(matches!(err, WavdecError::DecoderConfig { .. }));
        assert!(decoder.accepted().is_empty());
        assert_eq!(decoder.decode_count(), 0);
    }

    #[test]
    fn accept_failure_aborts_the_utterance() {
        let pcm = vec![0i16; 12];
        let mut decoder = MockDecoder::new().with_accept_failure(2);

        let err = decode_utterance(&mut decoder, &pcm, 4).unwrap_err();
        assert!(matches!(err, WavdecError::Decode { .. }));
        // First batch was delivered, nothing after the failure.
        assert_eq!(decoder.accepted().len(), 1);
    }

    #[test]
    fn decode_failure_aborts_the_utterance() {
        let pcm = vec![0i16; 12];
        let mut decoder = MockDecoder::new().with_decode_failure(3);

        let err = decode_utterance(&mut decoder, &pcm, 4).unwrap_err();
        assert!(matches!(err, WavdecError::Decode { .. }));
        assert_eq!(decoder.forced_count(), 0);
    }

    #[test]
    fn once_path_feeds_the_whole_buffer_in_one_call() {
        let pcm: Vec<i16> = (0..10).collect();
        let mut decoder = MockDecoder::new().with_final_words(&["1", "2"], 0.8);

        let decoded = decode_utterance_once(&mut decoder, &pcm).unwrap();

        assert_eq!(decoder.accepted(), &[pcm]);
        assert_eq!(decoder.decode_count(), 1);
        assert_eq!(decoder.forced_count(), 1);
        assert_eq!(decoded.word_ids, vec!["1", "2"]);
        assert_eq!(decoded.probability, 0.8);
    }
}
