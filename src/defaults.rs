//! Default constants shared across the decoding pipeline.

/// Default audio sample rate in Hz.
///
/// Used when the decoder argument list carries no explicit
/// `--sample-frequency` option. 16kHz is the standard rate for
/// speech recognition models.
pub const SAMPLE_RATE: u32 = 16000;

/// File name suffix that marks a decoder argument as the word symbol table.
///
/// Any pass-through argument whose value ends in this suffix is
/// additionally loaded as the word-id to word-string mapping used to
/// render decoded output.
pub const WORD_SYMBOLS_SUFFIX: &str = "words.txt";
