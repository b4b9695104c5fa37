//! WAV waveform loading for script entries.
//!
//! Accepts 16-bit integer PCM. Stereo input is downmixed to mono and
//! other sample rates are linearly resampled, so the decoder always sees
//! the rate it was built for.

use crate::error::{Result, WavdecError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a waveform file into mono 16-bit samples at `target_rate`.
pub fn load_pcm(path: &Path, target_rate: u32) -> Result<Vec<i16>> {
    let file = File::open(path).map_err(|e| wav_error(path, &e.to_string()))?;
    decode_wav(BufReader::new(file), target_rate).map_err(|message| wav_error(path, &message))
}

fn wav_error(path: &Path, message: &str) -> WavdecError {
    WavdecError::WavFormat {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}

fn decode_wav(reader: impl Read, target_rate: u32) -> std::result::Result<Vec<i16>, String> {
    let mut wav_reader =
        hound::WavReader::new(reader).map_err(|e| format!("failed to parse WAV header: {e}"))?;

    let spec = wav_reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(format!(
            "unsupported encoding: {:?} at {} bits per sample, need 16-bit integer PCM",
            spec.sample_format, spec.bits_per_sample
        ));
    }

    let raw: Vec<i16> = wav_reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("failed to read samples: {e}"))?;

    let mono = match spec.channels {
        1 => raw,
        2 => raw
            .chunks_exact(2)
            .map(|pair| ((pair[0] as i32 + pair[1] as i32) / 2) as i16)
            .collect(),
        n => return Err(format!("unsupported channel count: {n}")),
    };

    Ok(if spec.sample_rate == target_rate {
        mono
    } else {
        resample(&mono, spec.sample_rate, target_rate)
    })
}

/// Linear-interpolation resampling.
fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let step = from_rate as f64 / to_rate as f64;
    let out_len = (samples.len() as f64 / step).ceil() as usize;
    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let pos = i as f64 * step;
        let idx = pos as usize;
        let frac = pos - idx as f64;
        let a = samples[idx.min(samples.len() - 1)] as f64;
        let b = samples[(idx + 1).min(samples.len() - 1)] as f64;
        out.push((a + (b - a) * frac) as i16);
    }
    out
}
