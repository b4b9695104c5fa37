//! Audio script parsing.
//!
//! A script file lists one utterance per line as `<name> <waveform-path>`,
//! split on the first space so the path may itself contain spaces.

use crate::error::{Result, WavdecError};
use std::fs;
use std::path::{Path, PathBuf};

/// One utterance to decode: a display name and the waveform to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEntry>> {
    parse_script(&fs::read_to_string(path)?)
}

/// Parse script contents into utterance entries, keeping file order.
///
/// Every line must split into a non-empty name and path; line numbers in
/// errors are 1-based.
pub fn parse_script(contents: &str) -> Result<Vec<ScriptEntry>> {
    let mut entries = Vec::new();
    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        let entry = line.split_once(' ').and_then(|(name, path)| {
            if name.is_empty() || path.is_empty() {
                None
            } else {
                Some(ScriptEntry {
                    name: name.to_string(),
                    path: PathBuf::from(path),
                })
            }
        });
        match entry {
            Some(entry) => entries.push(entry),
            None => {
                return Err(WavdecError::ScriptFormat {
                    line: idx + 1,
                    content: raw.to_string(),
                });
            }
        }
    }
    Ok(entries)
}
