//! Word symbol table: word-id to word-string mapping.
//!
//! Kaldi-style `words.txt`: one `<word-string> <word-id>` pair per line,
//! whitespace separated. Later duplicate ids overwrite earlier ones.

use crate::error::{Result, WavdecError};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Immutable id → word mapping, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    words: HashMap<String, String>,
}

impl SymbolTable {
    /// Read and parse a symbol table file.
    pub fn load(path: &Path) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Parse symbol table contents. Blank lines are skipped; any line that
    /// is not exactly two fields is an error with its 1-based line number.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut words = HashMap::new();
        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(word), Some(id), None) => {
                    words.insert(id.to_string(), word.to_string());
                }
                _ => {
                    return Err(WavdecError::SymbolFormat {
                        line: idx + 1,
                        content: raw.to_string(),
                    });
                }
            }
        }
        Ok(Self { words })
    }

    /// Resolve a decoded word id to its display word.
    ///
    /// Ids come from a successful decode step, so an unknown id means the
    /// table and the decoding graph are out of sync. Surfaced as an error,
    /// never silently defaulted.
    pub fn lookup(&self, id: &str) -> Result<&str> {
        self.words
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| WavdecError::SymbolLookup { id: id.to_string() })
    }

    /// Number of mapped word ids.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
