//! Decoded-line formatting and stderr progress rendering.

use crate::error::Result;
use crate::symbols::SymbolTable;
use owo_colors::OwoColorize;

/// Format one utterance's output line: the name, each rendered word, and
/// a trailing newline.
///
/// With a symbol table every id must resolve; without one ids are emitted
/// verbatim. With zero words the line is `<name> \n`, keeping the name
/// parseable as the first space-delimited field.
pub fn decoded_line(
    name: &str,
    word_ids: &[String],
    symbols: Option<&SymbolTable>,
) -> Result<String> {
    let mut line = String::from(name);
    if word_ids.is_empty() {
        line.push(' ');
    }
    for id in word_ids {
        line.push(' ');
        match symbols {
            Some(table) => line.push_str(table.lookup(id)?),
            None => line.push_str(id),
        }
    }
    line.push('\n');
    Ok(line)
}

/// Per-utterance progress line, shown before decoding starts.
pub fn report_utterance(name: &str, samples: usize, batches: usize) {
    eprintln!(
        "{}",
        format!("{name}: {samples} samples, {batches} full audio batches").dimmed()
    );
}

/// Echo of a finished utterance with its hypothesis probability.
pub fn report_decoded(line: &str, probability: f64) {
    eprintln!(
        "{}",
        format!("{} (p={probability:.3})", line.trim_end()).dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WavdecError;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ids_map_through_the_symbol_table() {
        let table = SymbolTable::parse("HELLO 1\nWORLD 2\n").unwrap();
        let line = decoded_line("utt1", &ids(&["1", "2"]), Some(&table)).unwrap();
        assert_eq!(line, "utt1 HELLO WORLD\n");
    }

    #[test]
    fn ids_pass_through_without_a_table() {
        let line = decoded_line("utt1", &ids(&["1", "2"]), None).unwrap();
        assert_eq!(line, "utt1 1 2\n");
    }

    #[test]
    fn empty_result_still_names_the_utterance() {
        let line = decoded_line("utt1", &[], None).unwrap();
        assert_eq!(line, "utt1 \n");
        assert!(line.starts_with("utt1 "));
    }

    #[test]
    fn unknown_id_with_a_table_is_an_error() {
        let table = SymbolTable::parse("HELLO 1\n").unwrap();
        let err = decoded_line("utt1", &ids(&["1", "9"]), Some(&table)).unwrap_err();
        assert!(matches!(err, WavdecError::SymbolLookup { .. }));
    }
}
