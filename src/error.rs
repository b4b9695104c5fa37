//! Error types for wavdec.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WavdecError {
    // Decoder construction / configuration errors
    #[error("Decoder configuration error: {message}")]
    DecoderConfig { message: String },

    // Waveform errors
    #[error("Unreadable waveform {path}: {message}")]
    WavFormat { path: String, message: String },

    // Script errors
    #[error("Malformed script line {line}: expected `<name> <path>`, got {content:?}")]
    ScriptFormat { line: usize, content: String },

    // Symbol table errors
    #[error("Malformed symbol table line {line}: expected `<word> <id>`, got {content:?}")]
    SymbolFormat { line: usize, content: String },

    #[error("Word id {id} has no symbol table entry")]
    SymbolLookup { id: String },

    // Engine errors
    #[error("Decoding failed: {message}")]
    Decode { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, WavdecError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_decoder_config_display() {
        let error = WavdecError::DecoderConfig {
            message: "model not found at /models/tri2a".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Decoder configuration error: model not found at /models/tri2a"
        );
    }

    #[test]
    fn test_wav_format_display() {
        let error = WavdecError::WavFormat {
            path: "utt1.wav".to_string(),
            message: "failed to parse WAV header".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unreadable waveform utt1.wav: failed to parse WAV header"
        );
    }

    #[test]
    fn test_script_format_display() {
        let error = WavdecError::ScriptFormat {
            line: 3,
            content: "lonely-token".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed script line 3: expected `<name> <path>`, got \"lonely-token\""
        );
    }

    #[test]
    fn test_symbol_format_display() {
        let error = WavdecError::SymbolFormat {
            line: 7,
            content: "one two three".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed symbol table line 7: expected `<word> <id>`, got \"one two three\""
        );
    }

    #[test]
    fn test_symbol_lookup_display() {
        let error = WavdecError::SymbolLookup {
            id: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Word id 42 has no symbol table entry");
    }

    #[test]
    fn test_decode_display() {
        let error = WavdecError::Decode {
            message: "engine rejected waveform".to_string(),
        };
        assert_eq!(error.to_string(), "Decoding failed: engine rejected waveform");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: WavdecError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_source_chain_io() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: WavdecError = io_error.into();

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<WavdecError>();
        assert_sync::<WavdecError>();
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);

        fn returns_error() -> Result<i32> {
            Err(WavdecError::Decode {
                message: "test error".to_string(),
            })
        }
        assert!(returns_error().is_err());
    }
}
