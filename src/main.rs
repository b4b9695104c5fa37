use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use std::fs::File;
use std::io::BufWriter;
use wavdec::batch::{BatchOptions, run_batch};
use wavdec::cli::Cli;
use wavdec::config::DecoderConfig;
use wavdec::decoder::guard::DecoderGuard;
use wavdec::decoder::vosk::VoskDecoder;
use wavdec::script::load_script;
use wavdec::symbols::SymbolTable;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let entries = load_script(&cli.audio_script)?;
    let config = DecoderConfig::from_args(&cli.decoder_args)?;
    let symbols = config
        .word_symbols
        .as_deref()
        .map(SymbolTable::load)
        .transpose()?;

    // One decoder for the whole batch; the guard releases it on every
    // exit path, including mid-batch failures.
    let decoder = VoskDecoder::new(&config)?;
    let mut guard = DecoderGuard::new(decoder);

    let mut sink = BufWriter::new(File::create(&cli.output)?);
    let options = BatchOptions {
        batch_size: cli.batch_size,
        sample_rate: config.sample_rate,
        once: cli.once,
        verbose: cli.verbose && !cli.quiet,
    };
    run_batch(&mut *guard, &entries, symbols.as_ref(), &mut sink, &options)?;
    guard.close()?;

    if !cli.quiet {
        eprintln!(
            "{} {} utterances → {}",
            "decoded".green(),
            entries.len(),
            cli.output.display()
        );
    }
    Ok(())
}
