use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::{Deserialize, Serialize};

use lexalign_core::alignment::domain::aligner_config::AlignerConfig;
use lexalign_core::alignment::domain::sentence_alignment::SentenceAlignment;
use lexalign_core::distance::infrastructure::levenshtein_distance::LevenshteinDistance;
use lexalign_core::pipeline::align_text_use_case::{AlignTextUseCase, Transcript};
use lexalign_core::pipeline::alignment_logger::StdoutAlignmentLogger;
use lexalign_core::search::infrastructure::threaded_window_search::ThreadedWindowSearch;
use lexalign_core::shared::constants::DEFAULT_SEARCH_WORKERS;
use lexalign_core::text::infrastructure::word_tokenizer::WordTokenizer;

/// Align ASR transcripts against a reference text.
#[derive(Parser)]
#[command(name = "lexalign")]
struct Cli {
    /// Reference text file (plain UTF-8).
    reference: PathBuf,

    /// Transcript file: JSON array of {"id": ..., "text": ...}.
    transcripts: PathBuf,

    /// Section numbers mapped into the reference, in reading order
    /// (comma-separated, strictly increasing). Each gap in the numbering
    /// allows one extra relocation of the search range.
    #[arg(long, value_delimiter = ',')]
    sections: Option<Vec<u32>>,

    /// Worker threads for the window search.
    #[arg(long, default_value_t = DEFAULT_SEARCH_WORKERS)]
    workers: usize,

    /// Write final-quality alignments to this JSON file.
    #[arg(long)]
    final_out: Option<PathBuf>,

    /// Write alignments needing review to this JSON file.
    #[arg(long)]
    review_out: Option<PathBuf>,
}

#[derive(Deserialize)]
struct TranscriptRow {
    id: String,
    text: String,
}

#[derive(Serialize)]
struct AlignmentRow<'a> {
    id: &'a str,
    reference_text: &'a str,
    asr_text: &'a str,
    start: usize,
    end: usize,
    distance: f64,
    above_threshold: bool,
}

impl<'a> From<&'a SentenceAlignment> for AlignmentRow<'a> {
    fn from(record: &'a SentenceAlignment) -> Self {
        Self {
            id: &record.utterance_id,
            reference_text: &record.aligned_text,
            asr_text: &record.asr_text,
            start: record.start,
            end: record.end,
            distance: record.distance,
            above_threshold: record.above_threshold,
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let reference_text = fs::read_to_string(&cli.reference)?;
    let transcript_json = fs::read_to_string(&cli.transcripts)?;
    let transcripts = parse_transcripts(&transcript_json)?;
    log::info!(
        "Aligning {} transcripts against {}",
        transcripts.len(),
        cli.reference.display()
    );

    let config = AlignerConfig::from_sections(cli.sections.as_deref().unwrap_or(&[]))?;
    let mut use_case = AlignTextUseCase::new(
        Box::new(WordTokenizer::new()),
        Box::new(ThreadedWindowSearch::with_workers(
            Box::new(LevenshteinDistance::new()),
            cli.workers,
        )),
        config,
        Box::new(StdoutAlignmentLogger::default()),
    );

    let report = use_case.execute(&reference_text, &transcripts)?;

    println!(
        "{} final, {} for review, {} gaps",
        report.final_records.len(),
        report.review_records.len(),
        report.gaps.len()
    );

    if let Some(path) = &cli.final_out {
        write_records(path, &report.final_records)?;
    }
    if let Some(path) = &cli.review_out {
        write_records(path, &report.review_records)?;
    }
    Ok(())
}

fn parse_transcripts(json: &str) -> Result<Vec<Transcript>, serde_json::Error> {
    let rows: Vec<TranscriptRow> = serde_json::from_str(json)?;
    Ok(rows
        .into_iter()
        .map(|row| Transcript {
            id: row.id,
            text: row.text,
        })
        .collect())
}

fn write_records(
    path: &PathBuf,
    records: &[SentenceAlignment],
) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<AlignmentRow> = records.iter().map(AlignmentRow::from).collect();
    fs::write(path, serde_json::to_string_pretty(&rows)?)?;
    Ok(())
}
