use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use corpus_qa::config::EngineConfig;
use corpus_qa::corpus::{load_directory, CorpusIndex};
use corpus_qa::engine::AnswerEngine;
use corpus_qa::types::Query;

#[derive(Parser)]
#[command(
    name = "corpus-qa",
    about = "Answer a question from a directory of .txt files using TF-IDF",
    version
)]
struct Args {
    /// Directory containing the corpus .txt files
    corpus: PathBuf,

    /// Question to answer (prompted for on stdin when omitted)
    #[arg(short, long)]
    query: Option<String>,

    /// Number of documents to draw sentences from
    #[arg(long)]
    files: Option<usize>,

    /// Number of sentences to print
    #[arg(long)]
    sentences: Option<usize>,

    /// JSON engine config; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full answer bundle as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("corpus_qa=warn")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::v0(),
    };
    if let Some(files) = args.files {
        config.file_matches = files;
    }
    if let Some(sentences) = args.sentences {
        config.sentence_matches = sentences;
    }
    let engine = AnswerEngine::new(config)?;

    let documents = load_directory(&args.corpus)
        .with_context(|| format!("loading corpus from {}", args.corpus.display()))?;
    let index = CorpusIndex::build(documents)
        .with_context(|| format!("indexing corpus {}", args.corpus.display()))?;

    let raw_query = match args.query {
        Some(query) => query,
        None => prompt("Query: ")?,
    };
    let query = Query::new(raw_query);

    let answer = engine.answer(&index, &query)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &answer)?;
        writeln!(out)?;
    } else {
        for sentence in &answer.sentences {
            writeln!(out, "{}", sentence.text)?;
        }
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading query from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
