use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::Result;
use tracing::info;
use vitals_cli::terminal::{Terminal, write_results};
use vitals_core::config::QuizConfig;
use vitals_core::models::record::AnswerRecord;
use vitals_export::render::{render_default, render_template};
use vitals_export::report::Report;
use vitals_instruments::results::{ResultsRecord, compute_results};
use vitals_quiz::session::QuizSession;

/// Health risk questionnaire.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Stage configuration to use instead of the built-in one.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Score a saved answers file instead of asking interactively.
    #[arg(long)]
    answers: Option<PathBuf>,

    /// Write the interactive answers to this file when finished.
    #[arg(long)]
    save_answers: Option<PathBuf>,

    /// Write a rendered report to this file.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Tera template for the report. Defaults to the built-in Markdown layout.
    #[arg(long, requires = "report")]
    template: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let (answers, results) = match &args.answers {
        Some(path) => {
            let answers = load_answers(path)?;
            let results = compute_results(&answers);
            (answers, results)
        }
        None => {
            let config = match &args.config {
                Some(path) => QuizConfig::load(path)?,
                None => QuizConfig::builtin()?,
            };
            let mut session = QuizSession::new(config)?;
            let stdin = io::stdin();
            let results = Terminal::new(stdin.lock(), io::stdout()).run(&mut session)?;
            (session.answers().clone(), results)
        }
    };

    print_results(&results, args.json, args.answers.is_some())?;

    if let Some(path) = &args.save_answers {
        let json = serde_json::to_string_pretty(&answers)?;
        std::fs::write(path, json)
            .map_err(|e| eyre::eyre!("failed to write answers to {}: {e}", path.display()))?;
        info!(path = %path.display(), "answers saved");
    }

    if let Some(path) = &args.report {
        write_report(&answers, path, args.template.as_deref())?;
    }

    Ok(())
}

fn load_answers(path: &Path) -> Result<AnswerRecord> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
    let answers: AnswerRecord = serde_json::from_str(&contents)?;
    info!(path = %path.display(), fields = answers.len(), "answers loaded");
    Ok(answers)
}

/// The interactive run already printed a text summary.
fn print_results(results: &ResultsRecord, json: bool, from_file: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, results)?;
        writeln!(stdout)?;
    } else if from_file {
        write_results(&mut stdout, results)?;
    }
    Ok(())
}

fn write_report(answers: &AnswerRecord, path: &Path, template: Option<&Path>) -> Result<()> {
    let report = Report::new(answers, jiff::Timestamp::now());
    let rendered = match template {
        Some(template_path) => {
            let content = std::fs::read_to_string(template_path).map_err(|e| {
                eyre::eyre!("failed to read template at {}: {e}", template_path.display())
            })?;
            let name = template_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("report");
            render_template(name, &content, &report)?
        }
        None => render_default(&report)?,
    };
    std::fs::write(path, rendered)
        .map_err(|e| eyre::eyre!("failed to write report to {}: {e}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}
