//! Line-oriented presenter for a [`QuizSession`].
//!
//! Each stage is shown as a sequence of prompts. An empty line keeps the
//! displayed value, `-` clears a numeric field, and [`BACK`] returns to the
//! previous stage from any prompt.

use std::io::{BufRead, Write};

use eyre::Result;
use vitals_core::models::stage::{Footer, FooterContent};
use vitals_instruments::results::ResultsRecord;
use vitals_quiz::renderer::{RawInput, Widget, parse_number, widget};
use vitals_quiz::scale_flow::{TranscriptEntry, TranscriptResponse};
use vitals_quiz::session::{QuizSession, StageView};

/// Typed at any prompt to return to the previous stage.
pub const BACK: &str = "<";

enum Reply {
    Back,
    Line(String),
}

enum StageKind {
    Questions,
    Interview,
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Drive `session` until it reaches the results stage (or completes its
    /// last stage), then print and return the results.
    pub fn run(&mut self, session: &mut QuizSession) -> Result<ResultsRecord> {
        loop {
            self.write_header(session)?;
            let kind = match session.view() {
                StageView::Results { results, .. } => {
                    write_results(&mut self.output, &results)?;
                    return Ok(results);
                }
                StageView::ScaleInterview { .. } => StageKind::Interview,
                StageView::Questions { .. } => StageKind::Questions,
            };

            let back = match kind {
                StageKind::Questions => self.ask_questions(session)?,
                StageKind::Interview => self.interview(session)?,
            };
            if back {
                session.retreat();
                continue;
            }
            let missing = session.missing_fields().join(", ");
            if !missing.is_empty() {
                writeln!(self.output, "Still needed: {missing}")?;
                continue;
            }
            // Configurations without a results stage finish on their last stage.
            if !session.advance() && session.navigator().is_last() {
                let results = session.results();
                write_results(&mut self.output, &results)?;
                return Ok(results);
            }
        }
    }

    fn write_header(&mut self, session: &QuizSession) -> Result<()> {
        let stage = session.current_stage();
        writeln!(
            self.output,
            "\n== {} ({}/{}, {:.0}%) ==",
            stage.title,
            session.stage_index() + 1,
            session.config().stage_count(),
            session.progress_percent()
        )?;
        if !stage.description.is_empty() {
            writeln!(self.output, "{}", stage.description)?;
        }
        Ok(())
    }

    /// Returns `true` when the user asked to go back.
    fn ask_questions(&mut self, session: &mut QuizSession) -> Result<bool> {
        let stage = session.current_stage().clone();
        for question in &stage.questions {
            loop {
                let shown = widget(question, session.answers());
                if let Widget::Scale { .. } = shown {
                    writeln!(self.output, "{}: answered in the interview", question.label)?;
                    break;
                }
                self.write_prompt(&shown)?;

                let line = match self.read_reply()? {
                    Reply::Back => return Ok(true),
                    Reply::Line(line) if line.is_empty() => break,
                    Reply::Line(line) => line,
                };
                let Some(input) = parse_input(&shown, &line) else {
                    writeln!(self.output, "Not understood: {line}")?;
                    continue;
                };
                match session.answer(&question.id, input) {
                    Ok(_) => break,
                    Err(err) => writeln!(self.output, "{err}")?,
                }
            }
        }

        if let StageView::Questions { bmi: Some(bmi), .. } = session.view() {
            writeln!(self.output, "BMI: {}", bmi.display())?;
        }
        if let Some(footer) = &stage.footer {
            write_footer(&mut self.output, footer)?;
        }
        Ok(false)
    }

    fn write_prompt(&mut self, shown: &Widget<'_>) -> Result<()> {
        match shown {
            Widget::Number {
                question,
                value,
                bounds,
                ..
            } => {
                write!(self.output, "{}", question.label)?;
                if let (Some(min), Some(max)) = (bounds.min, bounds.max) {
                    write!(self.output, " ({min}-{max})")?;
                }
                match value {
                    Some(v) => write!(self.output, " [{v}]: ")?,
                    None => write!(self.output, ": ")?,
                }
            }
            Widget::Radio {
                question,
                options,
                selected,
            } => {
                writeln!(self.output, "{}", question.label)?;
                for (i, option) in options.iter().enumerate() {
                    writeln!(self.output, "  {}) {}", i + 1, option.label)?;
                }
                if selected.is_empty() {
                    write!(self.output, "> ")?;
                } else {
                    write!(self.output, "[{selected}]: ")?;
                }
            }
            Widget::Checkbox { question, checked } => {
                let current = if *checked { "y" } else { "n" };
                write!(self.output, "{} (y/n) [{current}]: ", question.label)?;
            }
            Widget::Scale { .. } => {}
        }
        Ok(())
    }

    fn interview(&mut self, session: &mut QuizSession) -> Result<bool> {
        if let Some(flow) = session.scale_flow() {
            for entry in flow.transcript() {
                write_entry(&mut self.output, entry)?;
            }
        }

        loop {
            let Some(item) = session.scale_flow().and_then(|f| f.current()) else {
                return Ok(false);
            };
            let accepts_text = item.accepts_text;
            writeln!(
                self.output,
                "{} ({}/{})\n{}",
                item.section_title, item.number, item.total, item.prompt
            )?;
            for option in item.options {
                writeln!(self.output, "  {}) {}", option.value, option.label)?;
            }
            if accepts_text {
                writeln!(self.output, "  or describe it in your own words")?;
            }
            write!(self.output, "> ")?;

            let line = match self.read_reply()? {
                Reply::Back => return Ok(true),
                Reply::Line(line) => line,
            };
            if line.is_empty() {
                continue;
            }

            let before = session.scale_flow().map(|f| f.state());
            let after = match line.parse::<u8>() {
                Ok(value) => session.select_scale_response(value),
                Err(_) if accepts_text => session.submit_scale_text(&line),
                Err(_) => None,
            };
            if after.is_none() || after == before {
                writeln!(self.output, "Choose one of the listed values")?;
            }
        }
    }

    fn read_reply(&mut self) -> Result<Reply> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(eyre::eyre!("input closed before the questionnaire finished"));
        }
        let line = line.trim();
        Ok(if line == BACK {
            Reply::Back
        } else {
            Reply::Line(line.to_string())
        })
    }
}

/// Map a typed line to input for the shown widget. `None` when the line
/// means nothing for that kind of question.
fn parse_input(shown: &Widget<'_>, line: &str) -> Option<RawInput> {
    match shown {
        Widget::Number { .. } if line == "-" => Some(RawInput::Text(String::new())),
        Widget::Number { .. } => parse_number(line).map(|_| RawInput::Text(line.to_string())),
        Widget::Radio { options, .. } => {
            let value = match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].value.clone(),
                _ => line.to_string(),
            };
            Some(RawInput::Select(value))
        }
        Widget::Checkbox { .. } => match line.to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(RawInput::Toggle(true)),
            "n" | "no" => Some(RawInput::Toggle(false)),
            _ => None,
        },
        Widget::Scale { .. } => None,
    }
}

fn write_entry(out: &mut impl Write, entry: &TranscriptEntry) -> Result<()> {
    let response = match &entry.response {
        TranscriptResponse::Option { label, .. } => label.as_str(),
        TranscriptResponse::Text { text } => text.as_str(),
    };
    writeln!(out, "  {}. {} -> {response}", entry.number, entry.prompt)?;
    Ok(())
}

fn write_footer(out: &mut impl Write, footer: &Footer) -> Result<()> {
    let Footer::Info { content } = footer;
    match content {
        FooterContent::Note(text) => writeln!(out, "Note: {text}")?,
        FooterContent::List { title, items } => {
            writeln!(out, "{title}")?;
            for item in items {
                writeln!(out, "  - {item}")?;
            }
        }
    }
    Ok(())
}

/// Plain-text summary of a results record.
pub fn write_results(out: &mut impl Write, results: &ResultsRecord) -> Result<()> {
    writeln!(
        out,
        "Overall risk: {} (total {})",
        results.overall_risk.label().to_uppercase(),
        results.total_score
    )?;
    for category in &results.categories {
        writeln!(
            out,
            "  {}: {}/{} ({})",
            category.name,
            category.score,
            category.max_score,
            category.risk.label()
        )?;
    }
    if let Some(bmi) = &results.bmi {
        writeln!(out, "BMI: {}", bmi.display())?;
    }
    let recommendation = &results.recommendation;
    writeln!(
        out,
        "\n{}\n{}\n{}",
        recommendation.title, recommendation.description, recommendation.action
    )?;
    Ok(())
}
