//! Interactive question loop.
//!
//! Each input line is an exit word, a `/command`, or a question for the
//! engine. Generic over its reader and writer so tests can script a session.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use zhesi_core::{AskResult, Domain, ThinkRecord, ThoughtEngine};
use zhesi_store::{Config, ExportOnExit, export_all};

const RULE: &str = "--------------------------------------------------";

const HELP: &str = "\
commands:
  /trace <id>      show the full record for a record id
  /export [path]   write every record to disk
  /reset           reset cognitive depth to 0
  /pause           stop answering and recording
  /resume          start answering and recording again
  /stats           show session totals
  /help            show this message";

pub fn run(
    engine: &mut ThoughtEngine,
    config: &Config,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "zhesi philosophy black box - session {}", engine.session_id())?;
    writeln!(out, "domains: {}", Domain::keyword_list())?;
    writeln!(
        out,
        "ask the same question again to go deeper; /help lists commands; {} ends the session",
        config.exit_words.join(" / ")
    )?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(out)?;
            break;
        };
        let trimmed = line.trim();

        if config.is_exit_word(trimmed) {
            break;
        }

        if let Some(command) = trimmed.strip_prefix('/') {
            run_command(engine, config, command, out)?;
            continue;
        }

        match engine.ask(&line) {
            Ok(result) => print_answer(out, &result)?,
            Err(e) => {
                tracing::debug!("rejected {trimmed:?}: {e}");
                writeln!(out, "error: {e}")?;
            }
        }
    }

    finish(engine, config, &mut input, out)
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn run_command(
    engine: &mut ThoughtEngine,
    config: &Config,
    command: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match name {
        "trace" => match engine.trace_by_id(arg.unwrap_or_default()) {
            Ok(record) => print_record(out, record)?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        "export" => {
            let path = arg.map(Path::new).unwrap_or(config.export_path.as_path());
            export_to(engine, path, out)?;
        }
        "reset" => {
            engine.reset_cognitive_depth();
            writeln!(out, "cognitive depth reset to 0")?;
        }
        "pause" => {
            engine.pause_recording();
            writeln!(out, "recording paused; questions are refused until /resume")?;
        }
        "resume" => {
            engine.resume_recording();
            writeln!(out, "recording resumed")?;
        }
        "stats" => {
            writeln!(out, "session:   {}", engine.session_id())?;
            writeln!(out, "started:   {}", engine.started_at())?;
            writeln!(out, "records:   {}", engine.trace().len())?;
            writeln!(out, "depth:     {}", engine.cognitive_depth())?;
            let state = if engine.is_recording() { "on" } else { "paused" };
            writeln!(out, "recording: {state}")?;
        }
        "help" => writeln!(out, "{HELP}")?,
        other => writeln!(out, "unknown command /{other}, try /help")?,
    }
    Ok(())
}

fn finish(
    engine: &ThoughtEngine,
    config: &Config,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(
        out,
        "session ended: {} thoughts, cognitive depth {}",
        engine.trace().len(),
        engine.cognitive_depth()
    )?;

    let export = match config.export_on_exit {
        ExportOnExit::Never => false,
        ExportOnExit::Always => true,
        ExportOnExit::Ask => {
            write!(
                out,
                "export trace to {}? (y/n): ",
                config.export_path.display()
            )?;
            out.flush()?;
            let answer = read_line(input)?.unwrap_or_default();
            writeln!(out)?;
            answer.trim().eq_ignore_ascii_case("y")
        }
    };

    if export {
        export_to(engine, &config.export_path, out)?;
    }
    Ok(())
}

/// Export and report the outcome. A failed export is reported, not fatal.
fn export_to(engine: &ThoughtEngine, path: &Path, out: &mut impl Write) -> Result<()> {
    match export_all(engine, path) {
        Ok(summary) => writeln!(
            out,
            "exported {} records to {}",
            summary.record_count,
            summary.destination.display()
        )?,
        Err(e) => {
            tracing::warn!("export to {} failed: {e}", path.display());
            writeln!(out, "export failed: {e}")?;
        }
    }
    Ok(())
}

pub fn print_answer(out: &mut impl Write, result: &AskResult) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "question:  {}", result.question)?;
    writeln!(out, "answer:    {}", result.answer)?;
    writeln!(out, "depth:     {}", result.depth)?;
    writeln!(out, "rationale: {}", result.rationale)?;
    writeln!(out, "record id: {}", result.record_id)?;
    writeln!(out, "hint: /trace <id> replays a record, /export saves them all")?;
    writeln!(out, "{RULE}")
}

fn print_record(out: &mut impl Write, record: &ThinkRecord) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "record id:  {}", record.id)?;
    writeln!(out, "created:    {}", record.created_at)?;
    writeln!(out, "question:   {}", record.question)?;
    writeln!(out, "answer:     {}", record.answer)?;
    writeln!(out, "depth:      {}", record.depth)?;
    writeln!(out, "rationale:  {}", record.rationale)?;
    writeln!(out, "transition: {}", record.depth_transition)?;
    writeln!(out, "{RULE}")
}
