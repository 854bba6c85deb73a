use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use zenodo_migrator_core::prelude::*;

use crate::io::{export, input};
use crate::output;

#[derive(Debug, Default, Serialize)]
pub struct TransformSummary {
    pub read: usize,
    pub transformed: usize,
    pub failed: usize,
}

/// One line of the error log.
#[derive(Debug, Serialize)]
struct FailedEntry {
    line: usize,
    code: &'static str,
    message: String,
    entry: Value,
}

pub fn run(
    input_arg: &str,
    out: Option<&str>,
    errors: Option<&str>,
    partial: bool,
    json: bool,
) -> Result<()> {
    let cfg = TransformConfig { partial };
    let entry = ParentRecordEntry::from_config(&cfg);

    let reader = input::open_lines(input_arg)?;
    let mut sink = export::open_sink(out)?;
    let mut error_log = errors.map(|p| export::open_sink(Some(p))).transpose()?;

    info!(input = input_arg, partial, entry = entry.id(), "transforming legacy entries");
    let summary = transform_lines(&entry, reader, &mut *sink, error_log.as_deref_mut())?;

    sink.flush().context("failed to flush output")?;
    if let Some(log) = error_log.as_mut() {
        log.flush().context("failed to flush error log")?;
    }

    info!(
        read = summary.read,
        transformed = summary.transformed,
        failed = summary.failed,
        "done"
    );
    output::print(&summary, json)
}

/// Transform every non-blank line of `reader`.
///
/// Failed entries are skipped and, when an error log is given, recorded there.
pub fn transform_lines<R, W, E>(
    entry: &ParentRecordEntry,
    reader: R,
    sink: &mut W,
    mut error_log: Option<&mut E>,
) -> Result<TransformSummary>
where
    R: BufRead,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let mut summary = TransformSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        summary.read += 1;
        let lineno = idx + 1;

        match transform_line(entry, &line) {
            Ok(record) => {
                export::write_json_line(sink, &record)?;
                summary.transformed += 1;
            }
            Err(err) => {
                summary.failed += 1;
                warn!(line = lineno, code = err.code(), error = %err, "skipping legacy entry");
                if let Some(log) = error_log.as_deref_mut() {
                    let failed = FailedEntry {
                        line: lineno,
                        code: err.code(),
                        message: err.to_string(),
                        entry: raw_entry(&line),
                    };
                    export::write_json_line(log, &failed)?;
                }
            }
        }
    }

    Ok(summary)
}

fn transform_line(entry: &ParentRecordEntry, line: &str) -> MigratorResult<TargetRecord> {
    let raw: Value = serde_json::from_str(line)?;
    entry.transform_value(&raw)
}

/// The input line as read, with every legacy key kept. Lines that are not
/// JSON are logged as a string.
fn raw_entry(line: &str) -> Value {
    serde_json::from_str(line).unwrap_or_else(|_| Value::String(line.to_string()))
}
