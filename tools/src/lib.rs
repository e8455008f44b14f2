//! Demonstration driver for the dlist store and delta list.
//!
//! This crate feeds magnitudes from a text stream into a [`DeltaList`] and
//! renders the list into a fixed-size text buffer after every insertion,
//! exactly as an embedded console would. Errors are reported, never acted
//! upon.
//!
//! # Design Principles
//!
//! - **Report, don't recover** - Every status code is printed and the
//!   session moves on to the next line.
//! - **Same buffers as the target** - The store and the render buffer are
//!   sized up front from [`DriverConfig`] and never grow.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use delta::{DeltaError, DeltaList};
use serde::Serialize;
use store::{ErrorKind, Position, SequenceStore, StoreError, StoreResult, SUPPORTED_MAXIMUM};
use tracing::{debug, info, warn};

/// Buffer sizes used by a driver session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Capacity of the delta list.
    pub capacity: Position,
    /// Size of the text buffer the list is rendered into.
    pub render_bytes: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            render_bytes: 1000,
        }
    }
}

impl DriverConfig {
    /// Small buffers that make capacity and render errors easy to reach.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            capacity: 4,
            render_bytes: 16,
        }
    }

    /// Checks the sizes before any buffer is allocated.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > SUPPORTED_MAXIMUM {
            bail!(
                "capacity {} outside supported range 1..={SUPPORTED_MAXIMUM}",
                self.capacity
            );
        }
        if self.render_bytes == 0 {
            bail!("render buffer must hold at least one byte");
        }
        Ok(())
    }
}

/// How each session step is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Console text, one status line and one listing line per input.
    #[default]
    Text,
    /// One JSON object per input line.
    Json,
}

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// 1-based input line number.
    pub line: usize,
    /// Parsed magnitude, absent if the line did not parse.
    pub value: Option<i16>,
    /// `0` on success, otherwise a negative errno-style code. Skipped lines
    /// report the invalid-argument code.
    pub status: i32,
    /// The line did not parse and nothing was inserted.
    pub skipped: bool,
    /// Where the entry landed, on success.
    pub position: Option<Position>,
    /// Human-readable error, if any.
    pub error: Option<String>,
    /// Rendered list after the step, if it fit the render buffer.
    pub listing: Option<String>,
    /// Status of the render call.
    pub render_status: i32,
}

/// Counters for a whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines whose value was inserted.
    pub inserted: usize,
    /// Lines whose insertion returned an error.
    pub failed: usize,
    /// Lines that did not parse as a magnitude.
    pub unparsed: usize,
}

/// Runs an interactive session: one magnitude per input line.
///
/// Blank lines are skipped. Lines that do not parse are reported and
/// skipped.
pub fn run_session<R: BufRead, W: Write>(
    config: &DriverConfig,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<SessionSummary> {
    config.validate()?;
    let mut slots = vec![0i16; usize::from(config.capacity)];
    let mut text = vec![0u8; config.render_bytes];
    let mut list =
        DeltaList::from_buffer(&mut slots, config.capacity).context("initialize delta list")?;
    info!(
        capacity = config.capacity,
        render_bytes = config.render_bytes,
        "delta list initialized"
    );

    let mut summary = SessionSummary::default();
    for (index, line) in input.lines().enumerate() {
        let line = line.context("read input line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut report = StepReport {
            line: index + 1,
            value: None,
            status: 0,
            skipped: false,
            position: None,
            error: None,
            listing: None,
            render_status: 0,
        };

        match trimmed.parse::<i16>() {
            Ok(value) => {
                debug!(line = report.line, value, "inserting magnitude");
                report.value = Some(value);
                match list.insert(value) {
                    Ok(position) => {
                        info!(value, position, "insertion successful");
                        summary.inserted += 1;
                        report.position = Some(position);
                    }
                    Err(err) => {
                        warn!(value, code = err.code(), %err, "insertion failed");
                        summary.failed += 1;
                        report.status = err.code();
                        report.error = Some(err.to_string());
                    }
                }
            }
            Err(err) => {
                warn!(line = report.line, input = trimmed, %err, "unparseable input");
                summary.unparsed += 1;
                report.skipped = true;
                report.status = ErrorKind::InvalidArgument.code();
                report.error = Some(format!("invalid input {trimmed:?}: {err}"));
            }
        }

        match render(&list, &mut text) {
            Ok(listing) => report.listing = Some(listing),
            Err(err) => {
                warn!(code = err.code(), %err, "render failed");
                report.render_status = err.code();
            }
        }

        write_step(&mut output, &report, format)?;
    }

    info!(
        inserted = summary.inserted,
        failed = summary.failed,
        unparsed = summary.unparsed,
        "session finished"
    );
    Ok(summary)
}

fn render(list: &DeltaList<'_>, text: &mut [u8]) -> Result<String, DeltaError> {
    let len = list.render(text)?;
    Ok(String::from_utf8_lossy(&text[..len]).into_owned())
}

fn write_step<W: Write>(output: &mut W, report: &StepReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if report.skipped {
                let error = report.error.as_deref().unwrap_or("invalid input");
                writeln!(output, "Skipped: {error}")?;
            } else if report.status == 0 {
                writeln!(output, "Insertion successful!")?;
            } else {
                writeln!(output, "Insertion failed. error code: {}", report.status)?;
            }
            match &report.listing {
                Some(listing) => writeln!(output, "List: {listing}")?,
                None => writeln!(
                    output,
                    "Render failed. error code: {}",
                    report.render_status
                )?,
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(report).context("serialize step report")?;
            writeln!(output, "{json}")?;
        }
    }
    Ok(())
}

/// Runs the scripted positional-store demonstration and prints each status.
///
/// Exercises initialization errors, rendering into undersized buffers,
/// deletion from an empty store, and inserts at the front, middle and end.
pub fn walkthrough<W: Write>(mut output: W) -> Result<()> {
    let mut slots = [0i16; 1000];
    let mut text = [0u8; 3000];

    writeln!(output, "Initialization tests:")?;
    print_status(&mut output, &SequenceStore::new(&mut slots, 0).map(drop))?;
    print_status(
        &mut output,
        &SequenceStore::<i16>::new(&mut [], 1000).map(drop),
    )?;
    let mut store = SequenceStore::new(&mut slots, 1000).context("initialize store")?;
    print_status(&mut output, &Ok(()))?;

    print_render(&mut output, &store, &mut text[..2])?;
    print_render(&mut output, &store, &mut text)?;

    writeln!(output, "Deleting from empty list")?;
    print_status(&mut output, &store.delete(0).map(drop))?;
    print_status(&mut output, &store.delete(3).map(drop))?;

    writeln!(output, "Insertions")?;
    print_status(&mut output, &store.insert(3, 10))?;
    print_status(&mut output, &store.insert(0, 12))?;
    print_render(&mut output, &store, &mut text[..2])?;
    print_render(&mut output, &store, &mut text[..3])?;
    print_status(&mut output, &store.insert(0, 10))?;
    print_render(&mut output, &store, &mut text[..4])?;
    print_render(&mut output, &store, &mut text)?;
    print_status(&mut output, &store.insert(1, 11))?;
    print_render(&mut output, &store, &mut text)?;
    print_status(&mut output, &store.insert(3, 13))?;
    print_render(&mut output, &store, &mut text)?;

    writeln!(output, "Printing after deleting an element from the list")?;
    print_status(&mut output, &store.delete(20).map(drop))?;
    for position in [3, 0, 0, 0] {
        print_status(&mut output, &store.delete(position).map(drop))?;
        print_render(&mut output, &store, &mut text)?;
    }
    Ok(())
}

fn print_status<W: Write>(output: &mut W, result: &StoreResult<()>) -> Result<()> {
    let status = result.as_ref().map_or_else(StoreError::code, |_| 0);
    writeln!(output, "\tstatus: {status}")?;
    Ok(())
}

fn print_render<W: Write>(
    output: &mut W,
    store: &SequenceStore<'_>,
    text: &mut [u8],
) -> Result<()> {
    match store.render(text) {
        Ok(len) => {
            print_status(output, &Ok(()))?;
            writeln!(output, "List: {}", String::from_utf8_lossy(&text[..len]))?;
        }
        Err(err) => print_status(output, &Err(err))?,
    }
    Ok(())
}
