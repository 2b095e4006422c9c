//! Replay driver: feeds a recorded command log back through the engine.
//!
//! Records are re-issued through the same `select`/`commit` entry points a
//! live player drives, so replay cannot desynchronize from the rules; the
//! log's own Remove lines are only checked against the capture the engine
//! itself reported for the preceding Move, never applied.
//! A blank line means "log exhausted, resume live play": replay stops there
//! and hands the unconsumed remainder back to the caller. Any malformed line
//! or rules disagreement aborts the session with the board left as of the
//! last applied record.

use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration;

use crate::board::board_types::Coordinate;
use crate::command_log::log_record::{parse_record, LogParseError, LogRecord};
use crate::game::game_events::GameEvent;
use crate::game::turn_engine::TurnEngine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The line did not parse; fatal for the session.
    Parse { line_number: usize, source: LogParseError },
    /// A parsed record was refused by the engine: the log disagrees with
    /// the rules or with the board it is being replayed onto.
    Refused { line_number: usize, record: LogRecord },
    /// A Remove line names a cell the engine's preceding commit did not
    /// capture (or there was no capture at all).
    RemoveMismatch { line_number: usize, record: LogRecord },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Parse { line_number, source } => {
                write!(f, "replay line {line_number}: {source}")
            }
            ReplayError::Refused { line_number, record } => {
                write!(f, "replay line {line_number}: engine refused `{record}`")
            }
            ReplayError::RemoveMismatch { line_number, record } => {
                write!(
                    f,
                    "replay line {line_number}: `{record}` does not match the engine's capture"
                )
            }
        }
    }
}

impl Error for ReplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReplayError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Summary of a finished replay session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// Records applied (or verified, for Remove lines).
    pub applied: usize,
    /// Text after the blank terminator, untouched, for resuming live play.
    pub remainder: String,
    /// Everything the engine emitted during the session, in emission order,
    /// for collaborators that would have drained the events live.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone)]
pub struct ReplayDriver {
    delay: Duration,
}

impl ReplayDriver {
    /// `delay` is waited out before each record, purely for presentation
    /// pacing; `Duration::ZERO` changes nothing about the outcome.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Replay `log_text` into `engine` up to the first blank line or the end
    /// of input.
    pub fn run(&self, engine: &mut TurnEngine, log_text: &str) -> Result<ReplayReport, ReplayError> {
        let lines: Vec<&str> = log_text.lines().collect();
        let mut applied = 0usize;
        let mut events: Vec<GameEvent> = Vec::new();
        let mut pending_capture: Option<Coordinate> = None;

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                return Ok(ReplayReport {
                    applied,
                    remainder: lines[index + 1..].join("\n"),
                    events,
                });
            }

            let record = parse_record(line)
                .map_err(|source| ReplayError::Parse { line_number, source })?;

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }

            match record {
                LogRecord::Select { at, .. } => {
                    if !engine.select(at) {
                        return Err(ReplayError::Refused { line_number, record });
                    }
                }
                LogRecord::Move { to, .. } => {
                    if !engine.commit(to) {
                        return Err(ReplayError::Refused { line_number, record });
                    }
                }
                LogRecord::Remove { at, .. } => {
                    // The engine resolved the capture while committing the
                    // preceding Move record; the log must name that exact
                    // cell, and each capture is consumed at most once.
                    if pending_capture.take() != Some(at) {
                        return Err(ReplayError::RemoveMismatch { line_number, record });
                    }
                }
            }

            for event in engine.drain_events() {
                if let GameEvent::MoveCommitted { captured, .. } = event {
                    pending_capture = captured;
                }
                events.push(event);
            }
            applied += 1;
        }

        Ok(ReplayReport {
            applied,
            remainder: String::new(),
            events,
        })
    }
}

impl Default for ReplayDriver {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
