//! Line records of the command-log text format.
//!
//! One record per line, three forms:
//!
//! ```text
//! Player 1 Click to 2:2
//! Player 1 Move from 2:2 to 5:5
//! Player 2 Remove at 4:4
//! ```
//!
//! Player `1` is Black, `2` is White; coordinates are the zero-based `x:y`
//! key. Exactly these three command keywords are recognized; any other line
//! shape is a hard parse error, never a guess.

use std::error::Error;
use std::fmt;

use crate::board::board_types::{Coordinate, Side};
use crate::utils::coordinate_text::text_to_coordinate;

pub type LogParseResult<T> = Result<T, LogParseError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogParseError {
    /// A command keyword other than `Click`, `Move`, or `Remove`.
    UnknownCommand(String),
    /// A recognized command whose line shape or fields do not parse.
    MalformedRecord(String),
}

impl fmt::Display for LogParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogParseError::UnknownCommand(keyword) => {
                write!(f, "unknown log command keyword: {keyword}")
            }
            LogParseError::MalformedRecord(msg) => write!(f, "malformed log record: {msg}"),
        }
    }
}

impl Error for LogParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRecord {
    /// An accepted selection click.
    Select { player: Side, at: Coordinate },
    /// A committed relocation.
    Move {
        player: Side,
        from: Coordinate,
        to: Coordinate,
    },
    /// A capture removal emitted right after the move it belongs to.
    Remove { player: Side, at: Coordinate },
}

impl LogRecord {
    /// The side that issued the record.
    #[inline]
    pub fn player(&self) -> Side {
        match *self {
            LogRecord::Select { player, .. }
            | LogRecord::Move { player, .. }
            | LogRecord::Remove { player, .. } => player,
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LogRecord::Select { player, at } => {
                write!(f, "Player {} Click to {}", player.player_token(), at)
            }
            LogRecord::Move { player, from, to } => {
                write!(f, "Player {} Move from {} to {}", player.player_token(), from, to)
            }
            LogRecord::Remove { player, at } => {
                write!(f, "Player {} Remove at {}", player.player_token(), at)
            }
        }
    }
}

/// Parse one non-blank log line into a record, failing fast on anything that
/// is not exactly one of the three command forms.
pub fn parse_record(line: &str) -> LogParseResult<LogRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let (player_token, command) = match tokens.as_slice() {
        ["Player", player, command, ..] => (*player, *command),
        _ => {
            return Err(LogParseError::MalformedRecord(format!(
                "expected `Player <n> <command> ...`, got `{line}`"
            )))
        }
    };

    let player = Side::from_player_token(player_token).ok_or_else(|| {
        LogParseError::MalformedRecord(format!("invalid player token: {player_token}"))
    })?;

    match command {
        "Click" => match tokens.as_slice() {
            ["Player", _, "Click", "to", at] => Ok(LogRecord::Select {
                player,
                at: parse_coordinate(at)?,
            }),
            _ => Err(malformed_shape("Click", line)),
        },
        "Move" => match tokens.as_slice() {
            ["Player", _, "Move", "from", from, "to", to] => Ok(LogRecord::Move {
                player,
                from: parse_coordinate(from)?,
                to: parse_coordinate(to)?,
            }),
            _ => Err(malformed_shape("Move", line)),
        },
        "Remove" => match tokens.as_slice() {
            ["Player", _, "Remove", "at", at] => Ok(LogRecord::Remove {
                player,
                at: parse_coordinate(at)?,
            }),
            _ => Err(malformed_shape("Remove", line)),
        },
        other => Err(LogParseError::UnknownCommand(other.to_owned())),
    }
}

fn parse_coordinate(text: &str) -> LogParseResult<Coordinate> {
    text_to_coordinate(text).map_err(LogParseError::MalformedRecord)
}

fn malformed_shape(command: &str, line: &str) -> LogParseError {
    LogParseError::MalformedRecord(format!("bad `{command}` record shape: `{line}`"))
}
