//! Command-log writer: folds engine events into appended log lines.
//!
//! The writer is a pure observer. It validates nothing and decides nothing;
//! it stamps each record with the side that was to move when the event was
//! emitted and leaves persistence policy (where the text goes) to the caller.

use crate::board::board_types::Side;
use crate::command_log::log_record::LogRecord;
use crate::game::game_events::GameEvent;

#[derive(Debug, Clone)]
pub struct LogWriter {
    side_to_move: Side,
    lines: Vec<String>,
}

impl LogWriter {
    /// A writer for a game whose first mover is `initial_side`.
    pub fn new(initial_side: Side) -> Self {
        Self {
            side_to_move: initial_side,
            lines: Vec::new(),
        }
    }

    /// Fold one drained event into the log. Accepted selections append a
    /// Click record (even when the selection had zero destinations, matching
    /// what the engine will re-acknowledge on replay); commits append a Move
    /// record and, for jumps, the Remove record of the captured piece.
    /// Rejections and the game-end signal leave no trace.
    pub fn observe(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::PieceSelected { origin, .. } => {
                self.push(LogRecord::Select {
                    player: self.side_to_move,
                    at: origin,
                });
            }
            GameEvent::MoveCommitted {
                origin,
                destination,
                captured,
            } => {
                self.push(LogRecord::Move {
                    player: self.side_to_move,
                    from: origin,
                    to: destination,
                });
                if let Some(at) = captured {
                    self.push(LogRecord::Remove {
                        player: self.side_to_move,
                        at,
                    });
                }
            }
            GameEvent::TurnFlipped { side } => {
                self.side_to_move = side;
            }
            GameEvent::SelectionRejected { .. } | GameEvent::GameEnded { .. } => {}
        }
    }

    /// Fold a whole drained batch in emission order.
    pub fn observe_all(&mut self, events: &[GameEvent]) {
        for event in events {
            self.observe(event);
        }
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The complete log text, one record per line with a trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn push(&mut self, record: LogRecord) {
        self.lines.push(record.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_graph::Board;
    use crate::board::board_types::Coordinate;
    use crate::game::turn_engine::TurnEngine;

    fn jump_scenario() -> TurnEngine {
        let mut board = Board::empty();
        for (x, y, side) in [
            (2, 2, Side::Black),
            (3, 3, Side::White),
            (6, 6, Side::White),
        ] {
            let id = board
                .cell_id(Coordinate::new(x, y))
                .expect("scenario piece on the board");
            board.spawn_piece(id, side);
        }
        TurnEngine::from_position(board, Side::Black)
    }

    #[test]
    fn jump_commit_logs_click_move_and_remove_in_order() {
        let mut engine = jump_scenario();
        let mut writer = LogWriter::new(engine.side_to_move());

        assert!(engine.select(Coordinate::new(2, 2)));
        assert!(engine.commit(Coordinate::new(4, 4)));
        writer.observe_all(&engine.drain_events());

        assert_eq!(
            writer.lines(),
            [
                "Player 1 Click to 2:2",
                "Player 1 Move from 2:2 to 4:4",
                "Player 1 Remove at 3:3",
            ]
        );
    }

    #[test]
    fn writer_stamps_the_mover_across_turn_flips() {
        let mut engine = TurnEngine::new();
        let mut writer = LogWriter::new(engine.side_to_move());

        assert!(engine.select(Coordinate::new(2, 2)));
        assert!(engine.commit(Coordinate::new(3, 3)));
        assert!(engine.select(Coordinate::new(5, 5)));
        assert!(engine.commit(Coordinate::new(4, 4)));
        writer.observe_all(&engine.drain_events());

        assert_eq!(
            writer.lines(),
            [
                "Player 1 Click to 2:2",
                "Player 1 Move from 2:2 to 3:3",
                "Player 2 Click to 5:5",
                "Player 2 Move from 5:5 to 4:4",
            ]
        );
        assert_eq!(
            writer.to_text(),
            "Player 1 Click to 2:2\nPlayer 1 Move from 2:2 to 3:3\n\
             Player 2 Click to 5:5\nPlayer 2 Move from 5:5 to 4:4\n"
        );
    }

    #[test]
    fn rejections_leave_no_trace() {
        let mut engine = TurnEngine::new();
        let mut writer = LogWriter::new(engine.side_to_move());

        assert!(!engine.select(Coordinate::new(3, 3)));
        writer.observe_all(&engine.drain_events());

        assert!(writer.lines().is_empty());
    }
}
