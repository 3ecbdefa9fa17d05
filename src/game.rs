//! The game session: the only mutator of board, history and counters.
//!
//! Every mutating operation is atomic. It either succeeds and leaves a
//! consistent state, or returns an error and leaves the session untouched.
//! Observers registered with [`GameSession::subscribe`] see the new
//! [`Snapshot`] after each successful mutation.

use serde::Serialize;
use tracing::{debug, info};

use crate::board::{BoardGrid, Color, Point};
use crate::capture::resolve_captures;
use crate::constants::N;
use crate::error::{GoError, Result};
use crate::ledger::{MoveKind, MoveLedger, MoveRecord};

/// Stones of each color removed from the board so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CapturedStones {
    pub black: usize,
    pub white: usize,
}

impl CapturedStones {
    pub fn of(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn slot(&mut self, color: Color) -> &mut usize {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }
}

/// Owned, read-only copy of a session's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: [[Option<Color>; N]; N],
    pub current_player: Color,
    pub captured_stones: CapturedStones,
    pub move_history: Vec<MoveRecord>,
    pub game_over: bool,
}

type Observer = Box<dyn FnMut(&Snapshot)>;

/// A 5x5 game from the first move to two consecutive passes.
pub struct GameSession {
    board: BoardGrid,
    to_move: Color,
    captured: CapturedStones,
    ledger: MoveLedger,
    over: bool,
    observers: Vec<Observer>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Empty board, Black to move.
    pub fn new() -> Self {
        Self {
            board: BoardGrid::new(),
            to_move: Color::Black,
            captured: CapturedStones::default(),
            ledger: MoveLedger::new(),
            over: false,
            observers: Vec::new(),
        }
    }

    /// Register a callback run with the new snapshot after every successful
    /// placement, pass, undo or new game.
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Play the current mover's stone at `point`.
    ///
    /// # Errors
    /// - `OutOfBounds` if `point` is off the board
    /// - `GameOver` after two consecutive passes
    /// - `OccupiedCell` if the point already holds a stone
    pub fn place_stone(&mut self, point: Point) -> Result<MoveRecord> {
        let result = self.try_place(point);
        if let Err(err) = &result {
            debug!(%point, %err, "placement rejected");
        }
        result
    }

    /// [`place_stone`](Self::place_stone) from signed coordinates.
    pub fn play(&mut self, row: isize, col: isize) -> Result<MoveRecord> {
        let point = Point::checked(row, col)?;
        self.place_stone(point)
    }

    fn try_place(&mut self, point: Point) -> Result<MoveRecord> {
        let cell = self.board.get(point)?;
        if self.over {
            return Err(GoError::GameOver);
        }
        if cell.is_some() {
            return Err(GoError::OccupiedCell(point));
        }

        let player = self.to_move;
        // Work on a copy so a failure cannot leave a half-applied move.
        let mut board = self.board.clone();
        board.put(point, Some(player));
        let captured = resolve_captures(&mut board, point, player)?;

        self.board = board;
        *self.captured.slot(player.opponent()) += captured.len();
        self.ledger.append(
            player,
            MoveKind::Place {
                at: point,
                captured,
            },
        );
        self.to_move = player.opponent();

        let record = self.last_record()?;
        debug!(%record, "stone placed");
        self.notify();
        Ok(record)
    }

    /// Pass for the current mover. Two consecutive passes end the game.
    pub fn pass_turn(&mut self) -> Result<MoveRecord> {
        if self.over {
            debug!("pass rejected: game over");
            return Err(GoError::GameOver);
        }
        let player = self.to_move;
        self.ledger.append(player, MoveKind::Pass);
        self.to_move = player.opponent();
        self.over = self.ledger.is_double_pass_termination();

        let record = self.last_record()?;
        debug!(%record, "passed");
        if self.over {
            info!(moves = self.ledger.len(), "game over after two passes");
        }
        self.notify();
        Ok(record)
    }

    /// Take back the most recent move, returning it. Always reopens the game.
    pub fn undo_last_move(&mut self) -> Result<MoveRecord> {
        let record = self.ledger.pop_last().inspect_err(|_| {
            debug!("undo rejected: no moves");
        })?;

        if let MoveKind::Place { at, captured } = &record.kind {
            let opp = record.player.opponent();
            self.board.put(*at, None);
            for &pt in captured {
                self.board.put(pt, Some(opp));
            }
            *self.captured.slot(opp) -= captured.len();
        }
        self.to_move = record.player;
        self.over = false;

        debug!(%record, "undone");
        self.notify();
        Ok(record)
    }

    /// Discard everything and return to the initial state. Observers stay registered.
    pub fn start_new_game(&mut self) {
        self.board = BoardGrid::new();
        self.to_move = Color::Black;
        self.captured = CapturedStones::default();
        self.ledger = MoveLedger::new();
        self.over = false;
        info!("new game");
        self.notify();
    }

    pub fn can_undo(&self) -> bool {
        !self.ledger.is_empty()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn board(&self) -> &BoardGrid {
        &self.board
    }

    pub fn history(&self) -> &MoveLedger {
        &self.ledger
    }

    /// Stones of `color` that have been captured.
    pub fn captured(&self, color: Color) -> usize {
        self.captured.of(color)
    }

    /// Stones `color` has captured from the opponent.
    pub fn prisoners(&self, color: Color) -> usize {
        self.captured.of(color.opponent())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.rows(),
            current_player: self.to_move,
            captured_stones: self.captured,
            move_history: self.ledger.moves().to_vec(),
            game_over: self.over,
        }
    }

    fn last_record(&self) -> Result<MoveRecord> {
        self.ledger.last().cloned().ok_or(GoError::EmptyLedger)
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn p(row: usize, col: usize) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn test_initial_state() {
        let game = GameSession::new();
        assert_eq!(game.to_move(), Color::Black);
        assert!(!game.is_over());
        assert!(!game.can_undo());
        assert_eq!(game.captured(Color::Black), 0);
        assert_eq!(game.captured(Color::White), 0);
        assert_eq!(game.board(), &BoardGrid::new());
    }

    #[test]
    fn test_place_switches_mover() {
        let mut game = GameSession::new();
        let record = game.place_stone(p(0, 0)).unwrap();
        assert_eq!(record.number, 1);
        assert_eq!(record.player, Color::Black);
        assert_eq!(game.board().get(p(0, 0)), Ok(Some(Color::Black)));
        assert_eq!(game.to_move(), Color::White);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut game = GameSession::new();
        game.place_stone(p(1, 1)).unwrap();
        let before = game.snapshot();

        assert_eq!(game.place_stone(p(1, 1)), Err(GoError::OccupiedCell(p(1, 1))));
        assert!(matches!(game.play(5, 0), Err(GoError::OutOfBounds { .. })));
        assert!(matches!(game.play(0, -1), Err(GoError::OutOfBounds { .. })));
        assert!(matches!(
            game.place_stone(p(0, 9)),
            Err(GoError::OutOfBounds { .. })
        ));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_out_of_bounds_checked_before_game_over() {
        let mut game = GameSession::new();
        game.pass_turn().unwrap();
        game.pass_turn().unwrap();
        assert!(matches!(game.play(7, 7), Err(GoError::OutOfBounds { .. })));
        assert_eq!(game.place_stone(p(0, 0)), Err(GoError::GameOver));
    }

    #[test]
    fn test_game_over_blocks_place_and_pass() {
        let mut game = GameSession::new();
        game.pass_turn().unwrap();
        game.pass_turn().unwrap();
        assert!(game.is_over());
        let before = game.snapshot();
        assert_eq!(game.pass_turn(), Err(GoError::GameOver));
        assert_eq!(game.place_stone(p(2, 2)), Err(GoError::GameOver));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_undo_empty() {
        let mut game = GameSession::new();
        assert_eq!(game.undo_last_move(), Err(GoError::EmptyLedger));
    }

    #[test]
    fn test_undo_reopens_game() {
        let mut game = GameSession::new();
        game.pass_turn().unwrap();
        game.pass_turn().unwrap();
        let undone = game.undo_last_move().unwrap();
        assert!(undone.is_pass());
        assert_eq!(undone.player, Color::White);
        assert!(!game.is_over());
        assert_eq!(game.to_move(), Color::White);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_capture_credits_counter() {
        let mut game = GameSession::new();
        // Black C3, White surrounds it while Black plays the far corner row.
        for (row, col) in [(2, 2), (1, 2), (4, 0), (3, 2), (4, 1), (2, 1), (4, 2)] {
            game.place_stone(p(row, col)).unwrap();
        }
        let record = game.place_stone(p(2, 3)).unwrap();
        assert_eq!(record.captured(), &[p(2, 2)]);
        assert_eq!(game.board().get(p(2, 2)), Ok(None));
        assert_eq!(game.captured(Color::Black), 1);
        assert_eq!(game.prisoners(Color::White), 1);
        assert_eq!(game.captured(Color::White), 0);
    }

    #[test]
    fn test_start_new_game_resets() {
        let mut game = GameSession::new();
        game.place_stone(p(0, 0)).unwrap();
        game.pass_turn().unwrap();
        game.pass_turn().unwrap();
        game.start_new_game();
        assert_eq!(game.snapshot(), GameSession::new().snapshot());
    }

    #[test]
    fn test_observers_see_successful_mutations_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut game = GameSession::new();
        let sink = Rc::clone(&seen);
        game.subscribe(move |snap: &Snapshot| sink.borrow_mut().push(snap.clone()));

        game.place_stone(p(0, 0)).unwrap();
        let _ = game.place_stone(p(0, 0));
        game.pass_turn().unwrap();
        game.undo_last_move().unwrap();
        game.start_new_game();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].board[0][0], Some(Color::Black));
        assert_eq!(seen[0].current_player, Color::White);
        assert_eq!(seen[1].move_history.len(), 2);
        assert_eq!(seen[2].move_history.len(), 1);
        assert!(seen[3].move_history.is_empty());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut game = GameSession::new();
        game.place_stone(p(0, 1)).unwrap();
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["current_player"], "white");
        assert_eq!(json["board"][0][1], "black");
        assert!(json["board"][0][0].is_null());
        assert_eq!(json["captured_stones"]["black"], 0);
        assert_eq!(json["game_over"], false);
        assert_eq!(json["move_history"][0]["kind"], "place");
        assert_eq!(json["move_history"][0]["at"]["col"], 1);
    }
}
