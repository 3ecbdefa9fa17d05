//! Move history with undo.

use std::fmt;

use serde::Serialize;

use crate::board::{Color, Point};
use crate::error::{GoError, Result};

/// What a move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MoveKind {
    /// A stone at `at`, and the opponent stones it removed.
    Place { at: Point, captured: Vec<Point> },
    Pass,
}

/// One entry of the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// 1-based position in the ledger.
    pub number: usize,
    pub player: Color,
    #[serde(flatten)]
    pub kind: MoveKind,
}

impl MoveRecord {
    pub fn is_pass(&self) -> bool {
        matches!(self.kind, MoveKind::Pass)
    }

    /// Stones removed by this move (empty for a pass).
    pub fn captured(&self) -> &[Point] {
        match &self.kind {
            MoveKind::Place { captured, .. } => captured,
            MoveKind::Pass => &[],
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ", self.number, self.player)?;
        match &self.kind {
            MoveKind::Place { at, captured } => {
                write!(f, "{}", at.label())?;
                if !captured.is_empty() {
                    write!(f, " ({} captured)", captured.len())?;
                }
                Ok(())
            }
            MoveKind::Pass => write!(f, "pass"),
        }
    }
}

/// Ordered move history. Numbers always run 1..=len with no gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveLedger {
    moves: Vec<MoveRecord>,
}

impl MoveLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move and return its sequence number.
    pub fn append(&mut self, player: Color, kind: MoveKind) -> usize {
        let number = self.moves.len() + 1;
        self.moves.push(MoveRecord {
            number,
            player,
            kind,
        });
        number
    }

    pub fn pop_last(&mut self) -> Result<MoveRecord> {
        self.moves.pop().ok_or(GoError::EmptyLedger)
    }

    /// True iff the two most recent moves are both passes.
    pub fn is_double_pass_termination(&self) -> bool {
        match self.moves.as_slice() {
            [.., a, b] => a.is_pass() && b.is_pass(),
            _ => false,
        }
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }
}

impl fmt::Display for MoveLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.moves.is_empty() {
            return write!(f, "No moves yet");
        }
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}
