//! MiniGo: a rule engine for Go on a 5x5 board.
//!
//! The engine tracks the board, enforces placement legality, removes
//! captured groups, keeps an undoable move history and ends the game after
//! two consecutive passes. There is no ko rule, no suicide check and no
//! scoring.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and neighbor order
//! - [`board`] - Board storage, colors and coordinates
//! - [`group`] - Connected groups and liberties
//! - [`capture`] - Removal of captured opponent groups
//! - [`ledger`] - Move history with undo
//! - [`game`] - The game session state machine
//! - [`console`] - Text command front end
//! - [`selfplay`] - Random self-play
//!
//! ## Example
//!
//! ```
//! use minigo::board::{Color, Point};
//! use minigo::game::GameSession;
//!
//! let mut game = GameSession::new();
//! game.place_stone(Point::new(0, 0)).unwrap();
//! assert_eq!(game.to_move(), Color::White);
//!
//! game.pass_turn().unwrap();
//! game.pass_turn().unwrap();
//! assert!(game.is_over());
//!
//! game.undo_last_move().unwrap();
//! assert!(!game.is_over());
//! ```

pub mod board;
pub mod capture;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod group;
pub mod ledger;
pub mod selfplay;

pub use error::{GoError, Result};
