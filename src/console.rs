//! Line-oriented text front end.
//!
//! A small command protocol in the style of GTP: one command per line,
//! answered with `= <message>` on success or `? <error>` on failure, each
//! response followed by a blank line. Blank lines and `#` comments are skipped.
//!
//! ## Supported Commands
//!
//! - `play <label>` or `play <row> <col>` - Place the current mover's stone
//! - `pass` - Pass the turn
//! - `undo` - Take back the last move
//! - `new` - Start a new game
//! - `show` - Print the board
//! - `history` - Print the move list
//! - `state` - Print the full snapshot as JSON
//! - `captures` - Print both captured counters
//! - `can_undo` - `true` if there is a move to take back
//! - `help` - List commands
//! - `quit` - Exit

use std::io::{BufRead, Write};

use anyhow::{Context, anyhow, bail};

use crate::board::{Color, Point};
use crate::game::GameSession;

const KNOWN_COMMANDS: &[&str] = &[
    "can_undo", "captures", "help", "history", "new", "pass", "play", "quit", "show", "state",
    "undo",
];

pub struct Console {
    game: GameSession,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self::with_session(GameSession::new())
    }

    pub fn with_session(game: GameSession) -> Self {
        Self { game }
    }

    pub fn session(&self) -> &GameSession {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            match self.execute(&command, args) {
                Ok(message) => writeln!(output, "= {message}\n")?,
                Err(err) => writeln!(output, "? {err}\n")?,
            }
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command and return the response text.
    fn execute(&mut self, command: &str, args: &[&str]) -> anyhow::Result<String> {
        match command {
            "play" => {
                let point = parse_point(args)?;
                let record = self.game.place_stone(point)?;
                Ok(record.to_string())
            }

            "pass" => {
                let record = self.game.pass_turn()?;
                let mut message = record.to_string();
                if self.game.is_over() {
                    message.push_str("\ngame over");
                }
                Ok(message)
            }

            "undo" => {
                let record = self.game.undo_last_move()?;
                Ok(format!("undid {record}"))
            }

            "new" => {
                self.game.start_new_game();
                Ok(String::new())
            }

            "show" => Ok(format!("\n{}", self.game.board())),

            "history" => Ok(format!("\n{}", self.game.history())),

            "state" => Ok(serde_json::to_string(&self.game.snapshot())?),

            "captures" => Ok(format!(
                "black {} white {}",
                self.game.captured(Color::Black),
                self.game.captured(Color::White)
            )),

            "can_undo" => Ok(self.game.can_undo().to_string()),

            "help" => Ok(KNOWN_COMMANDS.join("\n")),

            "quit" => Ok(String::new()),

            _ => bail!("unknown command: {command}"),
        }
    }
}

/// Accept either a label (`C3`) or a `row col` pair.
fn parse_point(args: &[&str]) -> anyhow::Result<Point> {
    match args {
        [label] => Ok(Point::parse_label(label)?),
        [row, col] => {
            let row: isize = row.parse().with_context(|| format!("invalid row '{row}'"))?;
            let col: isize = col.parse().with_context(|| format!("invalid column '{col}'"))?;
            Ok(Point::checked(row, col)?)
        }
        [] => Err(anyhow!("missing argument")),
        _ => Err(anyhow!("too many arguments")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Console, String) {
        let mut console = Console::new();
        let mut out = Vec::new();
        console.run(script.as_bytes(), &mut out).unwrap();
        (console, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_play_by_label_and_coords() {
        let mut console = Console::new();
        assert_eq!(console.execute("play", &["C3"]).unwrap(), "1. Black C3");
        assert_eq!(console.execute("play", &["0", "4"]).unwrap(), "2. White E1");
    }

    #[test]
    fn test_play_errors() {
        let mut console = Console::new();
        assert!(console.execute("play", &[]).is_err());
        assert!(console.execute("play", &["Z9"]).is_err());
        assert!(console.execute("play", &["-1", "0"]).is_err());
        console.execute("play", &["A1"]).unwrap();
        let err = console.execute("play", &["a1"]).unwrap_err();
        assert_eq!(err.to_string(), "point A1 is not empty");
    }

    #[test]
    fn test_unknown_command() {
        let mut console = Console::new();
        let err = console.execute("genmove", &[]).unwrap_err();
        assert_eq!(err.to_string(), "unknown command: genmove");
    }

    #[test]
    fn test_script_round() {
        let (console, out) = run("# comment\n\nplay A1\npass\npass\npass\nundo\nquit\nplay B2\n");
        assert!(out.contains("= 1. Black A1\n\n"));
        assert!(out.contains("= 3. Black pass\ngame over\n\n"));
        assert!(out.contains("? game is already over\n\n"));
        assert!(out.contains("= undid 3. Black pass\n\n"));
        // Nothing after quit is executed.
        assert_eq!(console.session().history().len(), 2);
        assert!(!console.session().is_over());
    }

    #[test]
    fn test_captures_and_can_undo() {
        let mut console = Console::new();
        assert_eq!(console.execute("can_undo", &[]).unwrap(), "false");
        for mv in ["B1", "A1", "E5"] {
            console.execute("play", &[mv]).unwrap();
        }
        // White A1 has one liberty left at A2; Black takes it.
        assert_eq!(
            console.execute("play", &["D5"]).unwrap(),
            "4. White D5"
        );
        assert_eq!(
            console.execute("play", &["A2"]).unwrap(),
            "5. Black A2 (1 captured)"
        );
        assert_eq!(console.execute("captures", &[]).unwrap(), "black 0 white 1");
        assert_eq!(console.execute("can_undo", &[]).unwrap(), "true");
    }

    #[test]
    fn test_state_is_json() {
        let mut console = Console::new();
        let state = console.execute("state", &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&state).unwrap();
        assert_eq!(value["current_player"], "black");
        assert_eq!(value["game_over"], false);
    }

    #[test]
    fn test_show_and_history() {
        let mut console = Console::new();
        assert_eq!(console.execute("history", &[]).unwrap(), "\nNo moves yet");
        console.execute("play", &["B1"]).unwrap();
        let board = console.execute("show", &[]).unwrap();
        assert!(board.contains(" 1 . X . . ."));
    }
}
