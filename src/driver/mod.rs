//! Headless line-command driver.
//!
//! Stands in for a window event loop: each input line is one event
//! (`click`, `square`, `fen`, `newgame`, `set`, `show`, `quit`) and is
//! handled to completion before the next is read.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Bitboard, ClickOutcome, FenError};
use crate::render::{Renderer, TextRenderer};
use crate::session::Game;

pub mod command;
pub mod options;

pub use command::{parse_driver_command, DriverCommand};
pub use options::{DriverOptions, OptionAction};

/// Error type for driver commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Command word not recognised
    UnknownCommand(String),
    /// `set` with an unknown option name
    UnknownOption(String),
    /// A required argument is absent
    MissingArgument { command: &'static str },
    /// An argument could not be parsed
    InvalidArgument { command: &'static str, value: String },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            DriverError::UnknownCommand(line) => write!(f, "Unknown command '{line}'"),
            DriverError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            DriverError::MissingArgument { command } => {
                write!(f, "Missing argument for '{command}'")
            }
            DriverError::InvalidArgument { command, value } => {
                write!(f, "Invalid argument '{value}' for '{command}'")
            }
        }
    }
}

impl std::error::Error for DriverError {}

impl From<FenError> for DriverError {
    fn from(e: FenError) -> Self {
        DriverError::InvalidFen(e)
    }
}

/// Space-separated square names of a move set.
fn format_squares(squares: Bitboard) -> String {
    squares
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A game plus the options controlling how events reach it.
pub struct Driver {
    game: Game,
    options: DriverOptions,
}

impl Driver {
    /// # Errors
    /// Returns an error if `options.start_fen` is malformed.
    pub fn new(options: DriverOptions) -> Result<Self, DriverError> {
        let game = Game::from_fen(&options.start_fen, options.geometry())?;
        Ok(Driver { game, options })
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// Handle one input line, writing responses to `out`.
    /// Returns `Ok(false)` once `quit` has been seen.
    ///
    /// # Errors
    /// Only I/O errors on `out` are returned; command errors are reported
    /// as `error:` lines.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let cmd = match parse_driver_command(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Ok(true),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                return Ok(true);
            }
        };
        match self.execute(cmd, out) {
            Ok(keep_going) => Ok(keep_going),
            Err(CommandFailure::Io(e)) => Err(e),
            Err(CommandFailure::Command(e)) => {
                writeln!(out, "error: {e}")?;
                Ok(true)
            }
        }
    }

    fn execute<W: Write>(&mut self, cmd: DriverCommand, out: &mut W) -> Result<bool, CommandFailure> {
        match cmd {
            DriverCommand::Click { x, y } => {
                let outcome = self.game.handle_click(x, y);
                self.report(outcome, out)?;
            }
            DriverCommand::Square(clicked) => {
                let outcome = self.game.click_square(clicked);
                self.report(outcome, out)?;
            }
            DriverCommand::Fen(fen) => {
                self.game.load_fen(&fen).map_err(DriverError::from)?;
                writeln!(out, "fen {}", self.game.board().to_fen())?;
                self.echo(out)?;
            }
            DriverCommand::NewGame => {
                self.game.load_fen(&self.options.start_fen).map_err(DriverError::from)?;
                writeln!(out, "newgame")?;
                self.echo(out)?;
            }
            DriverCommand::Set { name, value } => {
                if let Some(OptionAction::UpdateGeometry) =
                    self.options.apply_set(&name, value.as_deref())?
                {
                    self.game.set_geometry(self.options.geometry());
                }
                for line in self.options.describe() {
                    writeln!(out, "{line}")?;
                }
            }
            DriverCommand::Show => {
                TextRenderer::new(&mut *out).render(&self.game.frame())?;
                writeln!(out, "fen {}", self.game.board().to_fen())?;
            }
            DriverCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn report<W: Write>(&self, outcome: ClickOutcome, out: &mut W) -> io::Result<()> {
        match outcome {
            ClickOutcome::Ignored => writeln!(out, "ignored"),
            ClickOutcome::Rejected(sq) => writeln!(out, "rejected {sq}"),
            ClickOutcome::Deselected => {
                writeln!(out, "deselected")?;
                self.echo(out)
            }
            ClickOutcome::Selected(sq) | ClickOutcome::FocusChanged(sq) => {
                writeln!(
                    out,
                    "selected {sq} moves {}",
                    format_squares(self.game.selection().moves())
                )?;
                self.echo(out)
            }
            ClickOutcome::Moved(record) => {
                match record.captured {
                    Some(piece) => writeln!(
                        out,
                        "moved {}{} captures {}",
                        record.from,
                        record.to,
                        piece.to_fen_char(record.color.opponent())
                    )?,
                    None => writeln!(out, "moved {}{}", record.from, record.to)?,
                }
                if record.fifty_move_draw {
                    writeln!(out, "draw fifty-move rule")?;
                }
                self.echo(out)
            }
        }
    }

    fn echo<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.options.echo {
            TextRenderer::new(&mut *out).render(&self.game.frame())?;
        }
        Ok(())
    }
}

/// Either a reportable command error or a fatal output error.
enum CommandFailure {
    Command(DriverError),
    Io(io::Error),
}

impl From<DriverError> for CommandFailure {
    fn from(e: DriverError) -> Self {
        CommandFailure::Command(e)
    }
}

impl From<io::Error> for CommandFailure {
    fn from(e: io::Error) -> Self {
        CommandFailure::Io(e)
    }
}

/// Feed every line of `input` to a fresh driver until `quit` or EOF.
///
/// # Errors
/// Returns an error if the starting FEN is malformed or I/O fails.
pub fn run_loop<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    options: DriverOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut driver = Driver::new(options)?;
    log::info!("driver ready, board at {:?}", driver.options().geometry());
    driver.echo(&mut out)?;
    for line in input.lines() {
        if !driver.handle_line(&line?, &mut out)? {
            break;
        }
    }
    out.flush()?;
    Ok(())
}

/// Run the driver over stdin and stdout.
///
/// # Errors
/// Returns an error if the starting FEN is malformed or I/O fails.
pub fn run_stdio(options: DriverOptions) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    run_loop(stdin.lock(), io::stdout().lock(), options)
}
