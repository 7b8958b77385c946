use crate::board::Square;

use super::DriverError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCommand {
    /// Mouse click in window pixels
    Click { x: i32, y: i32 },
    /// Click on a named square; `None` stands for a click off the board
    Square(Option<Square>),
    Fen(String),
    NewGame,
    Set { name: String, value: Option<String> },
    Show,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
/// Returns an error for unknown commands and missing or malformed arguments.
pub fn parse_driver_command(line: &str) -> Result<Option<DriverCommand>, DriverError> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Ok(None);
    };

    let cmd = match head {
        "click" => {
            let coord = |i: usize| -> Result<i32, DriverError> {
                let raw = parts.get(i).ok_or(DriverError::MissingArgument { command: "click" })?;
                raw.parse::<i32>().map_err(|_| DriverError::InvalidArgument {
                    command: "click",
                    value: (*raw).to_string(),
                })
            };
            DriverCommand::Click {
                x: coord(1)?,
                y: coord(2)?,
            }
        }
        "square" => {
            let raw = parts
                .get(1)
                .ok_or(DriverError::MissingArgument { command: "square" })?;
            if *raw == "-" {
                DriverCommand::Square(None)
            } else {
                let sq = raw.parse::<Square>().map_err(|_| DriverError::InvalidArgument {
                    command: "square",
                    value: (*raw).to_string(),
                })?;
                DriverCommand::Square(Some(sq))
            }
        }
        "fen" => {
            if parts.len() < 2 {
                return Err(DriverError::MissingArgument { command: "fen" });
            }
            DriverCommand::Fen(parts[1..].join(" "))
        }
        "newgame" => DriverCommand::NewGame,
        "set" => {
            let name = parts.get(1).ok_or(DriverError::MissingArgument { command: "set" })?;
            let value = (parts.len() > 2).then(|| parts[2..].join(" "));
            DriverCommand::Set {
                name: (*name).to_string(),
                value,
            }
        }
        "show" => DriverCommand::Show,
        "quit" | "exit" => DriverCommand::Quit,
        _ => return Err(DriverError::UnknownCommand(trimmed.to_string())),
    };

    Ok(Some(cmd))
}
