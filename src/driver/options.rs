use crate::board::{BoardGeometry, STARTING_FEN};

use super::DriverError;

/// What the loop has to do after an option changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAction {
    UpdateGeometry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    pub board_x: i32,
    pub board_y: i32,
    pub board_width: i32,
    pub board_height: i32,
    /// Position used by `newgame`
    pub start_fen: String,
    /// Redraw the board after every state change
    pub echo: bool,
}

impl DriverOptions {
    #[must_use]
    pub fn new() -> Self {
        DriverOptions {
            board_x: 20,
            board_y: 20,
            board_width: 640,
            board_height: 640,
            start_fen: STARTING_FEN.to_string(),
            echo: true,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::from_board_rect(self.board_x, self.board_y, self.board_width, self.board_height)
    }

    /// Lines describing every option and its current value.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("option x {}", self.board_x),
            format!("option y {}", self.board_y),
            format!("option width {}", self.board_width),
            format!("option height {}", self.board_height),
            format!("option startfen {}", self.start_fen),
            format!("option echo {}", if self.echo { "on" } else { "off" }),
        ]
    }

    /// Apply `set <name> <value>`. Names are case-insensitive.
    ///
    /// # Errors
    /// Returns an error for unknown names and missing or unparsable values.
    pub fn apply_set(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Option<OptionAction>, DriverError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.map(str::trim).ok_or(DriverError::MissingArgument { command: "set" })?;
        let pixels = |min: i32| -> Result<i32, DriverError> {
            value
                .parse::<i32>()
                .ok()
                .filter(|v| *v >= min)
                .ok_or_else(|| DriverError::InvalidArgument {
                    command: "set",
                    value: value.to_string(),
                })
        };

        match normalized.as_str() {
            "x" => self.board_x = pixels(i32::MIN)?,
            "y" => self.board_y = pixels(i32::MIN)?,
            "width" => self.board_width = pixels(8)?,
            "height" => self.board_height = pixels(8)?,
            "startfen" => {
                self.start_fen = if value.eq_ignore_ascii_case("startpos") {
                    STARTING_FEN.to_string()
                } else {
                    value.to_string()
                };
                return Ok(None);
            }
            "echo" => {
                self.echo = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "1" => true,
                    "off" | "false" | "0" => false,
                    _ => {
                        return Err(DriverError::InvalidArgument {
                            command: "set",
                            value: value.to_string(),
                        })
                    }
                };
                return Ok(None);
            }
            _ => return Err(DriverError::UnknownOption(name.to_string())),
        }
        Ok(Some(OptionAction::UpdateGeometry))
    }
}

impl Default for DriverOptions {
    fn default() -> Self {
        DriverOptions::new()
    }
}
