use crate::domain::model::{Command, Facing};
use crate::utils::error::{Result, RobotError};
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine {
    Command(Command),
    Exit,
    Blank,
}

/// Turns one line of user input into a [`Command`].
///
/// Keywords are case-insensitive. `PLACE` takes `X,Y[,FACING]`; a facing
/// name that is not recognised counts as omitted. Words after `MOVE`,
/// `LEFT`, `RIGHT` and `REPORT` are ignored, as are extra comma fields after
/// the facing.
#[derive(Debug, Clone)]
pub struct CommandParser {
    place: Regex,
}

impl CommandParser {
    pub fn new() -> Result<Self> {
        let place = Regex::new(
            r"(?i)^place\s+([+-]?\d+)\s*,\s*([+-]?\d+)(?:\s*,\s*([^,\s]*)(?:,\S*)?)?$",
        )
        .map_err(|e| RobotError::ConfigError {
            message: format!("bad PLACE pattern: {}", e),
        })?;
        Ok(Self { place })
    }

    pub fn parse(&self, line: &str) -> Result<ParsedLine> {
        let line = line.trim();
        let Some(keyword) = line.split_whitespace().next() else {
            return Ok(ParsedLine::Blank);
        };

        let command = match keyword.to_ascii_uppercase().as_str() {
            "EXIT" => return Ok(ParsedLine::Exit),
            "PLACE" => self.parse_place(line)?,
            "MOVE" => Command::Move,
            "LEFT" => Command::Left,
            "RIGHT" => Command::Right,
            "REPORT" => Command::Report,
            _ => return Err(invalid(line)),
        };

        Ok(ParsedLine::Command(command))
    }

    fn parse_place(&self, line: &str) -> Result<Command> {
        let caps = self.place.captures(line).ok_or_else(|| invalid(line))?;

        let x = caps[1].parse::<i32>().map_err(|_| invalid(line))?;
        let y = caps[2].parse::<i32>().map_err(|_| invalid(line))?;
        let facing = caps
            .get(3)
            .and_then(|m| m.as_str().parse::<Facing>().ok());

        Ok(Command::Place { x, y, facing })
    }
}

fn invalid(line: &str) -> RobotError {
    RobotError::ParseError {
        input: line.to_string(),
    }
}
