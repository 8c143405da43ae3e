use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cardinal direction the robot points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Rotate 90° counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::East => Facing::North,
            Facing::South => Facing::East,
            Facing::West => Facing::South,
        }
    }

    /// Rotate 90° clockwise.
    pub fn right(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    /// Unit step `(dx, dy)` taken by a move in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Facing::North => (0, 1),
            Facing::East => (1, 0),
            Facing::South => (0, -1),
            Facing::West => (-1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facing::North => "NORTH",
            Facing::East => "EAST",
            Facing::South => "SOUTH",
            Facing::West => "WEST",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown facing '{0}'")]
pub struct UnknownFacing(pub String);

impl FromStr for Facing {
    type Err = UnknownFacing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facing::ALL
            .into_iter()
            .find(|facing| facing.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFacing(s.to_string()))
    }
}

/// A placed robot. Stored positions always carry a facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

impl Position {
    pub fn new(x: i32, y: i32, facing: Facing) -> Self {
        Self { x, y, facing }
    }

    /// One step forward, or `None` if the coordinates would overflow.
    pub fn step(&self) -> Option<Position> {
        let (dx, dy) = self.facing.delta();
        Some(Position {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            facing: self.facing,
        })
    }

    pub fn with_facing(&self, facing: Facing) -> Position {
        Position { facing, ..*self }
    }
}

/// REPORT line format: `x,y,FACING`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.facing)
    }
}

/// Inclusive grid extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    pub const DEFAULT_MIN: i32 = 0;
    pub const DEFAULT_MAX: i32 = 5;

    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MIN,
            Self::DEFAULT_MAX,
            Self::DEFAULT_MIN,
            Self::DEFAULT_MAX,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `facing: None` keeps the current facing, if the robot has one.
    Place {
        x: i32,
        y: i32,
        facing: Option<Facing>,
    },
    Move,
    Left,
    Right,
    Report,
}

impl Command {
    pub const NAMES: [&'static str; 5] = ["PLACE", "MOVE", "LEFT", "RIGHT", "REPORT"];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Place { .. } => "PLACE",
            Command::Move => "MOVE",
            Command::Left => "LEFT",
            Command::Right => "RIGHT",
            Command::Report => "REPORT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Robot is not placed")]
    NotPlaced,

    #[error("Position was not valid")]
    InvalidPosition { x: i32, y: i32 },

    #[error("Position could not be saved")]
    NotPersisted,
}

/// Outcome reported back to the caller for a single command.
///
/// `position` is the robot's position after the command on success (or the
/// stored position for REPORT). Rejected commands leave it empty; the rejected
/// coordinates travel in [`CommandError::InvalidPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub position: Option<Position>,
    pub error: Option<CommandError>,
}

impl CommandResult {
    pub fn success(position: Position) -> Self {
        Self {
            position: Some(position),
            error: None,
        }
    }

    pub fn failure(error: CommandError) -> Self {
        Self {
            position: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Empty when the command succeeded.
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_rotation_cycle() {
        for facing in Facing::ALL {
            assert_eq!(facing.left().left().left().left(), facing);
            assert_eq!(facing.right().right().right().right(), facing);
            assert_eq!(facing.left().right(), facing);
            assert_eq!(facing.right().left(), facing);
        }
        assert_eq!(Facing::North.left(), Facing::West);
        assert_eq!(Facing::North.right(), Facing::East);
    }

    #[test]
    fn test_facing_parse_is_case_insensitive() {
        assert_eq!("north".parse::<Facing>().unwrap(), Facing::North);
        assert_eq!("West".parse::<Facing>().unwrap(), Facing::West);
        assert_eq!(" SOUTH ".parse::<Facing>().unwrap(), Facing::South);
        assert!("up".parse::<Facing>().is_err());
        assert!("".parse::<Facing>().is_err());
    }

    #[test]
    fn test_position_report_format() {
        assert_eq!(Position::new(0, 1, Facing::North).to_string(), "0,1,NORTH");
        assert_eq!(Position::new(-1, 2, Facing::West).to_string(), "-1,2,WEST");
    }

    #[test]
    fn test_step_overflow_is_none() {
        assert_eq!(Position::new(i32::MAX, 0, Facing::East).step(), None);
        assert_eq!(Position::new(0, i32::MIN, Facing::South).step(), None);
        assert_eq!(
            Position::new(3, 3, Facing::West).step(),
            Some(Position::new(2, 3, Facing::West))
        );
    }

    #[test]
    fn test_default_bounds_are_inclusive() {
        let bounds = Bounds::default();
        assert!(bounds.contains(0, 0));
        assert!(bounds.contains(5, 5));
        assert!(!bounds.contains(-1, 0));
        assert!(!bounds.contains(0, 6));
    }

    #[test]
    fn test_command_result_messages() {
        let ok = CommandResult::success(Position::new(1, 1, Facing::East));
        assert!(ok.is_success());
        assert_eq!(ok.error_message(), "");

        let err = CommandResult::failure(CommandError::NotPlaced);
        assert!(!err.is_success());
        assert_eq!(err.error_message(), "Robot is not placed");
        assert_eq!(
            CommandError::InvalidPosition { x: 9, y: 9 }.to_string(),
            "Position was not valid"
        );
    }

    #[test]
    fn test_position_json_shape() {
        let json = serde_json::to_string(&Position::new(2, 3, Facing::South)).unwrap();
        assert_eq!(json, r#"{"x":2,"y":3,"facing":"SOUTH"}"#);
    }
}
