use crate::domain::model::{Bounds, Command, CommandError, CommandResult, Facing, Position};

/// What the caller must do after a command has been decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub result: CommandResult,
    /// Position to write to the store, if any.
    pub update: Option<Position>,
}

impl Outcome {
    fn accept(position: Position) -> Self {
        Self {
            result: CommandResult::success(position),
            update: Some(position),
        }
    }

    fn reject(error: CommandError) -> Self {
        Self {
            result: CommandResult::failure(error),
            update: None,
        }
    }

    fn read_only(result: CommandResult) -> Self {
        Self {
            result,
            update: None,
        }
    }
}

/// Stateless command decision logic over a grid of fixed bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProcessor {
    bounds: Bounds,
}

impl CommandProcessor {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn is_within_bounds(&self, x: i32, y: i32) -> bool {
        self.bounds.contains(x, y)
    }

    pub fn process(&self, stored: Option<Position>, command: Command) -> Outcome {
        let outcome = match command {
            Command::Place { x, y, facing } => self.place(stored, x, y, facing),
            Command::Move => self.advance(stored),
            Command::Left => Self::turn(stored, Facing::left),
            Command::Right => Self::turn(stored, Facing::right),
            Command::Report => Self::report(stored),
        };

        tracing::debug!(
            command = command.name(),
            success = outcome.result.is_success(),
            "processed {:?} from {:?} -> {:?}",
            command,
            stored,
            outcome.result
        );

        outcome
    }

    fn place(&self, stored: Option<Position>, x: i32, y: i32, facing: Option<Facing>) -> Outcome {
        if !self.is_within_bounds(x, y) {
            return Outcome::reject(CommandError::InvalidPosition { x, y });
        }

        // A first PLACE must name a facing; later ones may inherit it.
        match facing.or(stored.map(|p| p.facing)) {
            Some(facing) => Outcome::accept(Position::new(x, y, facing)),
            None => Outcome::reject(CommandError::InvalidPosition { x, y }),
        }
    }

    fn advance(&self, stored: Option<Position>) -> Outcome {
        let Some(current) = stored else {
            return Outcome::reject(CommandError::NotPlaced);
        };

        match current.step() {
            Some(next) if self.is_within_bounds(next.x, next.y) => Outcome::accept(next),
            Some(next) => Outcome::reject(CommandError::InvalidPosition {
                x: next.x,
                y: next.y,
            }),
            None => {
                let (dx, dy) = current.facing.delta();
                Outcome::reject(CommandError::InvalidPosition {
                    x: current.x.saturating_add(dx),
                    y: current.y.saturating_add(dy),
                })
            }
        }
    }

    fn turn(stored: Option<Position>, rotate: fn(Facing) -> Facing) -> Outcome {
        match stored {
            Some(current) => Outcome::accept(current.with_facing(rotate(current.facing))),
            None => Outcome::reject(CommandError::NotPlaced),
        }
    }

    fn report(stored: Option<Position>) -> Outcome {
        match stored {
            Some(current) => Outcome::read_only(CommandResult::success(current)),
            None => Outcome::reject(CommandError::NotPlaced),
        }
    }
}
