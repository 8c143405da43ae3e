use crate::domain::model::{Bounds, Position};
use crate::utils::error::Result;

/// Single-slot storage for the robot's current position.
///
/// Implementations do no validation; every record handed to `set` has
/// already been accepted by the command processor. `set` overwrites the whole
/// record and returns the store's acknowledgement.
pub trait PositionStore: Send {
    fn get(&self) -> Result<Option<Position>>;
    fn set(&mut self, position: Position) -> Result<bool>;
}

impl<S: PositionStore + ?Sized> PositionStore for Box<S> {
    fn get(&self) -> Result<Option<Position>> {
        (**self).get()
    }

    fn set(&mut self, position: Position) -> Result<bool> {
        (**self).set(position)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn bounds(&self) -> Bounds;
    /// `None` keeps the position in memory only.
    fn state_file(&self) -> Option<&str>;
}
