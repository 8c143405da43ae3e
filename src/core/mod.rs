pub mod processor;
pub mod service;

pub use crate::domain::model::{Bounds, Command, CommandError, CommandResult, Facing, Position};
pub use crate::domain::ports::{ConfigProvider, PositionStore};
pub use crate::utils::error::Result;
