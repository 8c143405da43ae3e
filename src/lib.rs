pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::parser::{CommandParser, ParsedLine};
pub use adapters::storage::{InMemoryPositionStore, JsonFilePositionStore};
pub use app::session::{Session, SessionSummary};
pub use crate::core::{processor::CommandProcessor, service::RobotService};
pub use domain::model::{Bounds, Command, CommandError, CommandResult, Facing, Position};
pub use domain::ports::{ConfigProvider, PositionStore};
pub use utils::error::{Result, RobotError};
