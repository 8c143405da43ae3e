use crate::core::processor::CommandProcessor;
use crate::domain::model::{Command, CommandError, CommandResult, Position};
use crate::domain::ports::PositionStore;
use crate::utils::error::{Result, RobotError};
use std::sync::Mutex;

/// Runs commands against a position store.
///
/// The store sits behind a mutex held for the whole read-process-write
/// sequence, so callers sharing a service through `Arc` never interleave
/// inside a command.
pub struct RobotService<S: PositionStore> {
    processor: CommandProcessor,
    store: Mutex<S>,
}

impl<S: PositionStore> RobotService<S> {
    pub fn new(processor: CommandProcessor, store: S) -> Self {
        Self {
            processor,
            store: Mutex::new(store),
        }
    }

    pub fn execute(&self, command: Command) -> Result<CommandResult> {
        let mut store = self.store.lock().map_err(|_| RobotError::StoreError {
            message: "position store lock poisoned".to_string(),
        })?;

        let current = store.get()?;
        let outcome = self.processor.process(current, command);

        let Some(update) = outcome.update else {
            return Ok(outcome.result);
        };

        if store.set(update)? {
            tracing::info!("robot now at {}", update);
            Ok(outcome.result)
        } else {
            tracing::warn!("position store refused {}", update);
            Ok(CommandResult::failure(CommandError::NotPersisted))
        }
    }

    pub fn current(&self) -> Result<Option<Position>> {
        let store = self.store.lock().map_err(|_| RobotError::StoreError {
            message: "position store lock poisoned".to_string(),
        })?;
        store.get()
    }

    pub fn into_store(self) -> Result<S> {
        self.store.into_inner().map_err(|_| RobotError::StoreError {
            message: "position store lock poisoned".to_string(),
        })
    }
}
