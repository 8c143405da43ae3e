use thiserror::Error;

#[derive(Error, Debug)]
pub enum RobotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Position store error: {message}")]
    StoreError { message: String },

    #[error("Command was not valid: '{input}'")]
    ParseError { input: String },
}

impl RobotError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RobotError::IoError(_) => "Check that the file exists and is readable/writable",
            RobotError::SerializationError(_) => {
                "The state file is corrupt; delete it to start with an unplaced robot"
            }
            RobotError::ConfigError { .. } | RobotError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line arguments"
            }
            RobotError::StoreError { .. } => "Restart the simulator to reset the position store",
            RobotError::ParseError { .. } => {
                "Use one of: PLACE X,Y[,FACING], MOVE, LEFT, RIGHT, REPORT, EXIT"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RobotError>;
