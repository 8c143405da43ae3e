use crate::core::ConfigProvider;
use crate::domain::model::Bounds;
use crate::utils::error::{Result, RobotError};
use crate::utils::validation::{validate_bounds, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub store: StoreConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_min")]
    pub min_x: i32,
    #[serde(default = "default_max")]
    pub max_x: i32,
    #[serde(default = "default_min")]
    pub min_y: i32,
    #[serde(default = "default_max")]
    pub max_y: i32,
}

fn default_min() -> i32 {
    Bounds::DEFAULT_MIN
}

fn default_max() -> i32 {
    Bounds::DEFAULT_MAX
}

impl Default for GridConfig {
    fn default() -> Self {
        let bounds = Bounds::default();
        Self {
            min_x: bounds.min_x,
            max_x: bounds.max_x,
            min_y: bounds.min_y,
            max_y: bounds.max_y,
        }
    }
}

impl From<&GridConfig> for Bounds {
    fn from(grid: &GridConfig) -> Self {
        Bounds::new(grid.min_x, grid.max_x, grid.min_y, grid.max_y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub kind: StoreKind,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RobotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RobotError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STATE_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RobotError::ConfigError {
            message: format!("bad substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_bounds(&self.bounds())?;
        self.validate_store()?;
        self.validate_logging()
    }

    pub fn validate_store(&self) -> Result<()> {
        match (self.store.kind, &self.store.path) {
            (StoreKind::File, Some(path)) => validate_path("store.path", path),
            (StoreKind::File, None) => Err(RobotError::ConfigError {
                message: "store.kind = \"file\" requires store.path".to_string(),
            }),
            (StoreKind::Memory, _) => Ok(()),
        }
    }

    pub fn validate_logging(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            level
                .parse::<tracing::Level>()
                .map_err(|_| RobotError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: "Expected one of trace, debug, info, warn, error".to_string(),
                })?;
        }
        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn bounds(&self) -> Bounds {
        Bounds::from(&self.grid)
    }

    fn state_file(&self) -> Option<&str> {
        match self.store.kind {
            StoreKind::File => self.store.path.as_deref(),
            StoreKind::Memory => None,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
