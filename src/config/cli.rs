use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::domain::model::Bounds;
use crate::utils::error::Result;
use crate::utils::validation::{validate_bounds, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "toy-robot")]
#[command(about = "Drive a toy robot around a square grid")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Persist the robot position in this JSON file
    #[arg(long)]
    pub state_file: Option<String>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    pub script: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_x: Option<i32>,

    #[arg(long, allow_hyphen_values = true)]
    pub max_x: Option<i32>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_y: Option<i32>,

    #[arg(long, allow_hyphen_values = true)]
    pub max_y: Option<i32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(skip)]
    pub file: TomlConfig,
}

impl CliConfig {
    /// 載入 --config 指定的 TOML 檔案（若有）
    pub fn load(mut self) -> Result<Self> {
        if let Some(path) = &self.config {
            self.file = TomlConfig::from_file(path)?;
        }
        Ok(self)
    }

    pub fn json_logs(&self) -> bool {
        self.log_json || self.file.json_logs()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.file.log_level()
    }
}

impl ConfigProvider for CliConfig {
    // Command line values win over the file.
    fn bounds(&self) -> Bounds {
        let base = self.file.bounds();
        Bounds::new(
            self.min_x.unwrap_or(base.min_x),
            self.max_x.unwrap_or(base.max_x),
            self.min_y.unwrap_or(base.min_y),
            self.max_y.unwrap_or(base.max_y),
        )
    }

    fn state_file(&self) -> Option<&str> {
        self.state_file.as_deref().or_else(|| self.file.state_file())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.state_file {
            Some(path) => validate_path("--state-file", path)?,
            None => self.file.validate_store()?,
        }
        self.file.validate_logging()?;
        if let Some(path) = &self.script {
            validate_path("--script", path)?;
        }
        // Only the merged grid counts; overrides may repair the file's.
        validate_bounds(&self.bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["toy-robot"]);
        assert_eq!(config.bounds(), Bounds::default());
        assert_eq!(config.state_file(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut config = CliConfig::parse_from([
            "toy-robot",
            "--max-x",
            "9",
            "--min-y",
            "-2",
            "--state-file",
            "cli.json",
        ]);
        config.file = TomlConfig::from_toml_str(
            "[grid]\nmax_x = 3\nmax_y = 4\n[store]\nkind = \"file\"\npath = \"file.json\"\n",
        )
        .unwrap();

        assert_eq!(config.bounds(), Bounds::new(0, 9, -2, 4));
        assert_eq!(config.state_file(), Some("cli.json"));
    }

    #[test]
    fn test_overrides_can_repair_file_grid() {
        let mut config = CliConfig::parse_from(["toy-robot", "--min-x", "0", "--max-x", "4"]);
        config.file = TomlConfig::from_toml_str("[grid]\nmin_x = 8\nmax_x = 2\n").unwrap();

        assert!(config.file.validate().is_err());
        assert_eq!(config.bounds(), Bounds::new(0, 4, 0, 5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_store_still_checked_without_state_file() {
        let mut config = CliConfig::parse_from(["toy-robot"]);
        config.file = TomlConfig::from_toml_str("[store]\nkind = \"file\"\n").unwrap();
        assert!(config.validate().is_err());

        config.state_file = Some("robot.json".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_comes_from_file() {
        let mut config = CliConfig::parse_from(["toy-robot"]);
        config.file = TomlConfig::from_toml_str("[logging]\nlevel = \"info\"\n").unwrap();
        assert_eq!(config.log_level(), Some("info"));
    }

    #[test]
    fn test_inverted_override_fails_validation() {
        let config = CliConfig::parse_from(["toy-robot", "--min-x", "4", "--max-x", "1"]);
        assert!(config.validate().is_err());
    }
}
