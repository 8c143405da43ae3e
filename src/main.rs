use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use toy_robot::utils::{logger, validation::Validate};
use toy_robot::{
    CliConfig, CommandProcessor, ConfigProvider, InMemoryPositionStore, JsonFilePositionStore,
    PositionStore, RobotService, Session,
};

fn main() -> anyhow::Result<()> {
    let config = match CliConfig::parse().load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(config.verbose, config.log_level());
    } else {
        logger::init_cli_logger(config.verbose, config.log_level());
    }
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let bounds = config.bounds();
    let store: Box<dyn PositionStore> = match config.state_file() {
        Some(path) => {
            tracing::info!("persisting position to {}", path);
            Box::new(JsonFilePositionStore::new(path))
        }
        None => Box::new(InMemoryPositionStore::new()),
    };

    tracing::info!(
        "grid x {}..={}, y {}..={}",
        bounds.min_x,
        bounds.max_x,
        bounds.min_y,
        bounds.max_y
    );
    let service = RobotService::new(CommandProcessor::new(bounds), store);
    let session = Session::new(&service)?;
    let mut stdout = io::stdout().lock();

    let result = match &config.script {
        Some(path) => {
            let file = File::open(path)?;
            session.run(BufReader::new(file), &mut stdout)
        }
        None => {
            let stdin = io::stdin();
            Session::<Box<dyn PositionStore>>::greet(stdin.is_terminal(), &mut stdout)?;
            session.run(stdin.lock(), &mut stdout)
        }
    };

    if let Err(e) = result {
        tracing::error!("session aborted: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    Ok(())
}
