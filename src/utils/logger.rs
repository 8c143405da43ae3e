use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. `verbose` beats the configured level.
pub fn default_directive(level: Option<&str>, verbose: bool, fallback: &str) -> String {
    if verbose {
        return "toy_robot=debug,info".to_string();
    }
    format!("toy_robot={}", level.unwrap_or(fallback))
}

fn env_filter(level: Option<&str>, verbose: bool, fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level, verbose, fallback)))
}

// Logs go to stderr; stdout is reserved for REPORT output.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(level, verbose, "warn"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(level, verbose, "info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // one JSON object per line for scripted runs
        )
        .init();
}
