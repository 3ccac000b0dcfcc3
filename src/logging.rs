use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default because stdout carries the command
/// output. Set `STOCKROOM_LOG` to a file path to enable it; the level
/// comes from `RUST_LOG` (default `info`).
///
/// Log files get the PID appended so concurrent runs don't clobber each
/// other: `{path}.{pid}`
pub fn init_tracing() {
    let Some(log_path) = std::env::var("STOCKROOM_LOG").ok() else {
        return;
    };

    let unique_path = format!("{}.{}", log_path, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
