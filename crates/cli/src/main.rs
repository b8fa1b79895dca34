//! Warehouse terminal entry point.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use warehouse_cli::{App, Config, LogFormat};

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so they never interleave with the menus on stdout.
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config);

    // 2. Install Prometheus metrics recorder
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let metrics_handle = match builder.install_recorder() {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::warn!(error = %err, "metrics recorder not installed");
            None
        }
    };

    // 3. Run the session
    tracing::info!(?config, "starting warehouse session");
    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), io::stdout(), config);
    if let Some(handle) = metrics_handle {
        app = app.with_metrics(handle);
    }

    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "session aborted");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
