// # dynflare
//
// One-shot dynamic DNS updater: resolve the current public IP, then point
// every A record of the configured Cloudflare zone at it.
//
// ## Configuration
//
// Credentials come from a `.env` file in the working directory (required;
// a missing file is a configuration error), plus the process environment:
//
// - `ZONE_ID`: target DNS zone identifier (required)
// - `TOKEN`: bearer credential for the Cloudflare API (required)
// - `IP_ENDPOINT`: public-IP lookup URL (optional)
// - `DRY_RUN`: `1`/`true`/`yes` to skip the update PUTs (optional)
// - `LOG_LEVEL`: trace, debug, info, warn, error (optional, default info)
//
// ## Example
//
// ```bash
// cat > .env <<'EOF'
// ZONE_ID=abc123
// TOKEN=your_token
// EOF
//
// dynflare
// ```

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use dynflare_core::{Config, UpdateEngine};
use dynflare_ip_http::HttpIpSource;
use dynflare_provider_cloudflare::CloudflareZone;

/// Exit codes for different termination scenarios
///
/// - 0: clean completion (regardless of per-record outcomes, which are
///   only logged)
/// - 1: configuration error, nothing was sent
/// - 2: runtime error, the run aborted
#[derive(Debug, Clone, Copy)]
enum RunExitCode {
    /// Clean completion
    Clean = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (aborted run)
    RuntimeError = 2,
}

impl From<RunExitCode> for ExitCode {
    fn from(code: RunExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Load configuration from the `.env` file and the environment
fn load_config() -> Result<Config> {
    // The credentials live in .env; refusing to run without it keeps a
    // stray invocation from picking up unrelated shell variables.
    dotenvy::dotenv().context("failed to load .env file")?;

    let zone_id = env::var("ZONE_ID").context("ZONE_ID is required, set it in .env")?;
    let api_token = env::var("TOKEN").context("TOKEN is required, set it in .env")?;

    let mut config = Config::new(zone_id, api_token).with_dry_run(flag_set("DRY_RUN"));
    if let Ok(endpoint) = env::var("IP_ENDPOINT") {
        config = config.with_ip_endpoint(endpoint);
    }

    config.validate()?;
    Ok(config)
}

/// Whether an environment flag is set to a truthy value
fn flag_set(name: &str) -> bool {
    env::var(name).is_ok_and(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
}

fn log_level() -> Level {
    match env::var("LOG_LEVEL").unwrap_or_default().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> ExitCode {
    // Load and validate configuration before anything touches the network
    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            return RunExitCode::ConfigError.into();
        }
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level()).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return RunExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {e}");
            return RunExitCode::RuntimeError.into();
        }
    };

    match rt.block_on(run(config)) {
        Ok(()) => RunExitCode::Clean.into(),
        Err(e) => {
            error!("Update run failed: {e:#}");
            RunExitCode::RuntimeError.into()
        }
    }
}

/// Wire the components together and run one update pass
async fn run(config: Config) -> Result<()> {
    if config.dry_run {
        info!("dry-run mode, no records will be changed");
    }

    let ip_source = HttpIpSource::new(&config.ip_endpoint);
    let zone = CloudflareZone::new(&config.api_token, &config.zone_id, config.dry_run)?;

    let engine = UpdateEngine::new(Box::new(ip_source), Box::new(zone));
    let report = engine.run().await?;

    info!(
        listed = report.listed,
        updated = report.updated,
        failed = report.failed,
        skipped = report.skipped,
        "update pass finished"
    );
    Ok(())
}
