//! fanout-log command line.
//!
//! ```text
//!   emit:   argv ──▶ Logger::log / log_forced ──▶ targets ──▶ tracing
//!
//!   relay:  stdin lines ──▶ "[level] message" parse ──▶ Logger::log
//!             ▲
//!             ├── config watcher / SIGHUP ──▶ LoggingRuntime::apply
//!             └── SIGTERM / Ctrl-C ──▶ Shutdown
//!
//!   check:  config file ──▶ validate ──▶ effective config on stdout
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc};

use fanout_log::config::{load_config, ConfigWatcher};
use fanout_log::lifecycle::{LoggingRuntime, Shutdown, SignalAction, Signals};
use fanout_log::logger::LogArgs;
use fanout_log::model::Level;
use fanout_log::observability::{logging, metrics};
use fanout_log::LogConfig;

#[derive(Parser)]
#[command(name = "fanout-log")]
#[command(about = "Category logging with fan-out to configured targets", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit a single event
    Emit {
        #[arg(short, long, default_value = "info")]
        level: Level,

        #[arg(short, long, default_value = "app")]
        category: String,

        /// Message, may contain {0}, {1}, ... placeholders
        message: String,

        /// Substitution parameter, parsed as JSON when possible
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Bypass the gate and every target level
        #[arg(long)]
        force: bool,
    },
    /// Forward stdin lines as events until EOF or a shutdown signal
    Relay {
        #[arg(short, long, default_value = "stdin")]
        category: String,

        /// Level for lines without a `[level]` prefix
        #[arg(short, long, default_value = "info")]
        level: Level,
    },
    /// Validate the configuration and print the effective settings
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => LogConfig::default(),
    };

    if let Commands::Check = cli.command {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init_tracing(&config.observability.log_filter, config.observability.json)?;
    tracing::info!("fanout-log v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    match cli.command {
        Commands::Emit {
            level,
            category,
            message,
            params,
            force,
        } => {
            let runtime = LoggingRuntime::start(&config);
            let logger = runtime.registry().logger(&category);
            let args = if params.is_empty() {
                LogArgs::new()
            } else {
                LogArgs::params(params.iter().map(|p| parse_param(p)))
            };

            if force {
                logger.log_forced(level, &message, args);
            } else {
                logger.log(level, &message, args);
            }
        }
        Commands::Relay { category, level } => {
            relay(cli.config, &config, &category, level).await?;
        }
        Commands::Check => {}
    }

    Ok(())
}

async fn relay(
    config_path: Option<PathBuf>,
    config: &LogConfig,
    category: &str,
    default_level: Level,
) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = Arc::new(LoggingRuntime::start(config));
    let shutdown = Shutdown::new();
    let mut shutdown_rx = shutdown.subscribe();
    let (updates_tx, mut updates) = mpsc::unbounded_channel::<LogConfig>();

    // Dropping the watcher stops it, keep it alive for the whole relay.
    let _watcher = match config_path.as_deref() {
        Some(path) => {
            let (watcher, mut changes) = ConfigWatcher::new(path);
            let guard = watcher.run()?;
            let tx = updates_tx.clone();
            tokio::spawn(async move {
                while let Some(next) = changes.recv().await {
                    if tx.send(next).is_err() {
                        break;
                    }
                }
            });
            Some(guard)
        }
        None => None,
    };

    let mut signals = Signals::new()?;
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        loop {
            match signals.recv().await {
                SignalAction::Shutdown => {
                    tracing::info!("Shutdown signal received");
                    signal_shutdown.trigger();
                    break;
                }
                SignalAction::Reload => match config_path.as_deref() {
                    Some(path) => match load_config(path) {
                        Ok(next) => {
                            let _ = updates_tx.send(next);
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Reload failed, keeping current configuration");
                        }
                    },
                    None => tracing::warn!("Reload requested without a config file, ignoring"),
                },
            }
        }
    });

    let stdin = BufReader::new(tokio::io::stdin());
    let relayed = relay_lines(
        stdin,
        &runtime,
        category,
        default_level,
        &mut updates,
        &mut shutdown_rx,
    )
    .await?;

    shutdown.trigger();
    tracing::info!(relayed, "Relay stopped");
    Ok(())
}

/// Dispatch every line of `input` until EOF or shutdown, applying config
/// updates as they arrive. Returns the number of lines relayed.
///
/// Shutdown and reloads are polled before input, so a pending reload is
/// applied before the next line is dispatched.
async fn relay_lines<R>(
    input: R,
    runtime: &LoggingRuntime,
    category: &str,
    default_level: Level,
    updates: &mut mpsc::UnboundedReceiver<LogConfig>,
    shutdown_rx: &mut broadcast::Receiver<()>,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let logger = runtime.registry().logger(category);
    let mut lines = input.lines();
    let mut relayed = 0;

    loop {
        tokio::select! {
            biased;
            _ = shutdown_rx.recv() => break,
            Some(next) = updates.recv() => {
                runtime.apply(&next);
                tracing::info!(level = %next.level, targets = next.targets.len(), "Configuration reloaded");
            }
            line = lines.next_line() => match line? {
                Some(line) => {
                    let (level, message) = split_level(&line, default_level);
                    logger.log(level, message, LogArgs::new());
                    relayed += 1;
                }
                None => break,
            },
        }
    }

    Ok(relayed)
}

/// JSON when it parses, the raw text otherwise.
fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Split an optional `[level]` prefix off a relayed line.
fn split_level(line: &str, default: Level) -> (Level, &str) {
    let parsed = line.strip_prefix('[').and_then(|rest| {
        let (name, message) = rest.split_once(']')?;
        let level = name.trim().parse().ok()?;
        Some((level, message.trim_start()))
    });
    parsed.unwrap_or((default, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use fanout_log::gate::LevelGate;
    use tokio::io::AsyncWriteExt;

    #[test]
    fn test_split_level_prefix() {
        assert_eq!(split_level("[warn] disk low", Level::INFO), (Level::WARN, "disk low"));
        assert_eq!(split_level("[ERROR]boom", Level::INFO), (Level::ERROR, "boom"));
    }

    #[test]
    fn test_split_level_falls_back_to_default() {
        assert_eq!(split_level("plain line", Level::DEBUG), (Level::DEBUG, "plain line"));
        assert_eq!(split_level("[nope] text", Level::INFO), (Level::INFO, "[nope] text"));
        assert_eq!(split_level("[warn text", Level::INFO), (Level::INFO, "[warn text"));
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("42"), Value::from(42));
        assert_eq!(parse_param("{\"a\":1}"), serde_json::json!({"a": 1}));
        assert_eq!(parse_param("sda"), Value::from("sda"));
    }

    #[tokio::test]
    async fn test_relay_counts_lines_until_eof() {
        let runtime = LoggingRuntime::start(&LogConfig::default());
        let (_updates_tx, mut updates) = mpsc::unbounded_channel();
        let shutdown = Shutdown::new();
        let mut shutdown_rx = shutdown.subscribe();

        let input: &[u8] = b"[warn] disk low\nplain line\n";
        let relayed = relay_lines(input, &runtime, "stdin", Level::INFO, &mut updates, &mut shutdown_rx)
            .await
            .unwrap();

        assert_eq!(relayed, 2);
    }

    #[tokio::test]
    async fn test_relay_applies_reload_and_stops_on_shutdown() {
        let runtime = Arc::new(LoggingRuntime::start(&LogConfig::default()));
        let (updates_tx, mut updates) = mpsc::unbounded_channel();
        let shutdown = Shutdown::new();
        let mut shutdown_rx = shutdown.subscribe();
        let (mut writer, reader) = tokio::io::duplex(64);

        let relay_runtime = runtime.clone();
        let relay = tokio::spawn(async move {
            relay_lines(
                BufReader::new(reader),
                &relay_runtime,
                "stdin",
                Level::INFO,
                &mut updates,
                &mut shutdown_rx,
            )
            .await
        });

        let mut next = LogConfig::default();
        next.level = Level::ERROR;
        updates_tx.send(next).unwrap();
        writer.write_all(b"after reload\n").await.unwrap();

        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while runtime.registry().gate().target_level() != Level::ERROR {
            assert!(tokio::time::Instant::now() < deadline, "reload not applied");
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        // The writer stays open, so only the shutdown can end the relay.
        shutdown.trigger();
        let relayed = tokio::time::timeout(Duration::from_secs(5), relay)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert!(relayed <= 1);
        drop(writer);
    }
}
