use std::io::BufRead;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use crossbeam_channel::{select, unbounded};

use kitchen_wizard::console::{self, render, Command, Response};
use kitchen_wizard::error::AppResult;
use kitchen_wizard::{Config, HttpBackend, KitchenSession};

const LOG_TARGET_STARTUP: &str = "kitchen_wizard::startup";

/// How long to wait for outstanding requests once input has ended
const DRAIN_TIMEOUT: Duration = Duration::from_secs(120);

/// Initialize tracing with file rotation
///
/// Logs are written to `<config dir>/KitchenWizard/logs/`, one file per day
/// (`kitchen-wizard.log.YYYY-MM-DD`). Debug builds also log to stderr so the
/// wizard output on stdout stays readable.
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("KitchenWizard").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "kitchen-wizard.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

/// Forward stdin lines to the main thread
fn spawn_input_reader() -> crossbeam_channel::Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

fn run(session: &mut KitchenSession) {
    let input = spawn_input_reader();
    let completions = session.completions().clone();

    println!("{}", render::screen(session));
    println!("Type 'help' for commands.");

    loop {
        select! {
            recv(input) -> line => {
                let Ok(line) = line else {
                    // Input closed: let in-flight requests finish before exiting
                    while session.is_busy() && session.wait(DRAIN_TIMEOUT) {}
                    println!("{}", render::screen(session));
                    break;
                };
                match Command::parse(&line) {
                    Ok(command) => match console::execute(session, command) {
                        Response::Output(text) => println!("{}", text),
                        Response::Quit => break,
                    },
                    Err(message) => println!("{}", message),
                }
            }
            recv(completions) -> completion => {
                if let Ok(completion) = completion {
                    session.handle(completion);
                    println!("{}", render::screen(session));
                }
            }
        }
    }
}

fn main() -> AppResult<()> {
    initialize_tracing();
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting Kitchen Wizard v{} on ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH
    );

    let config = Config::load().context("failed to load configuration")?;
    tracing::info!(target: LOG_TARGET_STARTUP, "Backend: {}", config.api_base_url);

    let backend = HttpBackend::new(&config);
    let mut session = KitchenSession::new(Arc::new(backend));

    println!("===========================================");
    println!("  Kitchen In ur hands - Recipe Wizard");
    println!("===========================================\n");

    run(&mut session);

    tracing::info!(target: LOG_TARGET_STARTUP, "Kitchen Wizard stopped");
    Ok(())
}
