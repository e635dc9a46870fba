//! Process-wide plumbing: errors and logger setup.

pub mod error;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::api::config::LogConfig;

const LOG_FILE_PREFIX: &str = "map_picker.log";

lazy_static::lazy_static! {
    static ref LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);
    static ref WORKER_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
        Mutex::new(None);
}

/// Installs the global logger.
///
/// Records from the `log` macros are written to stdout and, if `config.directory` is set, to a
/// daily rolling file in that directory. `RUST_LOG` takes precedence over `config.filter`.
/// Calling this more than once has no effect.
pub fn init_logger(config: &LogConfig) {
    if LOGGER_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let file_layer = config.directory.as_ref().map(|directory| {
        let file_appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
        let (non_blocking_file_writer, guard) = tracing_appender::non_blocking(file_appender);

        // The guard flushes the file writer on drop, so it lives as long as the process.
        keep_alive(&WORKER_GUARD, guard);

        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file_writer)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .boxed()
    });

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        warn!("Logger was already set by someone else: {err}");
        return;
    }

    debug!("Logger initialized");
}

/// Stores `value` in `slot`, also when a previous holder of the lock panicked.
fn keep_alive<T>(slot: &Mutex<Option<T>>, value: T) {
    *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialization_is_ignored() {
        let config = LogConfig::default();
        init_logger(&config);
        init_logger(&config);
        assert!(LOGGER_INITIALIZED.load(Ordering::SeqCst));
    }

    #[test]
    fn guard_is_kept_after_lock_poisoning() {
        let slot = Mutex::new(None);
        let _ = std::panic::catch_unwind(|| {
            let _held = slot.lock();
            panic!("poison the slot");
        });
        assert!(slot.is_poisoned());

        keep_alive(&slot, 7);
        let stored = *slot.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(stored, Some(7));
    }
}
