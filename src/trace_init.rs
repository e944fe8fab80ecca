//! Optional JSON trace output for host debugging.
//!
//! Only the `trace` feature installs a subscriber; otherwise `init_tracing`
//! does nothing and every engine event is compiled out.

/// Default filter when `RUST_LOG` is unset.
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "pinyin_engine=debug,pinyin_core=debug";

/// Trace file name inside the host-supplied log directory.
#[cfg(feature = "trace")]
const TRACE_FILE: &str = "pinyin-trace.jsonl";

/// Route engine events to `<log_dir>/pinyin-trace.jsonl`. Later calls are no-ops.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &std::path::Path) {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // The writer flushes until the host unloads the library.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set; pinyin trace file not attached");
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
