#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a JSON subscriber writing to `altekh-trace.jsonl` in `log_dir`,
/// or to stderr when no directory is given. Only the first call has effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("altekh_engine=debug"));
        let builder = tracing_subscriber::fmt()
            .json()
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter);

        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "altekh-trace.jsonl");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                std::mem::forget(guard); // flushed for the life of the process
                builder.with_writer(non_blocking).init();
            }
            None => builder.with_writer(std::io::stderr).init(),
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) {}
