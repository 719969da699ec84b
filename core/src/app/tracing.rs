use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds the global tracing subscriber: console logging to stderr, and optional file logging.
///
/// Filters not given explicitly are read from the `CONSOLE_LOG` and `FILE_LOG` environment variables.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  /// Initializes the global subscriber.
  ///
  /// # Panics
  ///
  /// Panics if a global subscriber was already set.
  pub fn build(self) -> AppTracing {
    #[cfg(feature = "app_env")]
    crate::app::env::load_dotenv();

    let console_filter = self.console_filter.unwrap_or_else(|| filter_from_env("CONSOLE_LOG"));
    let file = self.log_file_path.map(|p| {
      let filter = self.file_filter.unwrap_or_else(|| filter_from_env("FILE_LOG"));
      (p, filter)
    });
    AppTracing::new(console_filter, file)
  }
}

fn filter_from_env(env: &str) -> EnvFilter {
  EnvFilter::try_from_env(env).unwrap_or_default()
}

/// Keeps file logging alive; dropping it flushes and stops the file writer.
pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  #[inline]
  pub fn builder() -> AppTracingBuilder { AppTracingBuilder::default() }

  pub fn has_file_logging(&self) -> bool {
    #[cfg(feature = "app_tracing_file")] {
      self._file_tracing.0.is_some()
    }
    #[cfg(not(feature = "app_tracing_file"))] {
      false
    }
  }

  fn new(console_filter: EnvFilter, file: Option<(PathBuf, EnvFilter)>) -> Self {
    let console_layer = tracing_subscriber::fmt::layer()
      .with_writer(std::io::stderr)
      .with_filter(console_filter);
    let registry = tracing_subscriber::registry().with(console_layer);

    #[cfg(feature = "app_tracing_file")] {
      let file_writer = file.map(|(file_path, filter)| (open_log_file(&file_path), file_path, filter));
      match file_writer {
        Some((Ok(log_file), _, filter)) => {
          let (writer, guard) = tracing_appender::non_blocking(std::io::BufWriter::new(log_file));
          let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter);
          registry.with(file_layer).init();
          Self { _file_tracing: FileTracing(Some(guard)) }
        }
        Some((Err(cause), file_path, _)) => {
          registry.init();
          tracing::warn!(%cause, path = %file_path.display(), "failed to create log file; logging to console only");
          Self { _file_tracing: FileTracing::default() }
        }
        None => {
          registry.init();
          Self { _file_tracing: FileTracing::default() }
        }
      }
    }
    #[cfg(not(feature = "app_tracing_file"))] {
      registry.init();
      if let Some((file_path, _)) = file {
        tracing::warn!(path = %file_path.display(), "file logging requested but the `app_tracing_file` feature is disabled");
      }
      Self { _file_tracing: FileTracing }
    }
  }
}

#[cfg(feature = "app_tracing_file")]
fn open_log_file(file_path: &std::path::Path) -> std::io::Result<std::fs::File> {
  if let Some(parent) = file_path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::File::create(file_path)
}
