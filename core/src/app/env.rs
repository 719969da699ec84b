use std::path::PathBuf;

/// Loads variables from a `.env` file in the current directory or its parents, returning the path of the loaded file.
/// A missing `.env` file is not an error.
pub fn load_dotenv() -> Option<PathBuf> {
  match dotenvy::dotenv() {
    Ok(path) => Some(path),
    Err(cause) if cause.not_found() => None,
    Err(_cause) => {
      #[cfg(feature = "tracing")]
      tracing::warn!(%_cause, "failed to load .env file; continuing without it");
      None
    }
  }
}
