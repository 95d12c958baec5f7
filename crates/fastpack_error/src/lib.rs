use std::ops::{Deref, DerefMut};

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

/// Malformed or missing configuration. Always reported before any traversal
/// starts.
pub fn config_error(message: impl std::fmt::Display) -> anyhow::Error {
  anyhow::anyhow!("ConfigError: {message}")
}

/// A source unit could not be read or transformed. `referrers` is the import
/// chain that led to the failing unit, entry first.
pub fn resolution_error(
  unit: &str,
  referrers: &[String],
  cause: &anyhow::Error,
) -> anyhow::Error {
  if referrers.is_empty() {
    anyhow::anyhow!("ResolutionError: failed to load {unit:?} - {cause}")
  } else {
    anyhow::anyhow!(
      "ResolutionError: failed to load {unit:?} (imported via {}) - {cause}",
      referrers.join(" -> ")
    )
  }
}

pub fn cancelled_error() -> anyhow::Error {
  anyhow::anyhow!("BuildCancelled: the build was cancelled before completion")
}

#[cfg(test)]
mod tests {
  #[test]
  fn resolution_error_includes_referrer_chain() {
    let cause = anyhow::anyhow!("file not found");
    let err = super::resolution_error(
      "src/missing.js",
      &["src/app.js".to_string(), "src/nested.js".to_string()],
      &cause,
    );
    let msg = err.to_string();
    assert!(msg.starts_with("ResolutionError:"));
    assert!(msg.contains("src/app.js -> src/nested.js"));
    assert!(msg.contains("file not found"));
  }
}
