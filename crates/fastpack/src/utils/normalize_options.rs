use fastpack_common::{BundlerOptions, NormalizedBundlerOptions};
use fastpack_error::config_error;

const DEFAULT_CONCURRENCY: usize = 16;

pub fn normalize_options(raw_options: BundlerOptions) -> NormalizedBundlerOptions {
  NormalizedBundlerOptions {
    input: raw_options.input.unwrap_or_default(),
    cwd: raw_options
      .cwd
      .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir")),
    dir: raw_options.dir.unwrap_or_else(|| "dist".to_string()),
    manifest: raw_options.manifest.unwrap_or(false),
    concurrency: raw_options.concurrency.unwrap_or(DEFAULT_CONCURRENCY),
  }
}

/// Fails fast, before any traversal starts. Every violation is reported, not
/// just the first.
pub fn validate_options(options: &NormalizedBundlerOptions) -> Vec<anyhow::Error> {
  let mut errors = Vec::new();

  if options.input.is_empty() {
    errors.push(config_error("you must supply at least one entry input"));
  }
  for (index, item) in options.input.iter().enumerate() {
    if item.import.is_empty() {
      errors.push(config_error(format!("entry input #{index} has an empty path")));
    }
  }
  if options.dir.is_empty() {
    errors.push(config_error("the output directory must not be empty"));
  }
  if options.concurrency == 0 {
    errors.push(config_error("concurrency must be at least 1"));
  }

  errors
}

#[cfg(test)]
mod tests {
  use fastpack_common::BundlerOptions;

  use super::{normalize_options, validate_options};

  #[test]
  fn defaults() {
    let options = normalize_options(BundlerOptions {
      input: Some(vec!["src/app.js".into()]),
      ..BundlerOptions::default()
    });
    assert_eq!(options.dir, "dist");
    assert!(!options.manifest);
    assert!(options.concurrency > 0);
  }

  #[test]
  fn rejects_invalid_configuration() {
    let options = normalize_options(BundlerOptions {
      input: Some(vec!["".into()]),
      dir: Some(String::new()),
      concurrency: Some(0),
      ..BundlerOptions::default()
    });
    let errors = validate_options(&options);
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.to_string().starts_with("ConfigError:")));
  }
}
