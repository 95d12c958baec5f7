pub mod input_item;
pub mod normalized_bundler_options;
pub mod source_kind;

use std::path::PathBuf;

use crate::InputItem;

#[derive(Default, Debug, Clone)]
pub struct BundlerOptions {
  // --- Input
  pub input: Option<Vec<InputItem>>,
  pub cwd: Option<PathBuf>,

  // --- Output
  pub dir: Option<String>,
  pub manifest: Option<bool>,

  // --- Build
  pub concurrency: Option<usize>,
}
