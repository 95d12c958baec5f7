use std::path::PathBuf;

use crate::InputItem;

#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub input: Vec<InputItem>,
  pub cwd: PathBuf,

  // --- Output
  pub dir: String,
  pub manifest: bool,

  // --- Build
  pub concurrency: usize,
}
