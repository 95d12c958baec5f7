use arcstr::ArcStr;

/// One finished file of the build tree, ready to be persisted.
#[derive(Debug)]
pub struct OutputAsset {
  pub filename: ArcStr,
  pub content: String,
}
