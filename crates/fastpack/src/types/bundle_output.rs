use fastpack_common::{Manifest, OutputAsset};

/// The finished build: every asset of the output tree plus the manifest
/// structure when enabled. Warnings are non-fatal diagnostics collected
/// across all stages.
#[derive(Debug)]
pub struct BundleOutput {
  pub assets: Vec<OutputAsset>,
  pub manifest: Option<Manifest>,
  pub warnings: Vec<anyhow::Error>,
}
