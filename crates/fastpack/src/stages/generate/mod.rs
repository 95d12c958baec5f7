mod code_splitting;
mod compute_cross_chunk_links;
mod emit_manifest;
mod render_chunk_to_assets;

use arcstr::ArcStr;
use fastpack_common::OutputAsset;
use fastpack_error::BuildResult;

use crate::{
  stages::link::LinkStageOutput,
  types::{bundle_output::BundleOutput, SharedOptions},
};

pub const MANIFEST_FILENAME: &str = "manifest.json";

pub struct GenerateStage<'a> {
  link_output: &'a mut LinkStageOutput,
  options: &'a SharedOptions,
}

impl<'a> GenerateStage<'a> {
  pub fn new(link_output: &'a mut LinkStageOutput, options: &'a SharedOptions) -> Self {
    Self { link_output, options }
  }

  pub fn generate(&mut self) -> BuildResult<BundleOutput> {
    let mut warnings = std::mem::take(&mut self.link_output.warnings);

    let mut chunk_graph = self.generate_chunks();
    self.compute_cross_chunk_links(&mut chunk_graph);

    let mut assets = self.render_chunk_to_assets(&mut chunk_graph, &mut warnings);

    let manifest = if self.options.manifest {
      let manifest = self.emit_manifest(&chunk_graph);
      let content = serde_json::to_string_pretty(&manifest)
        .map_err(|e| anyhow::anyhow!("Failed to serialize the manifest: {e}"))?;
      assets.push(OutputAsset { filename: ArcStr::from(MANIFEST_FILENAME), content });
      Some(manifest)
    } else {
      None
    };

    Ok(BundleOutput { assets, manifest, warnings })
  }
}
