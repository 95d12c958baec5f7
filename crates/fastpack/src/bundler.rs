use std::{path::Path, sync::Arc};

use fastpack_common::BundlerOptions;
use fastpack_error::BuildResult;
use fastpack_fs::OsFileSystem;

use crate::{
  stages::{generate::GenerateStage, link::LinkStage, scan::ScanStage},
  transformers::TransformerRegistry,
  types::{bundle_output::BundleOutput, SharedFileSystem, SharedOptions, SharedTransformers},
  utils::normalize_options::normalize_options,
  CancelToken,
};

pub struct Bundler {
  pub closed: bool,
  fs: SharedFileSystem,
  options: SharedOptions,
  transformers: SharedTransformers,
  cancel: CancelToken,
}

impl Bundler {
  pub fn new(options: BundlerOptions) -> Self {
    Self::with_file_system(options, Arc::new(OsFileSystem))
  }

  pub fn with_file_system(options: BundlerOptions, fs: SharedFileSystem) -> Self {
    Bundler {
      closed: false,
      fs,
      options: Arc::new(normalize_options(options)),
      transformers: Arc::new(TransformerRegistry::default()),
      cancel: CancelToken::default(),
    }
  }

  pub fn with_transformers(mut self, transformers: TransformerRegistry) -> Self {
    self.transformers = Arc::new(transformers);
    self
  }

  /// A handle that aborts an in-flight build when cancelled, e.g. because a
  /// newer build request supersedes this one.
  pub fn cancel_token(&self) -> CancelToken {
    self.cancel.clone()
  }

  pub fn close(&mut self) {
    self.closed = true;
    self.cancel.cancel();
  }

  /// Runs the whole pipeline. The build is computed entirely in memory;
  /// only with `is_write` and only after full success is anything persisted,
  /// so a failing build leaves no partial output tree behind.
  pub async fn build(&mut self, is_write: bool) -> BuildResult<BundleOutput> {
    if self.closed {
      Err(anyhow::anyhow!(
        "The bundler is closed; create a new instance to build again."
      ))?;
    }

    let mut scan_stage = ScanStage::new(
      Arc::clone(&self.fs),
      Arc::clone(&self.options),
      Arc::clone(&self.transformers),
      self.cancel.clone(),
    );
    let scan_stage_output = scan_stage.scan().await?;

    let mut link_stage_output = LinkStage::new(scan_stage_output).link();

    let output = GenerateStage::new(&mut link_stage_output, &self.options).generate()?;

    if is_write {
      self.write_assets(&output)?;
    }

    Ok(output)
  }

  fn write_assets(&self, output: &BundleOutput) -> BuildResult<()> {
    let dist = self.options.cwd.join(&self.options.dir);
    self.fs.create_dir_all(&dist)?;
    for asset in &output.assets {
      let path = dist.join(Path::new(asset.filename.as_str()));
      self.fs.write(&path, asset.content.as_bytes())?;
    }
    Ok(())
  }
}
