use std::sync::Arc;

use arcstr::ArcStr;
use fastpack_common::ModuleId;
use fastpack_error::BuildResult;

use crate::{
  module_loader::{ModuleLoader, ModuleLoaderOutput},
  types::{SharedFileSystem, SharedOptions, SharedTransformers},
  utils::normalize_options::validate_options,
  CancelToken,
};

pub type ScanStageOutput = ModuleLoaderOutput;

pub struct ScanStage {
  fs: SharedFileSystem,
  options: SharedOptions,
  transformers: SharedTransformers,
  cancel: CancelToken,
}

impl ScanStage {
  pub fn new(
    fs: SharedFileSystem,
    options: SharedOptions,
    transformers: SharedTransformers,
    cancel: CancelToken,
  ) -> Self {
    Self { fs, options, transformers, cancel }
  }

  pub async fn scan(&mut self) -> BuildResult<ScanStageOutput> {
    let config_errors = validate_options(&self.options);
    if !config_errors.is_empty() {
      Err(config_errors)?;
    }

    let user_defined_entries = self.resolve_user_defined_entries();

    let module_loader = ModuleLoader::new(
      Arc::clone(&self.fs),
      Arc::clone(&self.options),
      Arc::clone(&self.transformers),
      self.cancel.clone(),
    );
    module_loader.fetch_all_modules(user_defined_entries).await
  }

  /// Entry identifiers are normalized against the configured cwd; the
  /// as-written path is kept alongside because it keys the manifest.
  fn resolve_user_defined_entries(&self) -> Vec<(Option<ArcStr>, ArcStr, ModuleId)> {
    self
      .options
      .input
      .iter()
      .map(|input_item| {
        let id = ModuleId::resolve(&input_item.import, &self.options.cwd);
        (
          input_item.name.as_ref().map(ArcStr::from),
          ArcStr::from(input_item.import.as_str()),
          id,
        )
      })
      .collect()
  }
}
