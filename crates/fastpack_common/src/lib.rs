mod bundler_options;
mod chunk;
mod module;
mod module_loader;
mod transformer;
mod types;

pub use bundler_options::{
  input_item::InputItem, normalized_bundler_options::NormalizedBundlerOptions,
  source_kind::SourceKind, BundlerOptions,
};

pub use crate::{
  chunk::Chunk,
  module::Module,
  module_loader::{task_result::ModuleTaskResult, ModuleLoaderMsg},
  transformer::{SourceTransformer, TransformOutput},
  types::{
    chunk_kind::ChunkKind,
    entry_point::EntryPoint,
    manifest::{Manifest, ManifestEntry},
    module_id::ModuleId,
    output_asset::OutputAsset,
    raw_idx::{ChunkIdx, ModuleIdx},
  },
};
