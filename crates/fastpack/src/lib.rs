mod bundler;
mod graph;
mod module_loader;
mod stages;
mod transformers;
mod types;
mod utils;

pub use crate::{
  bundler::Bundler,
  transformers::{
    PassthroughTransformer, ScriptTransformer, StylesheetTransformer, TransformerRegistry,
  },
  types::{bundle_output::BundleOutput, cancel_token::CancelToken},
};
pub use fastpack_common::*;
pub use fastpack_error::{BuildError, BuildResult};
pub use fastpack_fs::{FileSystem, MemoryFileSystem, OsFileSystem};
