pub mod bundle_output;
pub mod cancel_token;

use std::sync::Arc;

use fastpack_common::{Module, ModuleIdx, NormalizedBundlerOptions};
use fastpack_fs::FileSystem;
use oxc_index::IndexVec;

use crate::transformers::TransformerRegistry;

pub type IndexModules = IndexVec<ModuleIdx, Module>;

pub type SharedOptions = Arc<NormalizedBundlerOptions>;
pub type SharedFileSystem = Arc<dyn FileSystem>;
pub type SharedTransformers = Arc<TransformerRegistry>;
