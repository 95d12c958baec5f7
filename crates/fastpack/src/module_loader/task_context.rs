use fastpack_common::ModuleLoaderMsg;
use tokio::sync::{mpsc::Sender, Semaphore};

use crate::types::{SharedFileSystem, SharedTransformers};

/// State shared by every module task of one build. Constructed fresh per
/// build invocation and discarded at completion.
pub struct TaskContext {
  pub fs: SharedFileSystem,
  pub transformers: SharedTransformers,
  pub tx: Sender<ModuleLoaderMsg>,
  /// Bounds how many transforms run at once.
  pub semaphore: Semaphore,
}
