use std::{path::Path, sync::Arc};

use arcstr::ArcStr;
use fastpack_common::{ModuleId, ModuleIdx, ModuleLoaderMsg, ModuleTaskResult, SourceKind};
use fastpack_error::BuildResult;
use fastpack_utils::xxhash::xxhash_base64_url;

use super::task_context::TaskContext;

/// Loads and transforms one source unit. Spawned at claim time by the module
/// loader; exactly one task ever runs per unique module id.
pub struct ModuleTask {
  ctx: Arc<TaskContext>,
  idx: ModuleIdx,
  id: ModuleId,
  kind: SourceKind,
}

impl ModuleTask {
  pub fn new(ctx: Arc<TaskContext>, idx: ModuleIdx, id: ModuleId, kind: SourceKind) -> Self {
    Self { ctx, idx, id, kind }
  }

  pub async fn run(self) {
    match self.run_inner().await {
      Ok(result) => {
        // The receiver is gone when the build was cancelled or already
        // failed; dropping the result is fine then.
        self.ctx.tx.send(ModuleLoaderMsg::ModuleDone(result)).await.ok();
      }
      Err(errors) => {
        self
          .ctx
          .tx
          .send(ModuleLoaderMsg::BuildErrors { idx: self.idx, errors: errors.0 })
          .await
          .ok();
      }
    }
  }

  async fn run_inner(&self) -> BuildResult<ModuleTaskResult> {
    let _permit = self.ctx.semaphore.acquire().await.map_err(anyhow::Error::from)?;

    let source = self.ctx.fs.read_to_string(Path::new(self.id.as_ref()))?;
    let output = self.ctx.transformers.for_kind(self.kind).transform(&self.id, &source)?;

    let digest = ArcStr::from(xxhash_base64_url(output.content.as_bytes()));

    let importer_dir =
      Path::new(self.id.as_ref()).parent().unwrap_or_else(|| Path::new("."));
    let resolved_deps = output
      .dependencies
      .iter()
      .map(|specifier| ModuleId::resolve(specifier, importer_dir))
      .collect();

    Ok(ModuleTaskResult {
      idx: self.idx,
      id: self.id.clone(),
      kind: self.kind,
      content: output.content,
      digest,
      resolved_deps,
    })
  }
}
