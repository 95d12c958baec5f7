use arcstr::ArcStr;

use crate::{ModuleId, ModuleIdx, SourceKind};

pub struct ModuleTaskResult {
  pub idx: ModuleIdx,
  pub id: ModuleId,
  pub kind: SourceKind,
  pub content: ArcStr,
  pub digest: ArcStr,
  /// Dependency ids already resolved against the importing module's
  /// directory, in declaration order.
  pub resolved_deps: Vec<ModuleId>,
}
