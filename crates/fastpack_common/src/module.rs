use arcstr::ArcStr;

use crate::{ModuleId, ModuleIdx, SourceKind};

/// One resolved source unit in the dependency graph.
#[derive(Debug)]
pub struct Module {
  pub idx: ModuleIdx,
  pub id: ModuleId,
  pub kind: SourceKind,
  /// Transformed content, as returned by the source transformer.
  pub content: ArcStr,
  /// xxh3 digest of `content`, base64-url encoded.
  pub digest: ArcStr,
  /// Static dependencies in declaration order. May point back at a module
  /// on the active import chain; cycles are legal.
  pub import_records: Vec<ModuleIdx>,
  /// Deterministic execution order assigned by the link stage,
  /// dependency first. `u32::MAX` until linking runs.
  pub exec_order: u32,
}

impl Module {
  pub fn new(
    idx: ModuleIdx,
    id: ModuleId,
    kind: SourceKind,
    content: ArcStr,
    digest: ArcStr,
  ) -> Self {
    Self { idx, id, kind, content, digest, import_records: Vec::new(), exec_order: u32::MAX }
  }
}
