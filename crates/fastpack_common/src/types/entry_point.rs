use arcstr::ArcStr;

use crate::{ModuleIdx, SourceKind};

#[derive(Debug)]
pub struct EntryPoint {
  pub idx: ModuleIdx,
  /// The entry path exactly as configured. Used as the manifest key.
  pub import: ArcStr,
  pub name: Option<ArcStr>,
  pub kind: SourceKind,
}
