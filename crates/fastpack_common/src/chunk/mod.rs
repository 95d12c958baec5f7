use arcstr::ArcStr;
use fastpack_utils::bitset::BitSet;
use oxc_index::IndexVec;

use crate::{ChunkIdx, ChunkKind, Module, ModuleIdx, SourceKind};

/// An emitted output unit grouping one or more modules. Built once by the
/// allocator and read-only afterwards; `filename` is filled in during
/// rendering.
#[derive(Debug, Default)]
pub struct Chunk {
  pub kind: ChunkKind,
  /// Exact owning-entry signature shared by every member module.
  pub bits: BitSet,
  pub source_kind: Option<SourceKind>,
  /// Member modules ordered by `exec_order`.
  pub modules: Vec<ModuleIdx>,
  /// Chunks this chunk statically imports from, deterministically ordered.
  pub cross_chunk_imports: Vec<ChunkIdx>,
  pub filename: Option<ArcStr>,
}

impl Chunk {
  pub fn new(kind: ChunkKind, bits: BitSet, source_kind: SourceKind) -> Self {
    Self { kind, bits, source_kind: Some(source_kind), ..Self::default() }
  }

  /// The output extension, derived from the chunk's uniform source kind.
  /// Chunks of `Other` modules keep their first member's own extension.
  pub fn extension(&self, module_table: &IndexVec<ModuleIdx, Module>) -> ArcStr {
    match self.source_kind.and_then(SourceKind::default_extension) {
      Some(ext) => ArcStr::from(ext),
      None => self
        .modules
        .first()
        .and_then(|idx| module_table[*idx].id.extension())
        .map_or_else(|| arcstr::literal!("bin"), ArcStr::from),
    }
  }
}
