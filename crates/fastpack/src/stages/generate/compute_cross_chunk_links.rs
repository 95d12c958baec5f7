use fastpack_common::ChunkIdx;
use fastpack_utils::indexmap::FxIndexSet;
use oxc_index::{index_vec, IndexVec};

use crate::graph::ChunkGraph;

use super::GenerateStage;

impl GenerateStage<'_> {
  /// Lifts module-level edges to chunk-level imports. For every static edge
  /// whose importer and importee live in different chunks, the importer's
  /// chunk records an import of the importee's chunk. The per-chunk import
  /// list is ordered by the importee's first module execution order, so it is
  /// stable across builds.
  pub fn compute_cross_chunk_links(&self, chunk_graph: &mut ChunkGraph) {
    let index_first_exec_order: IndexVec<ChunkIdx, u32> = chunk_graph
      .chunk_table
      .iter()
      .map(|chunk| {
        chunk
          .modules
          .first()
          .map_or(u32::MAX, |idx| self.link_output.module_table[*idx].exec_order)
      })
      .collect();

    let mut index_cross_chunk_imports: IndexVec<ChunkIdx, FxIndexSet<ChunkIdx>> =
      index_vec![FxIndexSet::default(); chunk_graph.chunk_table.len()];

    for (chunk_idx, chunk) in chunk_graph.chunk_table.iter_enumerated() {
      for module_idx in &chunk.modules {
        for importee_idx in &self.link_output.module_table[*module_idx].import_records {
          let importee_chunk = chunk_graph.module_to_chunk[*importee_idx]
            .expect("every module was assigned to a chunk");
          if importee_chunk != chunk_idx {
            index_cross_chunk_imports[chunk_idx].insert(importee_chunk);
          }
        }
      }
    }

    for (chunk_idx, imports) in index_cross_chunk_imports.into_iter_enumerated() {
      let mut imports = imports.into_iter().collect::<Vec<_>>();
      imports.sort_unstable_by_key(|importee| index_first_exec_order[*importee]);
      chunk_graph.chunk_table[chunk_idx].cross_chunk_imports = imports;
    }
  }
}
