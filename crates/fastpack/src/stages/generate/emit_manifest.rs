use fastpack_common::{ChunkIdx, Manifest, ManifestEntry};
use rustc_hash::FxHashSet;

use crate::graph::ChunkGraph;

use super::GenerateStage;

impl GenerateStage<'_> {
  /// Maps every configured entry to its own chunk plus the transitive
  /// closure of chunks it statically imports, dependency first, so a
  /// consumer can emit load statements in list order.
  pub fn emit_manifest(&self, chunk_graph: &ChunkGraph) -> Manifest {
    let mut manifest = Manifest::default();

    for entry in &self.link_output.entry_points {
      let entry_chunk = chunk_graph.entry_module_to_entry_chunk[&entry.idx];
      let file = chunk_filename(chunk_graph, entry_chunk);

      let mut imports = Vec::new();
      let mut visited = FxHashSet::default();
      visited.insert(entry_chunk);
      collect_imports_post_order(chunk_graph, entry_chunk, &mut visited, &mut imports);

      manifest.insert(entry.import.to_string(), ManifestEntry { file, imports });
    }

    manifest
  }
}

/// Post-order over the chunk import graph: a chunk's dependencies are pushed
/// before the chunk itself. The visited set keeps chunk-level cycles finite.
fn collect_imports_post_order(
  chunk_graph: &ChunkGraph,
  chunk_idx: ChunkIdx,
  visited: &mut FxHashSet<ChunkIdx>,
  imports: &mut Vec<String>,
) {
  for importee in &chunk_graph.chunk_table[chunk_idx].cross_chunk_imports {
    if !visited.insert(*importee) {
      continue;
    }
    collect_imports_post_order(chunk_graph, *importee, visited, imports);
    imports.push(chunk_filename(chunk_graph, *importee));
  }
}

fn chunk_filename(chunk_graph: &ChunkGraph, chunk_idx: ChunkIdx) -> String {
  chunk_graph.chunk_table[chunk_idx]
    .filename
    .as_ref()
    .expect("chunks are named before the manifest is emitted")
    .to_string()
}
