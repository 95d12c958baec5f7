use fastpack_common::{Chunk, ChunkIdx, ChunkKind, SourceKind};
use fastpack_utils::bitset::BitSet;
use rustc_hash::FxHashMap;

use crate::graph::ChunkGraph;

use super::GenerateStage;

impl GenerateStage<'_> {
  /// Partitions the module graph into chunks.
  ///
  /// - A module owned by exactly one entry, of the same kind as that entry,
  ///   joins the entry's own chunk.
  /// - Everything else is grouped by its exact `(owning-entry signature,
  ///   source kind)`, so code shared by the same subset of entries is emitted
  ///   once and mixed-kind chunks cannot arise.
  ///
  /// Modules were sorted by execution order in the link stage, so chunk
  /// membership order is deterministic here without further work.
  pub fn generate_chunks(&self) -> ChunkGraph {
    let entries_len = u32::try_from(self.link_output.entry_points.len()).unwrap_or(u32::MAX);
    let mut chunk_graph = ChunkGraph::new(&self.link_output.module_table);

    let mut index_entry_chunk: Vec<ChunkIdx> =
      Vec::with_capacity(self.link_output.entry_points.len());
    for (bit, entry) in self.link_output.entry_points.iter().enumerate() {
      let bit = u32::try_from(bit).unwrap_or(u32::MAX);
      let mut bits = BitSet::new(entries_len);
      bits.set_bit(bit);
      let chunk_idx = chunk_graph.add_chunk(Chunk::new(
        ChunkKind::EntryPoint { bit, module: entry.idx },
        bits,
        entry.kind,
      ));
      index_entry_chunk.push(chunk_idx);
      chunk_graph.entry_module_to_entry_chunk.insert(entry.idx, chunk_idx);
    }

    let mut chunk_by_signature: FxHashMap<(BitSet, SourceKind), ChunkIdx> = FxHashMap::default();

    for module_idx in &self.link_output.sorted_modules {
      let module = &self.link_output.module_table[*module_idx];
      let bits = &self.link_output.index_bits[*module_idx];
      debug_assert!(!bits.is_empty(), "every discovered module is reachable from an entry");

      // Entry modules always anchor their own chunk, even when another entry
      // reaches them as well.
      if let Some(entry_chunk) = chunk_graph.entry_module_to_entry_chunk.get(module_idx) {
        chunk_graph.add_module_to_chunk(*module_idx, *entry_chunk);
        continue;
      }

      let owner = sole_owner(bits, entries_len);
      if let Some(bit) = owner {
        let entry = &self.link_output.entry_points[bit as usize];
        if entry.kind == module.kind {
          chunk_graph.add_module_to_chunk(*module_idx, index_entry_chunk[bit as usize]);
          continue;
        }
      }

      let chunk_idx = *chunk_by_signature
        .entry((bits.clone(), module.kind))
        .or_insert_with(|| {
          chunk_graph.add_chunk(Chunk::new(ChunkKind::Common, bits.clone(), module.kind))
        });
      chunk_graph.add_module_to_chunk(*module_idx, chunk_idx);
    }

    // Entry chunks in configured order, then common chunks by the execution
    // order of their first module.
    let mut common_chunks = chunk_graph
      .chunk_table
      .iter_enumerated()
      .filter(|(_, chunk)| !chunk.kind.is_entry_point())
      .map(|(chunk_idx, chunk)| {
        let first_exec_order = chunk
          .modules
          .first()
          .map_or(u32::MAX, |idx| self.link_output.module_table[*idx].exec_order);
        (first_exec_order, chunk_idx)
      })
      .collect::<Vec<_>>();
    common_chunks.sort_unstable();

    chunk_graph.sorted_chunk_idx_vec = index_entry_chunk
      .into_iter()
      .chain(common_chunks.into_iter().map(|(_, chunk_idx)| chunk_idx))
      .collect();

    chunk_graph
  }
}

/// Returns the owning entry's bit when `bits` has exactly one set bit.
fn sole_owner(bits: &BitSet, entries_len: u32) -> Option<u32> {
  (bits.count_ones() == 1).then(|| (0..entries_len).find(|bit| bits.has_bit(*bit)))?
}
