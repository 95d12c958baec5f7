use arcstr::ArcStr;
use fastpack_common::{ChunkIdx, OutputAsset};
use fastpack_utils::xxhash::xxhash_base64_url;
use itertools::Itertools;
use oxc_index::{index_vec, IndexVec};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::graph::ChunkGraph;

use super::GenerateStage;

/// How many digest characters a filename starts with. Extended per chunk
/// when two distinct digests happen to share a prefix.
const SHORT_HASH_LEN: usize = 8;

impl GenerateStage<'_> {
  /// Turns every chunk into one output asset. Filenames are derived from the
  /// chunk's content digest alone, never from discovery order or timestamps,
  /// so unchanged inputs reproduce byte-identical paths.
  pub fn render_chunk_to_assets(
    &self,
    chunk_graph: &mut ChunkGraph,
    warnings: &mut Vec<anyhow::Error>,
  ) -> Vec<OutputAsset> {
    let module_table = &self.link_output.module_table;

    let index_contents: IndexVec<ChunkIdx, String> = chunk_graph
      .chunk_table
      .par_iter()
      .map(|chunk| {
        let mut content =
          chunk.modules.iter().map(|idx| module_table[*idx].content.trim_end()).join("\n");
        content.push('\n');
        content
      })
      .collect::<Vec<_>>()
      .into();

    let index_digests: IndexVec<ChunkIdx, String> = index_contents
      .par_iter()
      .map(|content| xxhash_base64_url(content.as_bytes()))
      .collect::<Vec<_>>()
      .into();

    // Names are assigned in sorted chunk order, which is itself
    // deterministic, so collision handling is reproducible too.
    let mut used_names: FxHashMap<ArcStr, ChunkIdx> = FxHashMap::default();
    let mut index_filenames: IndexVec<ChunkIdx, Option<ArcStr>> =
      index_vec![None; chunk_graph.chunk_table.len()];
    for chunk_idx in &chunk_graph.sorted_chunk_idx_vec {
      let chunk = &chunk_graph.chunk_table[*chunk_idx];
      let digest = &index_digests[*chunk_idx];
      let extension = chunk.extension(module_table);

      let mut len = SHORT_HASH_LEN.min(digest.len());
      let filename = loop {
        let candidate = ArcStr::from(format!("{}.{}", &digest[..len], extension));
        match used_names.get(&candidate) {
          None => {
            used_names.insert(candidate.clone(), *chunk_idx);
            break candidate;
          }
          Some(holder) if index_digests[*holder] == *digest => {
            // Two chunks with byte-identical content. Not a hash collision;
            // disambiguate with an ordinal so neither file overwrites the
            // other.
            break disambiguate_duplicate(&mut used_names, *chunk_idx, digest, len, &extension);
          }
          Some(holder) => {
            warnings.push(anyhow::anyhow!(
              "Short hash collision between chunks {holder:?} and {chunk_idx:?} on \
               {candidate:?}; extending the hash length."
            ));
            len += 1;
            debug_assert!(len <= digest.len(), "full digests of distinct content never collide");
          }
        }
      };
      index_filenames[*chunk_idx] = Some(filename);
    }

    for (chunk_idx, filename) in index_filenames.into_iter_enumerated() {
      chunk_graph.chunk_table[chunk_idx].filename = filename;
    }

    chunk_graph
      .sorted_chunk_idx_vec
      .iter()
      .map(|chunk_idx| OutputAsset {
        filename: chunk_graph.chunk_table[*chunk_idx]
          .filename
          .clone()
          .expect("every chunk was named"),
        content: index_contents[*chunk_idx].clone(),
      })
      .collect()
  }
}

fn disambiguate_duplicate(
  used_names: &mut FxHashMap<ArcStr, ChunkIdx>,
  chunk_idx: ChunkIdx,
  digest: &str,
  len: usize,
  extension: &str,
) -> ArcStr {
  let mut ordinal = 1u32;
  let mut buffer = itoa::Buffer::new();
  loop {
    let candidate =
      ArcStr::from(format!("{}-{}.{}", &digest[..len], buffer.format(ordinal), extension));
    if !used_names.contains_key(&candidate) {
      used_names.insert(candidate.clone(), chunk_idx);
      return candidate;
    }
    ordinal += 1;
  }
}
