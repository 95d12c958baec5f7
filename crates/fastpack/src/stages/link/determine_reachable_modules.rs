use rustc_hash::FxHashSet;

use super::LinkStage;

impl LinkStage {
  /// Fills every module's owning-entry signature: one DFS per entry over the
  /// static edges, setting that entry's bit on each reachable module. Two
  /// modules end up with equal signatures exactly when the same set of
  /// entries can reach both.
  pub(crate) fn determine_reachable_modules(&mut self) {
    for (bit, entry) in self.entry_points.iter().enumerate() {
      let bit = u32::try_from(bit).unwrap_or(u32::MAX);
      let mut visited = FxHashSet::default();
      let mut stack = vec![entry.idx];
      while let Some(module_idx) = stack.pop() {
        if !visited.insert(module_idx) {
          continue;
        }
        self.index_bits[module_idx].set_bit(bit);
        stack.extend(self.module_table[module_idx].import_records.iter().rev().copied());
      }
    }
  }
}
