mod determine_reachable_modules;
mod sort_modules;

use fastpack_common::{EntryPoint, ModuleIdx};
use fastpack_utils::bitset::BitSet;
use oxc_index::{index_vec, IndexVec};

use crate::{stages::scan::ScanStageOutput, types::IndexModules};

#[derive(Debug)]
pub struct LinkStageOutput {
  pub module_table: IndexModules,
  pub entry_points: Vec<EntryPoint>,
  /// Module indices in deterministic execution order, dependency first.
  pub sorted_modules: Vec<ModuleIdx>,
  /// Owning-entry signature per module: bit i is set when entry i reaches
  /// the module. Drives all chunk sharing decisions.
  pub index_bits: IndexVec<ModuleIdx, BitSet>,
  pub warnings: Vec<anyhow::Error>,
}

#[derive(Debug)]
pub struct LinkStage {
  pub module_table: IndexModules,
  pub entry_points: Vec<EntryPoint>,
  pub sorted_modules: Vec<ModuleIdx>,
  pub index_bits: IndexVec<ModuleIdx, BitSet>,
  pub warnings: Vec<anyhow::Error>,
}

impl LinkStage {
  pub fn new(scan_stage_output: ScanStageOutput) -> Self {
    let ScanStageOutput { module_table, entry_points, warnings } = scan_stage_output;
    let modules_len = module_table.len();
    let entries_len = u32::try_from(entry_points.len()).unwrap_or(u32::MAX);
    Self {
      module_table,
      entry_points,
      sorted_modules: Vec::with_capacity(modules_len),
      index_bits: index_vec![BitSet::new(entries_len); modules_len],
      warnings,
    }
  }

  pub fn link(mut self) -> LinkStageOutput {
    self.sort_modules();
    self.determine_reachable_modules();

    LinkStageOutput {
      module_table: self.module_table,
      entry_points: self.entry_points,
      sorted_modules: self.sorted_modules,
      index_bits: self.index_bits,
      warnings: self.warnings,
    }
  }
}
