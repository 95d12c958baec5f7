use crate::ModuleIdx;

#[derive(Debug, Default)]
pub enum ChunkKind {
  EntryPoint { bit: u32, module: ModuleIdx },
  #[default]
  Common,
}

impl ChunkKind {
  pub fn is_entry_point(&self) -> bool {
    matches!(self, Self::EntryPoint { .. })
  }
}
