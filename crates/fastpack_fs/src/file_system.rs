use std::path::Path;

/// Seam between the bundler and the disk. The bundler only ever reads source
/// units and writes finished assets, so the surface stays small.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> anyhow::Result<String>;

  fn write(&self, path: &Path, content: &[u8]) -> anyhow::Result<()>;

  fn create_dir_all(&self, path: &Path) -> anyhow::Result<()>;

  fn exists(&self, path: &Path) -> bool;
}
