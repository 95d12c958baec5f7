use std::path::Path;

use crate::file_system::FileSystem;

#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> anyhow::Result<String> {
    Ok(std::fs::read_to_string(path)?)
  }

  fn write(&self, path: &Path, content: &[u8]) -> anyhow::Result<()> {
    Ok(std::fs::write(path, content)?)
  }

  fn create_dir_all(&self, path: &Path) -> anyhow::Result<()> {
    Ok(std::fs::create_dir_all(path)?)
  }

  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }
}
