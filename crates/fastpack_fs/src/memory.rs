use std::path::{Path, PathBuf};

use dashmap::DashMap;

use crate::file_system::FileSystem;

/// In-memory file system for tests and embedding. Directories are implicit,
/// matching how the bundler treats paths as opaque identifiers.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
  files: DashMap<PathBuf, Vec<u8>>,
}

impl MemoryFileSystem {
  pub fn new<P: AsRef<Path>>(files: impl IntoIterator<Item = (P, &'static str)>) -> Self {
    let fs = Self::default();
    for (path, content) in files {
      fs.add_file(path.as_ref(), content);
    }
    fs
  }

  pub fn add_file(&self, path: &Path, content: &str) {
    self.files.insert(path.to_path_buf(), content.as_bytes().to_vec());
  }

  pub fn file_names(&self) -> Vec<PathBuf> {
    let mut names = self.files.iter().map(|entry| entry.key().clone()).collect::<Vec<_>>();
    names.sort();
    names
  }

  pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
    self.files.get(path).map(|entry| entry.value().clone())
  }
}

impl FileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> anyhow::Result<String> {
    let content = self
      .files
      .get(path)
      .ok_or_else(|| anyhow::anyhow!("No such file: {}", path.display()))?;
    Ok(String::from_utf8(content.value().clone())?)
  }

  fn write(&self, path: &Path, content: &[u8]) -> anyhow::Result<()> {
    self.files.insert(path.to_path_buf(), content.to_vec());
    Ok(())
  }

  fn create_dir_all(&self, _path: &Path) -> anyhow::Result<()> {
    Ok(())
  }

  fn exists(&self, path: &Path) -> bool {
    self.files.contains_key(path)
  }
}
