use std::path::Path;

use arcstr::ArcStr;
use sugar_path::SugarPath;

/// `ModuleId` is the unique string identifier for each module.
/// - It will be used to identify the module in the whole bundle.
/// - Users could store the `ModuleId` to track the module across stages.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ModuleId(ArcStr);

impl ModuleId {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  /// Normalizes `specifier` against the directory that `cwd_or_importer`
  /// lives in, so the same unit reached via different relative spellings
  /// collapses into one id.
  pub fn resolve(specifier: &str, importer_dir: &Path) -> Self {
    let path = Path::new(specifier);
    let absolute = if path.is_absolute() {
      path.normalize()
    } else {
      importer_dir.join(path).normalize()
    };
    Self(ArcStr::from(absolute.to_slash_lossy().into_owned()))
  }

  pub fn stabilize(&self, cwd: &Path) -> String {
    if self.as_path().is_absolute() {
      self.relative(cwd).as_path().to_slash_lossy().into_owned()
    } else {
      self.to_string()
    }
  }

  pub fn extension(&self) -> Option<&str> {
    let (_, ext) = self.0.rsplit_once('.')?;
    (!ext.contains('/')).then_some(ext)
  }
}

impl std::ops::Deref for ModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

impl From<ArcStr> for ModuleId {
  fn from(value: ArcStr) -> Self {
    Self::new(value)
  }
}

impl std::fmt::Display for ModuleId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::ModuleId;

  #[test]
  fn relative_spellings_collapse() {
    let dir = Path::new("/project/src");
    let a = ModuleId::resolve("./shared.js", dir);
    let b = ModuleId::resolve("../src/shared.js", dir);
    assert_eq!(a, b);
  }

  #[test]
  fn extension_of_id() {
    let id = ModuleId::new("/project/src/style.css");
    assert_eq!(id.extension(), Some("css"));
    assert_eq!(ModuleId::new("/project/Makefile").extension(), None);
  }
}
