use fastpack_utils::indexmap::FxIndexMap;
use serde::Serialize;

/// Maps each configured entry path to the physical files realizing it.
/// Key order follows the configured entry order.
pub type Manifest = FxIndexMap<String, ManifestEntry>;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ManifestEntry {
  /// Physical path of the entry's own chunk, relative to the output dir.
  pub file: String,
  /// Physical paths of the chunks this entry depends on, dependency first,
  /// so emitting them in order yields a correct load order.
  pub imports: Vec<String>,
}
