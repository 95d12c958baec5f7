/// The kind of a source unit, inferred from its file extension. Drives which
/// transformer handles it and which extension its chunk is emitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
  Script,
  Stylesheet,
  Other,
}

impl SourceKind {
  pub fn from_extension(ext: Option<&str>) -> Self {
    match ext {
      Some("js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx") => Self::Script,
      Some("css") => Self::Stylesheet,
      _ => Self::Other,
    }
  }

  /// The output extension for chunks of this kind. `Other` chunks keep the
  /// extension of their member module instead.
  pub fn default_extension(self) -> Option<&'static str> {
    match self {
      Self::Script => Some("js"),
      Self::Stylesheet => Some("css"),
      Self::Other => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::SourceKind;

  #[test]
  fn extension_dispatch() {
    assert_eq!(SourceKind::from_extension(Some("js")), SourceKind::Script);
    assert_eq!(SourceKind::from_extension(Some("mjs")), SourceKind::Script);
    assert_eq!(SourceKind::from_extension(Some("css")), SourceKind::Stylesheet);
    assert_eq!(SourceKind::from_extension(Some("svg")), SourceKind::Other);
    assert_eq!(SourceKind::from_extension(None), SourceKind::Other);
  }
}
