use arcstr::ArcStr;
use fastpack_common::{SourceTransformer, TransformOutput};
use regex::Regex;

use super::is_path_specifier;

/// Extracts `@import` specifiers, with or without `url(...)`.
pub struct StylesheetTransformer {
  import_re: Regex,
}

impl StylesheetTransformer {
  pub fn new() -> Self {
    let import_re = Regex::new(r#"@import\s+(?:url\(\s*)?["']?([^"')\s;]+)["']?\s*\)?"#)
      .expect("stylesheet import pattern is valid");
    Self { import_re }
  }
}

impl SourceTransformer for StylesheetTransformer {
  fn transform(&self, _id: &str, source: &str) -> anyhow::Result<TransformOutput> {
    let dependencies = self
      .import_re
      .captures_iter(source)
      .map(|captures| captures[1].to_string())
      .filter(|specifier| is_path_specifier(specifier))
      .collect();

    Ok(TransformOutput { content: ArcStr::from(source), dependencies })
  }
}

#[cfg(test)]
mod tests {
  use fastpack_common::SourceTransformer;

  use super::StylesheetTransformer;

  #[test]
  fn extracts_at_imports() {
    let source = "@import \"./base.css\";\n@import url('./theme.css');\nbody { color: red; }\n";
    let output = StylesheetTransformer::new().transform("style.css", source).unwrap();
    assert_eq!(output.dependencies, vec!["./base.css", "./theme.css"]);
  }
}
