use arcstr::ArcStr;
use fastpack_common::{SourceTransformer, TransformOutput};
use regex::Regex;

use super::is_path_specifier;

/// Extracts static `import`/`export ... from` specifiers. There is
/// deliberately no AST here: syntax transforms are the job of external
/// compilers plugged in through the registry.
pub struct ScriptTransformer {
  import_re: Regex,
}

impl ScriptTransformer {
  pub fn new() -> Self {
    // Covers `import "./a.js"`, `import x from "./a.js"`,
    // `import { x } from './a.js'` and `export ... from "./a.js"`.
    let import_re =
      Regex::new(r#"(?m)^\s*(?:import|export)\b[^'"`\n;]*?["']([^"'\n]+)["']"#)
        .expect("script import pattern is valid");
    Self { import_re }
  }
}

impl SourceTransformer for ScriptTransformer {
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

  use super::ScriptTransformer;

  #[test]
  fn extracts_static_imports_in_order() {
    let source = r#"
import "./first.js";
import { a } from './second.js';
export * from "./third.js";
const s = "import './not-an-import.js'";
"#;
    let output = ScriptTransformer::new().transform("app.js", source).unwrap();
    assert_eq!(output.dependencies, vec!["./first.js", "./second.js", "./third.js"]);
  }

  #[test]
  fn bare_specifiers_are_not_graph_edges() {
    let output =
      ScriptTransformer::new().transform("app.js", "import { x } from \"lodash\";\n").unwrap();
    assert!(output.dependencies.is_empty());
  }
}
