mod script;
mod stylesheet;

use std::sync::Arc;

use arcstr::ArcStr;
use fastpack_common::{SourceKind, SourceTransformer, TransformOutput};

pub use script::ScriptTransformer;
pub use stylesheet::StylesheetTransformer;

/// Per-kind transformer dispatch, resolved once at the graph boundary. The
/// defaults only extract static dependency references and pass content
/// through untouched; embedders swap in real compilers per kind.
pub struct TransformerRegistry {
  script: Arc<dyn SourceTransformer>,
  stylesheet: Arc<dyn SourceTransformer>,
  other: Arc<dyn SourceTransformer>,
}

impl Default for TransformerRegistry {
  fn default() -> Self {
    Self {
      script: Arc::new(ScriptTransformer::new()),
      stylesheet: Arc::new(StylesheetTransformer::new()),
      other: Arc::new(PassthroughTransformer),
    }
  }
}

impl TransformerRegistry {
  pub fn with_transformer(
    mut self,
    kind: SourceKind,
    transformer: Arc<dyn SourceTransformer>,
  ) -> Self {
    match kind {
      SourceKind::Script => self.script = transformer,
      SourceKind::Stylesheet => self.stylesheet = transformer,
      SourceKind::Other => self.other = transformer,
    }
    self
  }

  pub fn for_kind(&self, kind: SourceKind) -> &dyn SourceTransformer {
    match kind {
      SourceKind::Script => &*self.script,
      SourceKind::Stylesheet => &*self.stylesheet,
      SourceKind::Other => &*self.other,
    }
  }
}

/// Content is copied through as-is and declares no dependencies. Used for
/// source kinds the bundler has no structural knowledge of.
pub struct PassthroughTransformer;

impl SourceTransformer for PassthroughTransformer {
  fn transform(&self, _id: &str, source: &str) -> anyhow::Result<TransformOutput> {
    Ok(TransformOutput { content: ArcStr::from(source), dependencies: Vec::new() })
  }
}

/// Only path-like specifiers are followed as graph edges. Bare specifiers
/// would need a package resolver, which sits outside this core.
pub(crate) fn is_path_specifier(specifier: &str) -> bool {
  specifier.starts_with("./") || specifier.starts_with("../") || specifier.starts_with('/')
}
