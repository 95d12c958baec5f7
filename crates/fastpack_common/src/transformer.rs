use arcstr::ArcStr;

/// What a transformer hands back for one source unit: the content to bundle
/// and the statically-declared dependency specifiers, in declaration order.
#[derive(Debug)]
pub struct TransformOutput {
  pub content: ArcStr,
  pub dependencies: Vec<String>,
}

/// The seam between the graph builder and language-specific compilers. One
/// implementation per source kind, selected by file-extension dispatch at the
/// graph boundary. Implementations must be pure with respect to their input:
/// the loader transforms every unique unit exactly once and caches the rest.
pub trait SourceTransformer: Send + Sync {
  fn transform(&self, id: &str, source: &str) -> anyhow::Result<TransformOutput>;
}
