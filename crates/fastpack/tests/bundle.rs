use std::sync::{Arc, Mutex};

use fastpack::{
  Bundler, BundlerOptions, FileSystem, InputItem, ManifestEntry, MemoryFileSystem, OutputAsset,
  ScriptTransformer, SourceKind, SourceTransformer, TransformOutput, TransformerRegistry,
};

fn options(inputs: &[&str], manifest: bool) -> BundlerOptions {
  BundlerOptions {
    input: Some(inputs.iter().copied().map(InputItem::from).collect()),
    cwd: Some("/project".into()),
    dir: Some("dist".to_string()),
    manifest: Some(manifest),
    concurrency: None,
  }
}

fn bundler(files: &[(&'static str, &'static str)], inputs: &[&str], manifest: bool) -> Bundler {
  let fs = MemoryFileSystem::new(files.iter().copied());
  Bundler::with_file_system(options(inputs, manifest), Arc::new(fs))
}

fn chunk_assets(assets: &[OutputAsset]) -> Vec<&OutputAsset> {
  assets.iter().filter(|asset| asset.filename != "manifest.json").collect()
}

#[tokio::test]
async fn two_independent_entries() {
  let mut bundler = bundler(
    &[
      ("/project/src/app.js", "console.log(\"app\");\n"),
      ("/project/src/style.css", "body { margin: 0; }\n"),
    ],
    &["src/app.js", "src/style.css"],
    true,
  );

  let output = bundler.build(false).await.unwrap();

  let chunks = chunk_assets(&output.assets);
  assert_eq!(chunks.len(), 2);

  let manifest = output.manifest.expect("manifest was requested");
  assert_eq!(
    manifest.keys().collect::<Vec<_>>(),
    vec!["src/app.js", "src/style.css"],
    "manifest keys follow entry order"
  );

  let app = &manifest["src/app.js"];
  assert!(app.file.ends_with(".js"));
  assert!(app.imports.is_empty());

  let style = &manifest["src/style.css"];
  assert!(style.file.ends_with(".css"));
  assert!(style.imports.is_empty());
}

#[tokio::test]
async fn shared_module_is_emitted_exactly_once() {
  let mut bundler = bundler(
    &[
      ("/project/src/app.js", "import \"./shared.js\";\nconsole.log(\"app\");\n"),
      ("/project/src/admin.js", "import \"./shared.js\";\nconsole.log(\"admin\");\n"),
      ("/project/src/shared.js", "export const shared_payload = 42;\n"),
    ],
    &["src/app.js", "src/admin.js"],
    true,
  );

  let output = bundler.build(false).await.unwrap();

  let chunks = chunk_assets(&output.assets);
  assert_eq!(chunks.len(), 3, "two entry chunks and one shared chunk");

  let emitted = chunks
    .iter()
    .filter(|asset| asset.content.contains("shared_payload"))
    .collect::<Vec<_>>();
  assert_eq!(emitted.len(), 1, "the shared module lives in exactly one chunk");
  let shared_file = emitted[0].filename.clone();

  let manifest = output.manifest.unwrap();
  assert_eq!(manifest["src/app.js"].imports, vec![shared_file.to_string()]);
  assert_eq!(manifest["src/admin.js"].imports, vec![shared_file.to_string()]);
}

#[tokio::test]
async fn modules_with_different_owner_sets_are_never_colocated() {
  let mut bundler = bundler(
    &[
      ("/project/src/a.js", "import \"./x.js\";\n"),
      ("/project/src/b.js", "import \"./x.js\";\nimport \"./y.js\";\n"),
      ("/project/src/c.js", "import \"./y.js\";\n"),
      ("/project/src/x.js", "export const x_payload = 1;\n"),
      ("/project/src/y.js", "export const y_payload = 2;\n"),
    ],
    &["src/a.js", "src/b.js", "src/c.js"],
    true,
  );

  let output = bundler.build(false).await.unwrap();

  // x is owned by {a, b}, y by {b, c}: different signatures, distinct
  // shared chunks.
  let chunks = chunk_assets(&output.assets);
  assert_eq!(chunks.len(), 5);

  let x_chunk = chunks.iter().find(|c| c.content.contains("x_payload")).unwrap();
  let y_chunk = chunks.iter().find(|c| c.content.contains("y_payload")).unwrap();
  assert_ne!(x_chunk.filename, y_chunk.filename);
  assert!(!x_chunk.content.contains("y_payload"));

  let manifest = output.manifest.unwrap();
  assert_eq!(manifest["src/a.js"].imports, vec![x_chunk.filename.to_string()]);
  assert_eq!(
    manifest["src/b.js"].imports,
    vec![x_chunk.filename.to_string(), y_chunk.filename.to_string()]
  );
  assert_eq!(manifest["src/c.js"].imports, vec![y_chunk.filename.to_string()]);
}

#[tokio::test]
async fn dependency_cycle_terminates_and_bundles_into_one_chunk() {
  let mut bundler = bundler(
    &[
      ("/project/src/a.js", "import \"./b.js\";\nexport const a = 1;\n"),
      ("/project/src/b.js", "import \"./a.js\";\nexport const b = 2;\n"),
    ],
    &["src/a.js"],
    true,
  );

  let output = bundler.build(false).await.unwrap();

  let chunks = chunk_assets(&output.assets);
  assert_eq!(chunks.len(), 1);
  assert!(chunks[0].content.contains("const a"));
  assert!(chunks[0].content.contains("const b"));

  assert!(
    output.warnings.iter().any(|w| w.to_string().contains("Circular dependency")),
    "the cycle is reported as a warning, not an error"
  );

  let manifest = output.manifest.unwrap();
  assert!(manifest["src/a.js"].imports.is_empty());
}

#[tokio::test]
async fn stylesheet_imports_merge_into_the_entry_chunk() {
  let mut bundler = bundler(
    &[
      ("/project/src/style.css", "@import \"./base.css\";\nbody { margin: 0; }\n"),
      ("/project/src/base.css", ":root { --base: 1; }\n"),
    ],
    &["src/style.css"],
    false,
  );

  let output = bundler.build(false).await.unwrap();

  assert_eq!(output.assets.len(), 1);
  let chunk = &output.assets[0];
  assert!(chunk.filename.ends_with(".css"));
  assert!(chunk.content.contains("--base"));
  assert!(chunk.content.contains("margin"));
  // Dependency first within the chunk.
  assert!(chunk.content.find("--base").unwrap() < chunk.content.find("margin").unwrap());
}

#[tokio::test]
async fn repeated_builds_are_byte_identical() {
  let files: &[(&'static str, &'static str)] = &[
    ("/project/src/app.js", "import \"./shared.js\";\nconsole.log(\"app\");\n"),
    ("/project/src/admin.js", "import \"./shared.js\";\n"),
    ("/project/src/shared.js", "export const shared = true;\n"),
  ];
  let inputs = &["src/app.js", "src/admin.js"];

  let first = bundler(files, inputs, true).build(false).await.unwrap();
  let second = bundler(files, inputs, true).build(false).await.unwrap();

  let names = |output: &fastpack::BundleOutput| {
    output.assets.iter().map(|a| a.filename.to_string()).collect::<Vec<_>>()
  };
  assert_eq!(names(&first), names(&second));

  let manifest_json = |output: &fastpack::BundleOutput| {
    output
      .assets
      .iter()
      .find(|a| a.filename == "manifest.json")
      .map(|a| a.content.clone())
      .unwrap()
  };
  assert_eq!(manifest_json(&first), manifest_json(&second));
}

#[tokio::test]
async fn byte_identical_chunks_get_distinct_filenames() {
  let mut bundler = bundler(
    &[
      ("/project/src/app.js", "console.log(\"same\");\n"),
      ("/project/src/admin.js", "console.log(\"same\");\n"),
    ],
    &["src/app.js", "src/admin.js"],
    true,
  );

  let output = bundler.build(false).await.unwrap();

  let chunks = chunk_assets(&output.assets);
  assert_eq!(chunks.len(), 2);
  assert_ne!(chunks[0].filename, chunks[1].filename);
  // Same digest is not a hash collision; the second chunk is suffixed with
  // an ordinal instead of a longer hash, and without a warning.
  assert!(chunks[1].filename.contains("-1."), "{}", chunks[1].filename);
  assert!(output.warnings.is_empty());

  let manifest = output.manifest.unwrap();
  assert_ne!(manifest["src/app.js"].file, manifest["src/admin.js"].file);
}

#[tokio::test]
async fn unknown_kinds_pass_through_and_keep_their_extension() {
  let mut bundler = bundler(
    &[("/project/src/logo.svg", "<svg viewBox=\"0 0 1 1\"></svg>\n")],
    &["src/logo.svg"],
    true,
  );

  let output = bundler.build(false).await.unwrap();

  let chunks = chunk_assets(&output.assets);
  assert_eq!(chunks.len(), 1);
  assert!(chunks[0].filename.ends_with(".svg"), "{}", chunks[0].filename);
  assert_eq!(chunks[0].content, "<svg viewBox=\"0 0 1 1\"></svg>\n");

  let manifest = output.manifest.unwrap();
  assert!(manifest["src/logo.svg"].file.ends_with(".svg"));
}

struct CountingTransformer {
  inner: ScriptTransformer,
  counts: Arc<Mutex<std::collections::HashMap<String, usize>>>,
}

impl SourceTransformer for CountingTransformer {
  fn transform(&self, id: &str, source: &str) -> anyhow::Result<TransformOutput> {
    *self.counts.lock().unwrap().entry(id.to_string()).or_default() += 1;
    self.inner.transform(id, source)
  }
}

#[tokio::test]
async fn each_module_is_transformed_exactly_once() {
  // Diamond: app -> left, right; both -> leaf. Three edges into leaf across
  // the graph, one transform.
  let fs = MemoryFileSystem::new([
    ("/project/src/app.js", "import \"./left.js\";\nimport \"./right.js\";\nimport \"./leaf.js\";\n"),
    ("/project/src/left.js", "import \"./leaf.js\";\n"),
    ("/project/src/right.js", "import \"./leaf.js\";\n"),
    ("/project/src/leaf.js", "export const leaf = 1;\n"),
  ]);

  let counts = Arc::new(Mutex::new(std::collections::HashMap::new()));
  let registry = TransformerRegistry::default().with_transformer(
    SourceKind::Script,
    Arc::new(CountingTransformer { inner: ScriptTransformer::new(), counts: Arc::clone(&counts) }),
  );

  let mut bundler = Bundler::with_file_system(options(&["src/app.js"], false), Arc::new(fs))
    .with_transformers(registry);
  bundler.build(false).await.unwrap();

  let counts = counts.lock().unwrap();
  assert_eq!(counts.len(), 4);
  assert!(counts.values().all(|count| *count == 1), "one transform per unique module: {counts:?}");
}

#[tokio::test]
async fn invalid_configuration_fails_before_any_traversal() {
  let errors = bundler(&[], &[], true).build(false).await.unwrap_err();
  assert!(errors[0].to_string().starts_with("ConfigError:"));

  let mut empty_dir = Bundler::with_file_system(
    BundlerOptions {
      input: Some(vec!["src/app.js".into()]),
      dir: Some(String::new()),
      ..BundlerOptions::default()
    },
    Arc::new(MemoryFileSystem::default()),
  );
  let errors = empty_dir.build(false).await.unwrap_err();
  assert!(errors.iter().any(|e| e.to_string().contains("output directory")));
}

#[tokio::test]
async fn unresolvable_import_reports_the_referrer_chain() {
  let mut bundler = bundler(
    &[
      ("/project/src/app.js", "import \"./nested.js\";\n"),
      ("/project/src/nested.js", "import \"./missing.js\";\n"),
    ],
    &["src/app.js"],
    false,
  );

  let errors = bundler.build(false).await.unwrap_err();
  let message = errors[0].to_string();
  assert!(message.starts_with("ResolutionError:"), "{message}");
  assert!(message.contains("missing.js"));
  assert!(message.contains("src/app.js -> src/nested.js"), "{message}");
}

#[tokio::test]
async fn write_persists_the_full_output_tree() {
  let fs = Arc::new(MemoryFileSystem::new([
    ("/project/src/app.js", "console.log(\"app\");\n"),
    ("/project/src/style.css", "body { margin: 0; }\n"),
  ]));

  let mut bundler = Bundler::with_file_system(
    options(&["src/app.js", "src/style.css"], true),
    Arc::<MemoryFileSystem>::clone(&fs),
  );
  let output = bundler.build(true).await.unwrap();

  for asset in &output.assets {
    let path = std::path::Path::new("/project/dist").join(asset.filename.as_str());
    assert!(fs.exists(&path), "missing {}", path.display());
  }
  assert!(fs.exists(std::path::Path::new("/project/dist/manifest.json")));
}

#[tokio::test]
async fn cancelled_build_produces_nothing() {
  let fs = Arc::new(MemoryFileSystem::new([(
    "/project/src/app.js",
    "console.log(\"app\");\n",
  )]));
  let mut bundler = Bundler::with_file_system(
    options(&["src/app.js"], true),
    Arc::<MemoryFileSystem>::clone(&fs),
  );

  bundler.cancel_token().cancel();
  let errors = bundler.build(true).await.unwrap_err();
  assert!(errors[0].to_string().contains("BuildCancelled"));
  assert!(!fs.exists(std::path::Path::new("/project/dist/manifest.json")));
}

#[tokio::test]
async fn manifest_type_is_exposed_directly() {
  let mut bundler = bundler(
    &[("/project/src/app.js", "console.log(1);\n")],
    &["src/app.js"],
    true,
  );
  let output = bundler.build(false).await.unwrap();
  let manifest = output.manifest.unwrap();
  let entry: &ManifestEntry = &manifest["src/app.js"];
  assert_eq!(entry.imports, Vec::<String>::new());
}
