mod module_task;
pub mod task_context;

use std::sync::Arc;

use arcstr::ArcStr;
use fastpack_common::{
  EntryPoint, Module, ModuleId, ModuleIdx, ModuleLoaderMsg, SourceKind,
};
use fastpack_error::{cancelled_error, resolution_error, BuildResult};
use module_task::ModuleTask;
use oxc_index::IndexVec;
use rustc_hash::{FxHashMap, FxHashSet};
use task_context::TaskContext;
use tokio::sync::{mpsc::Receiver, Semaphore};

use crate::{
  types::{IndexModules, SharedFileSystem, SharedOptions, SharedTransformers},
  CancelToken,
};

pub struct IntermediateModules {
  pub modules: IndexVec<ModuleIdx, Option<Module>>,
  pub importers: IndexVec<ModuleIdx, Vec<ModuleIdx>>,
  pub ids: IndexVec<ModuleIdx, ModuleId>,
}

impl IntermediateModules {
  pub fn new() -> Self {
    Self { modules: IndexVec::new(), importers: IndexVec::new(), ids: IndexVec::new() }
  }

  pub fn alloc_module_idx(&mut self, id: ModuleId) -> ModuleIdx {
    self.importers.push(Vec::new());
    self.ids.push(id);
    self.modules.push(None)
  }
}

pub struct ModuleLoader {
  rx: Receiver<ModuleLoaderMsg>,
  remaining: u32,
  options: SharedOptions,
  shared_context: Arc<TaskContext>,
  cancel: CancelToken,
  inm: IntermediateModules,
  /// Claim registry. Only this loader task inserts, which makes the
  /// "already being processed" check atomic with the claim itself.
  visited: FxHashMap<ModuleId, ModuleIdx>,
}

pub struct ModuleLoaderOutput {
  /// All reachable modules; the whole graph of one build.
  pub module_table: IndexModules,
  /// Entries in configured order.
  pub entry_points: Vec<EntryPoint>,
  pub warnings: Vec<anyhow::Error>,
}

impl ModuleLoader {
  pub fn new(
    fs: SharedFileSystem,
    options: SharedOptions,
    transformers: SharedTransformers,
    cancel: CancelToken,
  ) -> Self {
    // 1024 should be enough for most cases
    // over 1024 pending tasks are insane
    let (tx, rx) = tokio::sync::mpsc::channel(1024);

    let shared_context = Arc::new(TaskContext {
      fs,
      transformers,
      tx,
      semaphore: Semaphore::new(options.concurrency),
    });

    Self {
      rx,
      remaining: 0,
      options,
      shared_context,
      cancel,
      inm: IntermediateModules::new(),
      visited: FxHashMap::default(),
    }
  }

  fn try_spawn_new_task(&mut self, id: ModuleId) -> ModuleIdx {
    match self.visited.entry(id.clone()) {
      std::collections::hash_map::Entry::Occupied(visited) => *visited.get(),
      std::collections::hash_map::Entry::Vacant(not_visited) => {
        let idx = self.inm.alloc_module_idx(id.clone());
        not_visited.insert(idx);
        self.remaining += 1;

        let kind = SourceKind::from_extension(id.extension());
        let task = ModuleTask::new(Arc::clone(&self.shared_context), idx, id, kind);
        let handle = tokio::runtime::Handle::current();
        handle.spawn(task.run());
        idx
      }
    }
  }

  pub async fn fetch_all_modules(
    mut self,
    user_defined_entries: Vec<(Option<ArcStr>, ArcStr, ModuleId)>,
  ) -> BuildResult<ModuleLoaderOutput> {
    let mut warnings = Vec::new();

    let mut entry_points = Vec::with_capacity(user_defined_entries.len());
    let mut seen_entry_ids = FxHashSet::default();
    for (name, import, id) in user_defined_entries {
      if !seen_entry_ids.insert(id.clone()) {
        warnings
          .push(anyhow::anyhow!("Duplicated entry {import:?} is ignored after its first use."));
        continue;
      }
      let kind = SourceKind::from_extension(id.extension());
      let idx = self.try_spawn_new_task(id);
      entry_points.push(EntryPoint { idx, import, name, kind });
    }

    while self.remaining > 0 {
      if self.cancel.is_cancelled() {
        Err(cancelled_error())?;
      }

      let msg = tokio::select! {
        biased;
        () = self.cancel.cancelled() => Err(cancelled_error())?,
        msg = self.rx.recv() => msg,
      };
      let Some(msg) = msg else { break };

      match msg {
        ModuleLoaderMsg::ModuleDone(result) => {
          self.remaining -= 1;

          let mut import_records = Vec::with_capacity(result.resolved_deps.len());
          for dep_id in result.resolved_deps {
            // An edge back to a module already claimed (including one still
            // in flight) is recorded without re-entering the transformer;
            // this is what keeps cycles from looping the traversal.
            let dep_idx = self.try_spawn_new_task(dep_id);
            self.inm.importers[dep_idx].push(result.idx);
            import_records.push(dep_idx);
          }

          let mut module =
            Module::new(result.idx, result.id, result.kind, result.content, result.digest);
          module.import_records = import_records;
          self.inm.modules[result.idx] = Some(module);
        }
        ModuleLoaderMsg::BuildErrors { idx, errors } => {
          let unit = self.inm.ids[idx].stabilize(&self.options.cwd);
          let referrers = self.referrer_chain(idx);
          Err(
            errors
              .iter()
              .map(|error| resolution_error(&unit, &referrers, error))
              .collect::<Vec<_>>(),
          )?;
        }
      }
    }

    let module_table = self
      .inm
      .modules
      .into_iter()
      .map(|module| module.expect("Every claimed module has reported back"))
      .collect::<IndexVec<ModuleIdx, Module>>();

    Ok(ModuleLoaderOutput { module_table, entry_points, warnings })
  }

  /// Walks first-importer links from the failing unit back to an entry,
  /// producing the chain entry-first for diagnostics.
  fn referrer_chain(&self, idx: ModuleIdx) -> Vec<String> {
    let mut chain = Vec::new();
    let mut seen = FxHashSet::default();
    let mut current = idx;
    while let Some(&importer) = self.inm.importers[current].first() {
      if !seen.insert(importer) {
        break;
      }
      chain.push(self.inm.ids[importer].stabilize(&self.options.cwd));
      current = importer;
    }
    chain.reverse();
    chain
  }
}
