pub mod task_result;

use task_result::ModuleTaskResult;

use crate::ModuleIdx;

pub enum ModuleLoaderMsg {
  ModuleDone(ModuleTaskResult),
  BuildErrors { idx: ModuleIdx, errors: Vec<anyhow::Error> },
}
