use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct InputArgs {
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  #[clap(long, short, action = clap::ArgAction::Append)]
  pub input: Option<Vec<PathBuf>>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  /// Emit a manifest.json mapping each entry to its built files.
  #[clap(long)]
  pub manifest: bool,
}

#[derive(Args)]
pub struct EnhanceArgs {
  /// How many source transforms may run at once.
  #[clap(long)]
  pub concurrency: Option<usize>,

  #[clap(long)]
  pub silent: bool,
}
