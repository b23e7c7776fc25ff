use std::{fs, io, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Args;

use natroot::table::{Table, REFERENCE_TABLE};

#[derive(Debug, Args)]
pub struct NatrootCheckCommand {
  /// A table file of rows like `root(13, 2) = 3`; defaults to the built-in
  /// reference table.
  #[arg(env = "NATROOT_TABLE")]
  table: Option<PathBuf>,
}

impl NatrootCheckCommand {
  pub fn execute(self) -> Result<()> {
    let (src, name) = match &self.table {
      Some(path) => (
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?,
        path.display().to_string(),
      ),
      None => (REFERENCE_TABLE.to_owned(), "reference table".to_owned()),
    };
    let table = Table::parse(&src).map_err(|err| anyhow!("invalid table {name}: {err}"))?;
    let outcome = table.check(&mut io::stdout().lock())?;
    eprintln!("{outcome}");
    if outcome.success() {
      Ok(())
    } else {
      Err(anyhow!("{} of {} rows failed", outcome.failed, outcome.total()))
    }
  }
}
