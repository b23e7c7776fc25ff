mod check;
mod root;

use anyhow::Result;
use clap::Parser;

pub use check::NatrootCheckCommand;
pub use root::NatrootRootCommand;

#[derive(Debug, Parser)]
#[command(
  name = "natroot",
  version,
  about = "Integer roots of natural numbers",
  propagate_version = true
)]
pub enum NatrootCommand {
  #[command(about = "Print the integer r-th root of a number, rounded down")]
  Root(NatrootRootCommand),
  #[command(about = "Check computed roots against a table of known roots")]
  Check(NatrootCheckCommand),
}

impl NatrootCommand {
  pub fn execute() -> Result<()> {
    match Self::parse() {
      NatrootCommand::Root(root) => root.execute(),
      NatrootCommand::Check(check) => check.execute(),
    }
  }
}
