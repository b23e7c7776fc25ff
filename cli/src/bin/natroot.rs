use anyhow::Result;
use natroot_cli::NatrootCommand;

fn main() -> Result<()> {
  env_logger::init();
  NatrootCommand::execute()
}
