use anyhow::{anyhow, Context, Result};
use clap::Args;
use log::debug;

use natroot::{is_exact_root, nth_root};
use natroot_util::nat::Nat;

#[derive(Debug, Args)]
pub struct NatrootRootCommand {
  /// The number, in decimal.
  #[arg()]
  number: String,
  /// The degree of the root; at least 2. Any degree at least the bit length
  /// of the number yields 1 immediately.
  #[arg()]
  degree: u32,
  /// Also report whether the root is exact.
  #[arg(long)]
  exact: bool,
  /// Print the root in hexadecimal.
  #[arg(long)]
  hex: bool,
}

impl NatrootRootCommand {
  pub fn execute(self) -> Result<()> {
    let NatrootRootCommand { number, degree, exact, hex } = self;
    let n: Nat = number.parse().with_context(|| format!("invalid number \"{number}\""))?;
    if degree < 2 {
      return Err(anyhow!("invalid root degree {degree}; must be at least 2"));
    }
    let m = nth_root(&n, degree);
    debug!("root({n}, {degree}) = {m}");
    let root = if hex { format!("{m:#x}") } else { m.to_string() };
    if exact {
      let exactness = if is_exact_root(&n, &m, degree) { "exact" } else { "inexact" };
      println!("{root} ({exactness})");
    } else {
      println!("{root}");
    }
    Ok(())
  }
}
