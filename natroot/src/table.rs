use std::{
  fmt,
  io::{self, Write},
};

use log::debug;
use natroot_util::nat::Nat;

use crate::{
  parser::{ParseError, TableParser},
  root,
};

/// The reference vectors, spanning zero and one, degrees 2 through 15, and
/// inputs up to 127 bits.
pub const REFERENCE_TABLE: &str = include_str!("reference.table");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
  pub number: Nat,
  pub degree: u32,
  pub expected: Nat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Table {
  pub rows: Vec<Row>,
}

impl Table {
  pub fn parse(src: &str) -> Result<Table, ParseError<'_>> {
    TableParser::parse(src)
  }

  /// Computes every row's root, writing one line per row to `out`.
  pub fn check(&self, out: &mut impl Write) -> io::Result<Outcome> {
    let mut outcome = Outcome::default();
    for (i, Row { number, degree, expected }) in self.rows.iter().enumerate() {
      let mut actual = number.clone();
      root(&mut actual, *degree);
      let i = i + 1;
      if actual == *expected {
        outcome.passed += 1;
        writeln!(out, "Test {i} passed: root({number}, {degree}) = {expected}")?;
      } else {
        outcome.failed += 1;
        debug!("row {i}: root({number}, {degree}) = {actual}, not {expected}");
        writeln!(
          out,
          "*** Test {i} failed: root({number}, {degree}) expected <{expected}> but was <{actual}>"
        )?;
      }
    }
    Ok(outcome)
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
  pub passed: usize,
  pub failed: usize,
}

impl Outcome {
  pub fn total(&self) -> usize {
    self.passed + self.failed
  }

  pub fn success(&self) -> bool {
    self.failed == 0
  }
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} passed, {} failed", self.passed, self.failed)
  }
}
