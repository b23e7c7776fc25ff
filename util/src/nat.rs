use std::{
  cmp::Ordering,
  error::Error,
  fmt::{self, Write},
  mem,
  str::FromStr,
};

/// An arbitrary-precision natural number.
///
/// Stored as little-endian base-2^32 limbs, always normalized so that the most
/// significant limb is non-zero; zero is the empty vector. Each magnitude
/// therefore has exactly one representation, and the derived equality and
/// hashing agree with numeric equality.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Nat(Vec<u32>);

impl Nat {
  pub const ZERO: Nat = Nat(Vec::new());

  pub fn new(parts: Vec<u32>) -> Self {
    let mut nat = Nat(parts);
    nat.normalize();
    nat
  }

  fn normalize(&mut self) {
    while self.0.last().is_some_and(|x| *x == 0) {
      self.0.pop();
    }
  }

  pub fn is_zero(&self) -> bool {
    self.0.is_empty()
  }

  /// Replaces the value of `self` with that of `other`, reusing the existing
  /// allocation where possible.
  pub fn copy_from(&mut self, other: &Nat) {
    self.0.clone_from(&other.0);
  }

  pub fn increment(&mut self) {
    self.add_u32(1);
  }

  /// Subtracts one.
  ///
  /// ## Panics
  /// If `self` is zero.
  pub fn decrement(&mut self) {
    assert!(!self.is_zero(), "attempted to decrement zero");
    for d in &mut self.0 {
      let (new, borrow) = d.overflowing_sub(1);
      *d = new;
      if !borrow {
        break;
      }
    }
    self.normalize();
  }

  pub fn add_u32(&mut self, mut n: u32) {
    for d in &mut self.0 {
      if n == 0 {
        return;
      }
      let (new, carry) = u32::overflowing_add(*d, n);
      *d = new;
      n = carry as u32;
    }
    if n != 0 {
      self.0.push(n);
    }
  }

  pub fn add(&mut self, other: &Nat) {
    if self.0.len() < other.0.len() {
      self.0.resize(other.0.len(), 0);
    }
    let mut carry = 0;
    for (i, d) in self.0.iter_mut().enumerate() {
      let total = *d as u64 + other.0.get(i).copied().unwrap_or(0) as u64 + carry;
      *d = total as u32;
      carry = total >> 32;
      if carry == 0 && i >= other.0.len() {
        break;
      }
    }
    if carry != 0 {
      self.0.push(carry as u32);
    }
  }

  pub fn mul_u32(&mut self, n: u32) {
    let mut carry = 0;
    for d in &mut self.0 {
      let total = *d as u64 * n as u64 + carry;
      *d = total as u32;
      carry = total >> 32;
    }
    if carry != 0 {
      self.0.push(carry as u32);
    }
    self.normalize();
  }

  pub fn mul(&mut self, other: &Nat) {
    if self.is_zero() || other.is_zero() {
      self.0.clear();
      return;
    }
    let mut out = vec![0u32; self.0.len() + other.0.len()];
    for (i, &a) in self.0.iter().enumerate() {
      let mut carry = 0;
      for (j, &b) in other.0.iter().enumerate() {
        // (2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1, so this cannot overflow
        let total = a as u64 * b as u64 + out[i + j] as u64 + carry;
        out[i + j] = total as u32;
        carry = total >> 32;
      }
      out[i + other.0.len()] = carry as u32;
    }
    self.0 = out;
    self.normalize();
  }

  /// Divides by `divisor`, rounding down, and returns the remainder.
  ///
  /// ## Panics
  /// If `divisor` is zero.
  pub fn divide(&mut self, divisor: u32) -> u32 {
    assert!(divisor != 0, "attempted to divide by zero");
    let divisor = divisor as u64;
    let mut rem = 0;
    for d in self.0.iter_mut().rev() {
      let total = rem << 32 | *d as u64;
      *d = (total / divisor) as u32;
      rem = total % divisor;
    }
    self.normalize();
    rem as u32
  }

  /// Raises to the power of `exponent` by repeated squaring; `x^0` is one for
  /// every `x`, zero included.
  pub fn power(&mut self, mut exponent: u32) {
    let mut base = mem::replace(self, Nat::from(1u32));
    while exponent > 0 {
      if exponent & 1 == 1 {
        self.mul(&base);
      }
      exponent >>= 1;
      if exponent > 0 {
        let square = base.clone();
        base.mul(&square);
      }
    }
  }

  pub fn as_u32(&self) -> Option<u32> {
    match self.0[..] {
      [] => Some(0),
      [n] => Some(n),
      _ => None,
    }
  }

  /// The number of significant bits; zero for zero.
  pub fn bits(&self) -> u64 {
    match self.0.last() {
      None => 0,
      Some(top) => (self.0.len() as u64 - 1) * 32 + (u32::BITS - top.leading_zeros()) as u64,
    }
  }

  /// Parses a numeric literal as written in source text: a `0b`, `0o`, or `0x`
  /// prefix selects the radix, and `_` separators are ignored. Returns `None`
  /// if there are no digits or a digit is out of range.
  pub fn from_literal(literal: &str) -> Option<Nat> {
    let (radix, digits) = [("0b", 2), ("0o", 8), ("0x", 16)]
      .into_iter()
      .find_map(|(prefix, radix)| Some((radix, literal.strip_prefix(prefix)?)))
      .unwrap_or((10, literal));
    let mut num = Nat::ZERO;
    let mut empty = true;
    for c in digits.chars().filter(|&c| c != '_') {
      num.mul_u32(radix);
      num.add_u32(c.to_digit(radix)?);
      empty = false;
    }
    (!empty).then_some(num)
  }
}

impl Ord for Nat {
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.len().cmp(&other.0.len()).then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
  }
}

impl PartialOrd for Nat {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl fmt::Display for Nat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const CHUNK: u32 = 1_000_000_000;
    let mut rest = self.clone();
    let mut chunks = Vec::new();
    while !rest.is_zero() {
      chunks.push(rest.divide(CHUNK));
    }
    let mut digits = String::new();
    match chunks.split_last() {
      None => digits.push('0'),
      Some((first, rest)) => {
        write!(digits, "{first}")?;
        for chunk in rest.iter().rev() {
          write!(digits, "{chunk:09}")?;
        }
      }
    }
    f.pad_integral(true, "", &digits)
  }
}

impl fmt::LowerHex for Nat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let mut digits = String::new();
    let mut start = true;
    for n in self.0.iter().rev() {
      for i in (0..8).rev() {
        let n = n >> (i * 4) & 0xf;
        if !start || n != 0 {
          start = false;
          digits.push(DIGITS[n as usize] as char);
        }
      }
    }
    if digits.is_empty() {
      digits.push('0');
    }
    f.pad_integral(true, "0x", &digits)
  }
}

impl From<u32> for Nat {
  fn from(n: u32) -> Nat {
    if n == 0 { Nat::ZERO } else { Nat(vec![n]) }
  }
}

impl From<u64> for Nat {
  fn from(n: u64) -> Nat {
    if n <= u32::MAX as u64 { (n as u32).into() } else { Nat(vec![n as u32, (n >> 32) as u32]) }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNatError {
  Empty,
  InvalidDigit { index: usize, found: char },
}

impl fmt::Display for ParseNatError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParseNatError::Empty => f.write_str("cannot parse a natural number from an empty string"),
      ParseNatError::InvalidDigit { index, found } => {
        write!(f, "invalid digit {found:?} at offset {index} in natural number")
      }
    }
  }
}

impl Error for ParseNatError {}

/// Parses a plain decimal literal; no sign, separators, or whitespace.
impl FromStr for Nat {
  type Err = ParseNatError;

  fn from_str(s: &str) -> Result<Nat, ParseNatError> {
    if s.is_empty() {
      return Err(ParseNatError::Empty);
    }
    let mut num = Nat::ZERO;
    for (index, found) in s.char_indices() {
      let digit = found.to_digit(10).ok_or(ParseNatError::InvalidDigit { index, found })?;
      num.mul_u32(10);
      num.add_u32(digit);
    }
    Ok(num)
  }
}
