use std::cmp::Ordering;

use log::trace;
use natroot_util::nat::Nat;

/// Replaces `n` with its `r`-th root, rounded down; afterwards
/// `n^r <= old_n < (n + 1)^r`.
///
/// This is a binary search over the half-open bracket `[low, high)`, which
/// starts as `[0, n + 1)` and always contains the root. Each step raises the
/// midpoint to the `r`-th power and compares it against `n`; an exact match
/// ends the search early.
///
/// `r >= 2` is a precondition of the caller, checked only in debug builds.
pub fn root(n: &mut Nat, r: u32) {
  debug_assert!(r >= 2, "root degree must be at least 2, got {r}");

  if n.is_zero() {
    return;
  }

  // `n < 2^bits <= 2^r`, so the root of a non-zero `n` is one; searching would
  // raise 2 to the `r`-th power.
  if u64::from(r) >= n.bits() {
    trace!("root {r}: degree covers all {} bits", n.bits());
    n.copy_from(&Nat::from(1u32));
    return;
  }

  let mut low = Nat::ZERO;
  let mut high = n.clone();
  high.increment();

  let mut mid = Nat::ZERO;
  let mut mid_raised = Nat::ZERO;
  let mut steps = 0u32;

  while low < high {
    steps += 1;

    mid.copy_from(&low);
    mid.add(&high);
    mid.divide(2);

    mid_raised.copy_from(&mid);
    mid_raised.power(r);

    match mid_raised.cmp(n) {
      Ordering::Greater => high.copy_from(&mid),
      Ordering::Less => {
        low.copy_from(&mid);
        low.increment();
      }
      Ordering::Equal => {
        trace!("root {r}: exact after {steps} steps");
        n.copy_from(&mid);
        return;
      }
    }
  }

  trace!("root {r}: inexact after {steps} steps");

  // `low` is now the least value whose `r`-th power exceeds `n`; since `n >= 1`
  // and `1^r <= n`, it is at least one.
  n.copy_from(&low);
  n.decrement();
}

/// Returns the `r`-th root of `n`, rounded down, leaving `n` untouched.
pub fn nth_root(n: &Nat, r: u32) -> Nat {
  let mut root_n = n.clone();
  root(&mut root_n, r);
  root_n
}

/// Whether `m^r == n`.
pub fn is_exact_root(n: &Nat, m: &Nat, r: u32) -> bool {
  let mut raised = m.clone();
  raised.power(r);
  raised == *n
}
