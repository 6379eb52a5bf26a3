//! Action enumeration: every k-subset of `0..n`, in a fixed order.
//!
//! # Order
//!
//! Read an action as an `n`-character bit string with vertex 0 in the most
//! significant (leftmost) position. Actions are produced in strictly
//! decreasing lexicographic order of that string: first `{0, .., k-1}`, last
//! `{n-k, .., n-1}`. Each successor is the lexicographically previous
//! arrangement of the same multiset of bits.
//!
//! This order decides which action is recorded when several actions from the
//! same configuration reach the same unvisited configuration, so it is part of
//! the output contract and is reproduced explicitly here.
//!
//! # Mechanism
//!
//! Let `V` be the `n`-bit integer whose bit `n-1-i` is vertex `i`. Descending
//! lexicographic order of strings is descending `V`. The complement `!V` has
//! `n-k` bits set and walks *ascending*, which is Gosper's next-combination
//! step. Each emitted `V` is bit-reversed within `n` bits into the
//! vertex-indexed [`ActionV1`] layout.

use decontam_kernel::carrier::config::{width_mask, ActionV1, MAX_VERTICES};

/// Finite iterator over all `C(n, k)` actions of size `k`.
///
/// Create a fresh enumerator for each expansion; it carries no state across
/// configurations. Yields nothing when `k > n` or `n > MAX_VERTICES`.
#[derive(Debug, Clone)]
pub struct ActionEnumerator {
    n: usize,
    mask: u64,
    /// Current complement word (`n - k` bits set), ascending.
    complement: u64,
    /// Final complement word: the top `n - k` bits of the `n`-bit window.
    last: u64,
    done: bool,
}

impl ActionEnumerator {
    /// Enumerator over `k`-subsets of `0..n`.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        let done = k > n || n > MAX_VERTICES;
        let m = n.saturating_sub(k);
        let mask = width_mask(n);
        Self {
            n,
            mask,
            complement: width_mask(m),
            last: mask ^ width_mask(n.saturating_sub(m)),
            done,
        }
    }

    /// Binomial coefficient `C(n, k)`, saturating at `u64::MAX`.
    #[must_use]
    pub fn count_for(n: usize, k: usize) -> u64 {
        if k > n {
            return 0;
        }
        let k = k.min(n - k);
        let mut acc: u128 = 1;
        for i in 0..k {
            acc = acc * (n - i) as u128 / (i + 1) as u128;
        }
        u64::try_from(acc).unwrap_or(u64::MAX)
    }

    fn to_action(&self, word: u64) -> ActionV1 {
        if self.n == 0 {
            return ActionV1::NONE;
        }
        ActionV1::from_bits(word.reverse_bits() >> (64 - self.n))
    }
}

/// Gosper's hack: next larger word with the same popcount.
///
/// Caller guarantees `y != 0` and that `y` is not the largest such word in
/// its window, so `y + lowest` cannot overflow.
fn next_same_popcount(y: u64) -> u64 {
    let lowest = y & y.wrapping_neg();
    let ripple = y + lowest;
    (((ripple ^ y) >> 2) / lowest) | ripple
}

impl Iterator for ActionEnumerator {
    type Item = ActionV1;

    fn next(&mut self) -> Option<ActionV1> {
        if self.done {
            return None;
        }
        let word = !self.complement & self.mask;
        if self.complement == self.last {
            self.done = true;
        } else {
            self.complement = next_same_popcount(self.complement);
        }
        Some(self.to_action(word))
    }
}
