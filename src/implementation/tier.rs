// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the opening cost of a facility as a function of the
//! tier it must be built to. The cost of tier `k` for a facility whose base
//! opening cost is `b` is given by:
//!
//! * `cost(0) = 0` (the facility is not opened)
//! * `cost(1) = b`
//! * `cost(2) = ceil(1.5 * b)`
//! * `cost(k) = cost(k-1) + cost(k-2) + (4 - k) * b` for `k >= 3`
//!
//! Two independent implementations are provided: `tier_cost` which iterates
//! the recurrence forward with two registers, and `TierCostMemo` which
//! memoizes the whole sequence for a given base cost. They must agree for any
//! tier and base cost. Both refuse to wrap around: an overflow is an error.

use crate::{Error, Result};

/// Computes the opening cost of building a facility with base opening cost
/// `base` up to the given `tier`.
///
/// # Example
/// ```
/// # use cflp::tier_cost;
/// assert_eq!(0,   tier_cost(0, 100).unwrap());
/// assert_eq!(100, tier_cost(1, 100).unwrap());
/// assert_eq!(150, tier_cost(2, 100).unwrap());
/// assert_eq!(350, tier_cost(3, 100).unwrap());
/// assert_eq!(500, tier_cost(4, 100).unwrap());
/// assert_eq!(750, tier_cost(5, 100).unwrap());
/// ```
pub fn tier_cost(tier: u64, base: i64) -> Result<i64> {
    debug_assert!(base >= 0, "opening costs must be non negative");
    if base == 0 {
        return Ok(0);
    }
    match tier {
        0 => Ok(0),
        1 => Ok(base),
        2 => one_and_a_half(base),
        _ => {
            let mut before = base;
            let mut last   = one_and_a_half(base)?;
            for k in 3..=tier {
                let factor = 4_i64.checked_sub(i64::try_from(k).map_err(|_| Error::Overflow)?)
                    .ok_or(Error::Overflow)?;
                let next   = before.checked_add(last)
                    .and_then(|x| x.checked_add(factor.checked_mul(base)?))
                    .ok_or(Error::Overflow)?;
                before = last;
                last   = next;
            }
            Ok(last)
        }
    }
}

/// `ceil(1.5 * base)` for a non negative base
fn one_and_a_half(base: i64) -> Result<i64> {
    base.checked_add(base / 2 + base % 2).ok_or(Error::Overflow)
}

/// The memoized flavor of the tier cost function. It remembers the cost of
/// all the tiers it has been asked about for one given base cost, and extends
/// that table on demand.
#[derive(Debug, Clone)]
pub struct TierCostMemo {
    base: i64,
    memo: Vec<i64>,
}
impl TierCostMemo {
    /// Creates an empty memo for the given base opening cost
    pub fn new(base: i64) -> Self {
        debug_assert!(base >= 0, "opening costs must be non negative");
        Self { base, memo: vec![0] }
    }
    /// The base opening cost this memo is about
    pub fn base(&self) -> i64 {
        self.base
    }
    /// Returns the opening cost of a facility built up to `tier`
    pub fn cost(&mut self, tier: u64) -> Result<i64> {
        if self.base == 0 {
            return Ok(0);
        }
        let tier = usize::try_from(tier).map_err(|_| Error::Overflow)?;
        while self.memo.len() <= tier {
            let next = self.cost_of_next()?;
            self.memo.push(next);
        }
        Ok(self.memo[tier])
    }
    fn cost_of_next(&self) -> Result<i64> {
        let k = self.memo.len();
        let b = self.base;
        match k {
            0 => Ok(0),
            1 => Ok(b),
            2 => b.checked_mul(3).and_then(|x| x.checked_add(1)).map(|x| x / 2).ok_or(Error::Overflow),
            _ => {
                let adjust = (4 - k as i64).checked_mul(b).ok_or(Error::Overflow)?;
                self.memo[k - 1].checked_add(self.memo[k - 2])
                    .and_then(|x| x.checked_add(adjust))
                    .ok_or(Error::Overflow)
            }
        }
    }
}
