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

//! This module provides the implementation of various cutoff heuristics that can
//! be used to tune the behavior of the solver.

use std::{sync::{Arc, atomic::{AtomicBool, Ordering}}, time::{Duration, Instant}};

use tracing::warn;

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It imposes that the search goes
/// on until the search space is exhausted (hence proving optimality).
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {false}
}
/// This cutoff allows one to specify a maximum time budget to solve the problem.
/// Once the time budget is elapsed, the search stops and the best solution
/// that has been found (so far) is the answer.
///
/// # Example
/// ```
/// # use cflp::*;
/// use std::time::Duration;
///
/// let instance = Instance::new(vec![10], 1, vec![5], vec![3], vec![vec![2]]).unwrap();
/// let cutoff   = TimeBudget::new(Duration::from_secs(10));
/// let mut best = BestSolution::default();
/// let mut solver = BranchAndBound::new(&instance, &cutoff, &mut best).unwrap();
/// let outcome = solver.run().unwrap(); // will run for maximum 10 seconds
/// assert_eq!(Some(7), outcome.best_value);
/// ```
#[derive(Debug, Clone)]
pub struct TimeBudget {
    /// Raised by the timer thread once the budget is spent
    expired: Arc<AtomicBool>,
    /// When the budget is spent (`None` when that is beyond what an
    /// `Instant` can represent)
    deadline: Option<Instant>,
    /// Set when no timer thread could be started, in which case the clock
    /// is read at each poll
    watch_clock: bool,
}
impl TimeBudget {
    /// Starts counting down `budget` right away. The countdown happens in a
    /// detached thread which sleeps for the whole budget, raises the flag
    /// and ends. An empty budget is spent from the start.
    pub fn new(budget: Duration) -> Self {
        let expired  = Arc::new(AtomicBool::new(budget.is_zero()));
        let deadline = Instant::now().checked_add(budget);
        if budget.is_zero() {
            return TimeBudget { expired, deadline, watch_clock: false };
        }

        let flag  = Arc::clone(&expired);
        let timer = std::thread::Builder::new()
            .name("cflp-timer".to_string())
            .spawn(move || {
                std::thread::sleep(budget);
                flag.store(true, Ordering::Relaxed);
            });
        if let Err(error) = &timer {
            warn!(%error, "no timer thread, the clock is polled instead");
        }

        TimeBudget { expired, deadline, watch_clock: timer.is_err() }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        if self.expired.load(Ordering::Relaxed) {
            return true;
        }
        self.watch_clock && self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }
}
