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

//! This module defines the `Solver` trait.

use crate::{Assignment, Completion, Result, Statistics};

/// This is the solver abstraction. It is implemented by a structure that
/// implements some search procedure (currently only the depth first
/// branch-and-bound) to find the cheapest assignment of the customers to the
/// facilities of a given instance.
pub trait Solver {
    /// This method orders the solver to search for the optimal assignment.
    /// It returns a structure standing for the outcome of the attempted
    /// minimization. Such a `Completion` may either be marked **exact** if
    /// the search space has been exhausted (and the best value is thus
    /// optimal). Or it can be inexact, in which case it means that the search
    /// was stopped because of the satisfaction of some cutoff criterion.
    ///
    /// The search may only be run once. A second call yields an error.
    fn run(&mut self) -> Result<Completion>;
    /// This method returns the cost of the best assignment that has been
    /// found. It returns `None` when no assignment is known yet.
    fn best_value(&self) -> Option<i64>;
    /// This method returns the best (complete) assignment that has been found.
    fn best_solution(&self) -> Option<Assignment>;
    /// Returns the counters describing the work performed so far.
    fn statistics(&self) -> Statistics;
}
