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

//! This module provides the reporter a harness typically uses: it simply
//! remembers the last (hence best) solution it was told about.

use crate::{Assignment, SolutionReporter};

/// A reporter which keeps track of the most recent report only. Since every
/// report improves on the previous ones, this is the best known solution.
///
/// # Example
/// ```
/// # use cflp::{BestSolution, SolutionReporter};
/// let mut best = BestSolution::default();
/// assert_eq!(None, best.cost());
///
/// best.report(12, &[0, 1]);
/// best.report(10, &[1, 1]);
/// assert_eq!(Some(10), best.cost());
/// assert_eq!(Some(&[1, 1][..]), best.assignment());
/// assert_eq!(2, best.nb_reports());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestSolution {
    best: Option<(i64, Assignment)>,
    reports: usize,
}
impl BestSolution {
    /// The cost of the best reported solution (if any)
    pub fn cost(&self) -> Option<i64> {
        self.best.as_ref().map(|(cost, _)| *cost)
    }
    /// The best reported solution (if any)
    pub fn assignment(&self) -> Option<&[usize]> {
        self.best.as_ref().map(|(_, sol)| sol.as_slice())
    }
    /// How many times this reporter has been told about a solution
    pub fn nb_reports(&self) -> usize {
        self.reports
    }
}
impl SolutionReporter for BestSolution {
    fn report(&mut self, cost: i64, assignment: &[usize]) {
        self.reports += 1;
        match self.best.as_mut() {
            Some((best_cost, best_sol)) => {
                *best_cost = cost;
                best_sol.clear();
                best_sol.extend_from_slice(assignment);
            },
            None => self.best = Some((cost, assignment.to_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{BestSolution, SolutionReporter};

    #[test]
    fn the_last_report_wins() {
        let mut best = BestSolution::default();
        best.report(30, &[0, 0, 0]);
        best.report(20, &[1, 0]);
        assert_eq!(Some(20), best.cost());
        assert_eq!(Some(&[1, 0][..]), best.assignment());
        assert_eq!(2, best.nb_reports());
    }
    #[test]
    fn empty_assignments_are_remembered() {
        let mut best = BestSolution::default();
        best.report(0, &[]);
        assert_eq!(Some(0), best.cost());
        assert_eq!(Some(&[][..]), best.assignment());
    }
}
