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

//! This module defines the channel through which the search tells the harness
//! about the solutions it finds.

/// A solution reporter is told about every complete assignment which strictly
/// improves on all the previously reported ones. The first report is always
/// the greedy (nearest facility) assignment, which is emitted before the
/// search begins. Hence, the most recent report is the best known answer at
/// any point in time.
pub trait SolutionReporter {
    /// Called with the cost of the `assignment` and the assignment itself
    fn report(&mut self, cost: i64, assignment: &[usize]);
}
/// The simplest and most natural reporter implementation is to simply use
/// a closure.
impl <X: FnMut(i64, &[usize])> SolutionReporter for X {
    fn report(&mut self, cost: i64, assignment: &[usize]) {
        self(cost, assignment)
    }
}

#[cfg(test)]
mod tests {
    use crate::SolutionReporter;

    #[test]
    fn any_closure_is_a_solution_reporter() {
        let mut seen = vec![];
        let reporter: &mut dyn SolutionReporter = &mut |cost: i64, sol: &[usize]| {
            seen.push((cost, sol.to_vec()));
        };

        reporter.report(42, &[0, 1, 1]);
        reporter.report(40, &[1, 1, 1]);

        assert_eq!(vec![(42, vec![0, 1, 1]), (40, vec![1, 1, 1])], seen);
    }
}
