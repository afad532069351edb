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

//! This module provides the greedy completion heuristic: every customer which
//! is not fixed yet is simply routed to its nearest facility. The capacities
//! play no role here. They only matter through the cost of the tier a
//! facility must be built to.

use crate::{Assignment, DistanceRanking};

/// Returns a new assignment where the first `fixed` customers are copied from
/// `partial` and all the others are routed to their nearest facility.
///
/// Using `fixed = 0` yields the all-nearest-facility assignment.
pub fn greedy_completion(ranking: &DistanceRanking, partial: &[usize], fixed: usize) -> Assignment {
    let mut completed = Assignment::with_capacity(ranking.nb_customers());
    greedy_complete_into(ranking, partial, fixed, &mut completed);
    completed
}

/// Same as `greedy_completion` but writes the completed assignment into the
/// `out` buffer (whose previous content is discarded).
pub fn greedy_complete_into(ranking: &DistanceRanking, partial: &[usize], fixed: usize, out: &mut Assignment) {
    debug_assert!(fixed <= partial.len());
    out.clear();
    out.extend_from_slice(&partial[..fixed]);
    out.extend((fixed..ranking.nb_customers()).map(|customer| ranking.nearest(customer)));
}
