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

//! # CFLP
//! This crate implements an anytime branch-and-bound solver for the
//! Capacitated Facility Location Problem (CFLP) with tiered opening costs.
//! Every customer must be served by exactly one facility. A facility that
//! serves some bandwidth must be built up to the tier
//! `ceil(bandwidth / capacity)` and its opening cost grows with that tier
//! (see `tier_cost`). On top of that, each customer pays a distance cost which
//! is proportional to the distance separating it from its facility. The goal
//! is to minimize the sum of both.
//!
//! The solver explores the customers in order, and tries every facility for
//! each of them (nearest first). Each tentative decision is completed with
//! the greedy nearest-facility heuristic, which yields both an admissible
//! lower bound (used to prune) and a feasible solution (used to improve the
//! incumbent). Because the search is anytime, the best known solution is
//! always available and each improvement is pushed to a `SolutionReporter`.
//!
//! ## Quick Example
//! ```
//! # use cflp::*;
//! // 2 facilities, 2 customers
//! let instance = Instance::new(
//!     vec![10, 10],             // capacity of each tier, per facility
//!     2,                        // cost per unit of distance
//!     vec![100, 80],            // base opening cost, per facility
//!     vec![5, 5],               // bandwidth demand, per customer
//!     vec![vec![1, 4],          // distances (facility x customer)
//!          vec![3, 2]],
//! ).unwrap();
//!
//! let cutoff       = NoCutoff;
//! let mut reporter = BestSolution::default();
//! let mut solver   = BranchAndBound::new(&instance, &cutoff, &mut reporter).unwrap();
//!
//! let completion = solver.run().unwrap();
//! assert!(completion.is_exact);
//! // serving both customers from the second facility only opens one tier
//! assert_eq!(Some(90), completion.best_value);
//! assert_eq!(Some(vec![1, 1]), solver.best_solution());
//! // two improvements over the greedy (nearest facility) solution
//! assert_eq!(2, solver.statistics().improvements);
//! ```
//!
//! ## Going further
//! The `abstraction` level defines the seams between the solver and the
//! outside world (`Solver`, `Cutoff`, `SolutionReporter`). The
//! `implementation` level provides the instance model and its reader, the
//! cost functions, the bounds and the search engine itself.

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
