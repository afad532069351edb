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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::num::ParseIntError;

// ----------------------------------------------------------------------------
// --- ASSIGNMENT -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An assignment maps each customer (the index in the vector) onto the
/// facility that serves it (the value at that index).
///
/// The search manipulates two flavors of assignments: the *search path* where
/// only a prefix of the customers has been fixed by branching decisions (the
/// rest being greedily completed), and the *candidate best* which is always
/// a complete assignment.
pub type Assignment = Vec<usize>;

// ----------------------------------------------------------------------------
// --- RANKED FACILITY --------------------------------------------------------
// ----------------------------------------------------------------------------
/// One entry of the distance ranking of a customer: a facility along with
/// its distance to that customer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RankedFacility {
    /// The index of the facility
    pub facility: usize,
    /// The distance between the facility and the ranked customer
    pub distance: i64,
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why the search stopped before it was exhausted
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred,
}

/// The outcome of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Has the search space been exhausted (in which case the best value is
    /// optimal) or was the search interrupted by a cutoff ?
    pub is_exact: bool,
    /// The value of the best solution that was found
    pub best_value: Option<i64>,
}

/// A couple of counters describing the work performed by a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Number of tentative decisions (customer -> facility) that have been evaluated
    pub explored: u64,
    /// Number of tentative decisions discarded because of their lower bound
    pub pruned: u64,
    /// Number of times the incumbent was improved (the initial greedy
    /// solution is not counted)
    pub improvements: u64,
    /// Number of bound evaluations which overflowed
    pub overflows: u64,
    /// Deepest level reached by the search (number of fixed customers)
    pub max_depth: usize,
}

// ----------------------------------------------------------------------------
// --- Errors -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This enumeration groups the kind of errors that might occur when building,
/// reading or solving an instance.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// One of the patterns used to read the instance files is invalid
    #[error("regex {0}")]
    Regex(#[from] regex::Error),
    /// The instance file was not properly formatted.
    #[error("ill formed instance (line {line}): {reason}")]
    Format { line: usize, reason: String },
    /// Some array of the instance does not have the expected length
    #[error("wrong dimension for {what}: expected {expected} got {actual}")]
    Dimension { what: &'static str, expected: usize, actual: usize },
    /// Some value of the instance is out of its domain
    #[error("invalid {what} at index {index}: {value}")]
    InvalidValue { what: &'static str, index: usize, value: i64 },
    /// There are customers but no facility to serve them
    #[error("the instance has customers but no facility")]
    NoFacility,
    /// A cost computation exceeded the range of an i64
    #[error("arithmetic overflow while computing a cost")]
    Overflow,
    /// The evaluated solution does not cover the customers of the instance
    #[error("solution covers {actual} customers but the instance has {expected}")]
    SolutionLength { expected: usize, actual: usize },
    /// The evaluated solution routes a customer to a facility that does not exist
    #[error("customer {customer} is assigned to unknown facility {facility}")]
    UnknownFacility { customer: usize, facility: usize },
    /// The search can only be run once per solver
    #[error("the search has already been run")]
    AlreadyRun,
}

/// The result of all fallible operations of this crate
pub type Result<T> = std::result::Result<T, Error>;

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
