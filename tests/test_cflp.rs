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

//! These tests solve the instances stored in `tests/resources` to optimality
//! and compare the outcome with the threshold stored in the file (which is
//! the optimal cost of these instances) and with a brute force enumeration.

use std::path::PathBuf;
use std::time::Duration;

use cflp::{evaluate_full, read_instance, BestSolution, BranchAndBound, Completion, NoCutoff, ParsedInstance, Solver, Statistics, TimeBudget};

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/")
        .join(id)
}

fn instance(id: &str) -> ParsedInstance {
    read_instance(locate(id)).expect("could not read the instance")
}

struct Outcome {
    completion: Completion,
    stats: Statistics,
    reports: Vec<(i64, Vec<usize>)>,
}

fn solve(parsed: &ParsedInstance) -> Outcome {
    let mut reports = vec![];
    let mut reporter = |cost: i64, sol: &[usize]| reports.push((cost, sol.to_vec()));
    let (completion, stats) = {
        let mut solver = BranchAndBound::new(&parsed.instance, &NoCutoff, &mut reporter).unwrap();
        (solver.run().unwrap(), solver.statistics())
    };
    Outcome { completion, stats, reports }
}

/// Cost of the cheapest assignment, by enumeration of all of them
fn brute_force(parsed: &ParsedInstance) -> i64 {
    let inst = &parsed.instance;
    let n = inst.nb_facilities();
    let m = inst.nb_customers();
    let total = (0..m).fold(1_usize, |acc, _| acc * n);

    let mut best = i64::MAX;
    let mut assignment = vec![0; m];
    for mut code in 0..total {
        for slot in assignment.iter_mut() {
            *slot = code % n;
            code /= n;
        }
        best = best.min(evaluate_full(inst, &assignment).unwrap());
    }
    best
}

fn check(id: &str) -> Outcome {
    let parsed  = instance(id);
    let outcome = solve(&parsed);

    assert!(outcome.completion.is_exact);
    assert_eq!(Some(parsed.threshold), outcome.completion.best_value);
    assert_eq!(brute_force(&parsed), parsed.threshold);

    // the last report is the answer, and every report is an actual solution
    let (cost, sol) = outcome.reports.last().expect("at least one report");
    assert_eq!(parsed.threshold, *cost);
    for (cost, sol) in outcome.reports.iter() {
        assert_eq!(*cost, evaluate_full(&parsed.instance, sol).unwrap());
    }
    assert_eq!(parsed.instance.nb_customers(), sol.len());
    // each improvement is reported on top of the initial solution
    assert_eq!(outcome.stats.improvements as usize + 1, outcome.reports.len());
    outcome
}

#[test]
fn tiny() {
    let outcome = check("tiny.txt");
    assert_eq!(vec![186, 110, 90], outcome.reports.iter().map(|r| r.0).collect::<Vec<_>>());
}

#[test]
fn no_customer() {
    let outcome = check("no_customer.txt");
    assert_eq!(vec![(0, vec![])], outcome.reports);
    assert_eq!(0, outcome.stats.explored);
}

#[test]
fn small() {
    check("small.txt");
}

#[test]
fn medium() {
    let outcome = check("medium.txt");
    assert!(outcome.stats.pruned > 0);
}

#[test]
fn tiered() {
    check("tiered.txt");
}

#[test]
fn wide() {
    check("wide.txt");
}

#[test]
fn reports_are_strictly_improving() {
    for id in ["small.txt", "medium.txt", "tiered.txt", "wide.txt"] {
        let outcome = solve(&instance(id));
        for pair in outcome.reports.windows(2) {
            assert!(pair[1].0 < pair[0].0, "{id}: {} then {}", pair[0].0, pair[1].0);
        }
    }
}

#[test]
fn a_generous_time_budget_does_not_alter_the_outcome() {
    let parsed   = instance("medium.txt");
    let cutoff   = TimeBudget::new(Duration::from_secs(60));
    let mut best = BestSolution::default();
    let completion = {
        let mut solver = BranchAndBound::new(&parsed.instance, &cutoff, &mut best).unwrap();
        solver.run().unwrap()
    };
    assert!(completion.is_exact);
    assert_eq!(Some(parsed.threshold), best.cost());
}

#[test]
fn missing_files_are_reported() {
    assert!(read_instance(locate("does_not_exist.txt")).is_err());
}
