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

//! This module provides the implementation of the depth first branch-and-bound
//! solver. It uses one single thread of execution, and an explicit stack
//! instead of recursion.
//!
//! The customers are decided in order: at depth `d`, the search tries every
//! facility (nearest first) for customer `d`. Each tentative decision is
//! greedily completed and then:
//!
//! 1. its relaxed cost is computed. When that lower bound is not smaller than
//!    the cost of the best known solution, the decision is pruned.
//! 2. otherwise, its completed cost is computed. When that one improves on the
//!    best known solution, the incumbent is replaced and reported.
//! 3. if the lower bound still is below the cost of the incumbent, the search
//!    descends to decide customer `d + 1`.
//!
//! Because the greedy (nearest facility) solution is reported before the
//! search begins and the incumbent is only ever replaced by a complete
//! assignment, the search can be interrupted at any time: the best known
//! solution is always valid.
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::{evaluate_full, evaluate_relaxed, greedy_complete_into, greedy_completion};
use crate::{Assignment, Completion, Cutoff, DistanceRanking, Error, Instance, Reason, Result, SearchConfig, SearchStack, SolutionReporter, Solver, Statistics};

/// What must happen with a tentative decision once it has been evaluated
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Branch {
    /// The decision might still lead to an improving solution
    Descend,
    /// The decision cannot lead to any improving solution
    Prune,
}

pub struct BranchAndBound<'a> {
    /// The instance being solved
    instance: &'a Instance,
    /// A cutoff heuristic meant to decide when to stop the resolution of
    /// a given problem.
    cutoff: &'a dyn Cutoff,
    /// The harness which is told about every improving solution
    reporter: &'a mut dyn SolutionReporter,
    /// The tuning knobs of the search
    config: SearchConfig,
    /// For each customer, the facilities sorted by increasing distance
    ranking: DistanceRanking,

    /// The cost of the best known solution. It never increases.
    best_cost: i64,
    /// The best known solution. This is always a complete assignment whose
    /// cost is `best_cost`.
    best_sol: Assignment,
    /// The counters describing the work performed so far
    stats: Statistics,
    /// If the search was not carried out until the search space was
    /// exhausted, this is the reason why it stopped.
    abort: Option<Reason>,
    /// Set as soon as the search was run
    started: bool,
}

impl<'a> BranchAndBound<'a> {
    /// Prepares the resolution of `instance`: precomputes the distance ranking
    /// and the greedy (nearest facility) solution. No search happens here.
    ///
    /// This fails when the cost of the greedy solution cannot be represented.
    pub fn new(
        instance: &'a Instance,
        cutoff: &'a dyn Cutoff,
        reporter: &'a mut dyn SolutionReporter,
    ) -> Result<Self> {
        Self::custom(instance, cutoff, reporter, SearchConfig::default())
    }

    /// Same as `new` but lets you tune the search with the given `config`.
    pub fn custom(
        instance: &'a Instance,
        cutoff: &'a dyn Cutoff,
        reporter: &'a mut dyn SolutionReporter,
        config: SearchConfig,
    ) -> Result<Self> {
        let ranking   = DistanceRanking::new(instance);
        let best_sol  = greedy_completion(&ranking, &[], 0);
        let best_cost = evaluate_full(instance, &best_sol)?;

        Ok(Self {
            instance,
            cutoff,
            reporter,
            config,
            ranking,
            //
            best_cost,
            best_sol,
            stats: Statistics::default(),
            abort: None,
            started: false,
        })
    }

    /// Greedily completes the path whose first `fixed` customers are decided,
    /// and uses that completion to bound the cost reachable from the path.
    /// The incumbent is replaced when the completion improves on it.
    fn explore(&mut self, path: &[usize], fixed: usize, completed: &mut Assignment) -> Branch {
        greedy_complete_into(&self.ranking, path, fixed, completed);

        let lower = match evaluate_relaxed(self.instance, completed, fixed) {
            Ok(lower) => lower,
            Err(error) => {
                self.on_overflow(error, fixed);
                self.stats.pruned += 1;
                return Branch::Prune;
            }
        };
        if lower >= self.best_cost {
            self.stats.pruned += 1;
            return Branch::Prune;
        }

        match evaluate_full(self.instance, completed) {
            Ok(upper) if upper < self.best_cost => self.improve(upper, completed),
            Ok(_) => {},
            Err(error) => self.on_overflow(error, fixed),
        }

        if lower < self.best_cost {
            Branch::Descend
        } else {
            Branch::Prune
        }
    }

    /// Installs a new incumbent and tells the harness about it.
    fn improve(&mut self, cost: i64, solution: &[usize]) {
        self.best_cost = cost;
        self.best_sol.clear();
        self.best_sol.extend_from_slice(solution);
        self.stats.improvements += 1;

        info!(cost, explored = self.stats.explored, "improved solution");
        self.reporter.report(self.best_cost, &self.best_sol);
    }

    /// A bound that cannot be represented cannot improve on the incumbent
    fn on_overflow(&mut self, error: Error, depth: usize) {
        self.stats.overflows += 1;
        if self.stats.overflows == 1 {
            warn!(%error, depth, "bound evaluation overflowed, the branch is dropped");
        } else {
            debug!(%error, depth, "bound evaluation overflowed");
        }
    }

    fn log_progress(&self, start: Instant, depth: usize) {
        debug!(
            elapsed = start.elapsed().as_secs_f32(),
            explored = self.stats.explored,
            pruned = self.stats.pruned,
            depth,
            best = self.best_cost,
            "progress"
        );
    }

    /// The depth first search. The search path holds the facility of the
    /// customers that have been decided. Its entries beyond the current
    /// depth are stale, and they are never read since the greedy completion
    /// only copies the decided prefix.
    fn search(&mut self) {
        let nb_customers  = self.instance.nb_customers();
        let mut stack     = SearchStack::preallocated(nb_customers);
        let mut path      = vec![0; nb_customers];
        let mut completed = Assignment::with_capacity(nb_customers);

        let start        = Instant::now();
        let mut last_log = start;

        if nb_customers > 0 {
            stack.push(0);
        }

        while let Some(frame) = stack.current() {
            if self.stats.explored & self.config.check_interval == 0 {
                if self.cutoff.must_stop() {
                    self.abort = Some(Reason::CutoffOccurred);
                    break;
                }
                if last_log.elapsed() >= self.config.progress_interval {
                    self.log_progress(start, stack.depth());
                    last_log = Instant::now();
                }
            }

            let customer = frame.customer;
            let Some(candidate) = self.ranking.of(customer).get(frame.next_rank).copied() else {
                // all facilities have been tried for this customer: backtrack
                stack.pop();
                continue;
            };
            stack.advance();
            self.stats.explored += 1;

            path[customer] = candidate.facility;
            let fixed = customer + 1;
            self.stats.max_depth = self.stats.max_depth.max(fixed);

            if self.explore(&path, fixed, &mut completed) == Branch::Descend && fixed < nb_customers {
                stack.push(fixed);
            }
        }
    }
}

impl Solver for BranchAndBound<'_> {
    fn run(&mut self) -> Result<Completion> {
        if self.started {
            return Err(Error::AlreadyRun);
        }
        self.started = true;

        info!(cost = self.best_cost, "initial greedy solution");
        self.reporter.report(self.best_cost, &self.best_sol);

        self.search();

        let is_exact = self.abort.is_none();
        info!(
            best = self.best_cost,
            exact = is_exact,
            explored = self.stats.explored,
            pruned = self.stats.pruned,
            improvements = self.stats.improvements,
            "search finished"
        );
        Ok(Completion { is_exact, best_value: Some(self.best_cost) })
    }

    fn best_value(&self) -> Option<i64> {
        Some(self.best_cost)
    }

    fn best_solution(&self) -> Option<Assignment> {
        Some(self.best_sol.clone())
    }

    fn statistics(&self) -> Statistics {
        self.stats
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::prelude::*;

    use crate::*;

    fn two_by_two() -> Instance {
        Instance::new(
            vec![10, 10],
            2,
            vec![100, 80],
            vec![5, 5],
            vec![vec![1, 4], vec![3, 2]],
        ).unwrap()
    }

    /// Cost of the cheapest of all the nb_facilities^nb_customers assignments
    fn brute_force(instance: &Instance) -> i64 {
        let n = instance.nb_facilities();
        let m = instance.nb_customers();
        let mut current = vec![0; m];
        let mut best = evaluate_full(instance, &current).unwrap();
        loop {
            // next assignment in lexicographic order
            let mut c = 0;
            while c < m && current[c] == n - 1 {
                current[c] = 0;
                c += 1;
            }
            if c == m {
                return best;
            }
            current[c] += 1;
            best = best.min(evaluate_full(instance, &current).unwrap());
        }
    }

    /// Solves the instance to optimality and returns all the reports
    fn solve(instance: &Instance) -> (Completion, Vec<(i64, Assignment)>, Statistics) {
        let mut reports = vec![];
        let mut reporter = |cost: i64, sol: &[usize]| reports.push((cost, sol.to_vec()));
        let completion;
        let stats;
        {
            let mut solver = BranchAndBound::new(instance, &NoCutoff, &mut reporter).unwrap();
            completion = solver.run().unwrap();
            stats = solver.statistics();
        }
        (completion, reports, stats)
    }

    #[test]
    fn initial_solution_is_the_greedy_one() {
        let inst = two_by_two();
        let mut best = BestSolution::default();
        let solver = BranchAndBound::new(&inst, &NoCutoff, &mut best).unwrap();
        assert_eq!(Some(186), solver.best_value());
        assert_eq!(Some(vec![0, 1]), solver.best_solution());
        assert_eq!(Statistics::default(), solver.statistics());
    }
    #[test]
    fn nothing_is_reported_before_the_search_is_run() {
        let inst = two_by_two();
        let mut best = BestSolution::default();
        {
            let _solver = BranchAndBound::new(&inst, &NoCutoff, &mut best).unwrap();
        }
        assert_eq!(0, best.nb_reports());
    }
    #[test]
    fn converges_to_the_optimum_of_the_two_by_two_instance() {
        let inst = two_by_two();
        let (completion, reports, stats) = solve(&inst);

        assert_eq!(Completion { is_exact: true, best_value: Some(90) }, completion);
        assert_eq!(brute_force(&inst), 90);
        assert_eq!(vec![(186, vec![0, 1]), (110, vec![0, 0]), (90, vec![1, 1])], reports);
        assert_eq!(2, stats.improvements);
        assert_eq!(2, stats.max_depth);
    }
    #[test]
    fn zero_customer_costs_nothing() {
        let inst = Instance::new(vec![3, 4], 7, vec![10, 20], vec![], vec![vec![], vec![]]).unwrap();
        let (completion, reports, stats) = solve(&inst);
        assert_eq!(Completion { is_exact: true, best_value: Some(0) }, completion);
        assert_eq!(vec![(0, vec![])], reports);
        assert_eq!(0, stats.explored);

        let inst = Instance::new(vec![], 7, vec![], vec![], vec![]).unwrap();
        let (completion, _, _) = solve(&inst);
        assert_eq!(Some(0), completion.best_value);
    }
    #[test]
    fn all_zero_distances_are_fine() {
        let inst = Instance::new(vec![2, 2], 3, vec![5, 4], vec![1, 1, 1], vec![vec![0; 3], vec![0; 3]]).unwrap();
        let (completion, reports, _) = solve(&inst);
        assert_eq!(Some(brute_force(&inst)), completion.best_value);
        assert_eq!(completion.best_value, reports.last().map(|r| r.0));
    }
    #[test]
    fn a_facility_without_bandwidth_costs_nothing() {
        // facility 1 is far from everyone and expensive: it is never opened
        let inst = Instance::new(vec![10, 10], 1, vec![5, 1000], vec![1, 1], vec![vec![1, 1], vec![50, 50]]).unwrap();
        let (completion, reports, _) = solve(&inst);
        assert_eq!(Some(7), completion.best_value);
        assert_eq!(vec![(7, vec![0, 0])], reports);
    }
    #[test]
    fn run_can_only_be_called_once() {
        let inst = two_by_two();
        let mut best = BestSolution::default();
        let mut solver = BranchAndBound::new(&inst, &NoCutoff, &mut best).unwrap();
        assert!(solver.run().is_ok());
        assert!(matches!(solver.run(), Err(Error::AlreadyRun)));
    }
    #[test]
    fn an_immediate_cutoff_still_yields_the_greedy_solution() {
        struct Stop;
        impl Cutoff for Stop {
            fn must_stop(&self) -> bool { true }
        }
        let inst = two_by_two();
        let mut best = BestSolution::default();
        let completion = {
            let mut solver = BranchAndBound::new(&inst, &Stop, &mut best).unwrap();
            solver.run().unwrap()
        };
        assert_eq!(Completion { is_exact: false, best_value: Some(186) }, completion);
        assert_eq!(Some(186), best.cost());
        assert_eq!(Some(&[0, 1][..]), best.assignment());
        assert_eq!(1, best.nb_reports());
    }
    #[test]
    fn the_cutoff_is_polled_at_the_configured_interval() {
        struct CountDown(Cell<usize>);
        impl Cutoff for CountDown {
            fn must_stop(&self) -> bool {
                let left = self.0.get();
                self.0.set(left.saturating_sub(1));
                left == 0
            }
        }
        let inst = Instance::new(
            vec![1; 4], 1, vec![10, 20, 30, 40], vec![1; 6], vec![vec![3, 1, 4, 1, 5, 9]; 4],
        ).unwrap();
        let cutoff = CountDown(Cell::new(2));
        let config = SearchConfigBuilder::default().check_interval(0).build().unwrap();
        let mut best = BestSolution::default();
        let (completion, stats) = {
            let mut solver = BranchAndBound::custom(&inst, &cutoff, &mut best, config).unwrap();
            (solver.run().unwrap(), solver.statistics())
        };
        // polled before each node: the third poll stops the search
        assert!(!completion.is_exact);
        assert_eq!(2, stats.explored);
    }
    #[test]
    fn overflowing_branches_are_dropped() {
        // building facility 0 up to its second tier costs more than an i64
        let huge = i64::MAX / 10 * 7;
        let inst = Instance::new(
            vec![1, 10],
            1,
            vec![huge, 1],
            vec![1, 1],
            vec![vec![0, 5], vec![5, 0]],
        ).unwrap();
        let (completion, reports, stats) = solve(&inst);
        assert_eq!(Completion { is_exact: true, best_value: Some(6) }, completion);
        assert_eq!(vec![(huge + 1, vec![0, 1]), (6, vec![1, 1])], reports);
        assert_eq!(1, stats.overflows);
    }
    #[test]
    fn an_unrepresentable_greedy_solution_is_an_error() {
        let inst = Instance::new(vec![1], i64::MAX, vec![1], vec![1], vec![vec![2]]).unwrap();
        let mut best = BestSolution::default();
        assert!(matches!(BranchAndBound::new(&inst, &NoCutoff, &mut best), Err(Error::Overflow)));
    }

    #[test]
    fn huge_distances_at_no_cost_are_solvable() {
        let far  = i64::MAX / 2 + 1;
        let inst = Instance::new(vec![10], 0, vec![5], vec![1, 1], vec![vec![far, far]]).unwrap();
        let (completion, reports, stats) = solve(&inst);
        assert_eq!(Completion { is_exact: true, best_value: Some(5) }, completion);
        assert_eq!(vec![(5, vec![0, 0])], reports);
        assert_eq!(0, stats.overflows);
    }

    /// Some random small instance
    fn instance(max_facilities: usize, max_customers: usize) -> impl Strategy<Value = Instance> {
        (1..=max_facilities, 0..=max_customers).prop_flat_map(|(n, m)| {
            (
                prop::collection::vec(1_i64..=10, n),
                0_i64..=5,
                prop::collection::vec(0_i64..=100, n),
                prop::collection::vec(1_i64..=10, m),
                prop::collection::vec(prop::collection::vec(0_i64..=20, m), n),
            )
        })
        .prop_map(|(cap, rate, open, bw, dist)| Instance::new(cap, rate, open, bw, dist).unwrap())
    }

    proptest! {
        #[test]
        fn small_instances_are_solved_to_optimality(inst in instance(4, 4)) {
            let (completion, _, _) = solve(&inst);
            prop_assert!(completion.is_exact);
            prop_assert_eq!(Some(brute_force(&inst)), completion.best_value);
        }
        #[test]
        fn reports_are_strictly_decreasing_and_feasible(inst in instance(4, 6)) {
            let (completion, reports, _) = solve(&inst);
            prop_assert!(!reports.is_empty());
            for pair in reports.windows(2) {
                prop_assert!(pair[1].0 < pair[0].0);
            }
            for (cost, sol) in reports.iter() {
                prop_assert_eq!(inst.nb_customers(), sol.len());
                prop_assert!(sol.iter().all(|f| *f < inst.nb_facilities()));
                let opt = sol.iter().map(|f| Some(*f)).collect::<Vec<_>>();
                prop_assert_eq!(*cost, inst.objective_value(&opt).unwrap());
            }
            prop_assert_eq!(completion.best_value, reports.last().map(|r| r.0));
        }
    }
}
