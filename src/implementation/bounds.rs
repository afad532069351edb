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

//! This module provides the two cost evaluations the search relies on.
//!
//! * `evaluate_full` computes the true objective value of a complete
//!   assignment. It is thus the cost of a feasible solution (upper bound).
//! * `evaluate_relaxed` computes an admissible lower bound on the cost of any
//!   complete assignment that agrees with the fixed prefix of a search path.
//!
//! Both evaluations fail with `Error::Overflow` rather than silently wrap.

use bit_set::BitSet;

use crate::{tier_cost, Error, Instance, Result};

/// Computes the total cost of the given complete assignment: the opening
/// cost of all facilities that serve some bandwidth plus the distance cost of
/// all customers.
pub fn evaluate_full(instance: &Instance, assignment: &[usize]) -> Result<i64> {
    debug_assert_eq!(assignment.len(), instance.nb_customers());

    let mut served = vec![0_i64; instance.nb_facilities()];
    let mut total  = 0_i64;
    for (customer, facility) in assignment.iter().copied().enumerate() {
        served[facility] = served[facility].checked_add(instance.bandwidth(customer)).ok_or(Error::Overflow)?;
        total = total.checked_add(travel_cost(instance, facility, customer)?).ok_or(Error::Overflow)?;
    }

    for (facility, bandwidth) in served.iter().copied().enumerate() {
        if bandwidth == 0 {
            continue;
        }
        total = total.checked_add(opening_cost(instance, facility, bandwidth)?).ok_or(Error::Overflow)?;
    }
    Ok(total)
}

/// Computes a lower bound on the cost of any completion of the search path
/// whose first `fixed` customers have been decided. The given `assignment`
/// is expected to be the greedy completion of that path (customers beyond
/// the prefix go to their nearest facility).
///
/// The relaxation only charges the opening cost of the facilities which are
/// *forced open* (at least one fixed customer is routed there), and it only
/// accounts for the bandwidth of the fixed customers when computing their tier.
/// The distance cost of every customer is charged. Since the unfixed customers
/// sit at their nearest facility, and since the tier cost never decreases as
/// the bandwidth grows, this never exceeds the cost of a completion.
pub fn evaluate_relaxed(instance: &Instance, assignment: &[usize], fixed: usize) -> Result<i64> {
    debug_assert_eq!(assignment.len(), instance.nb_customers());
    debug_assert!(fixed <= assignment.len());

    let mut forced = BitSet::with_capacity(instance.nb_facilities());
    let mut served = vec![0_i64; instance.nb_facilities()];
    let mut total  = 0_i64;
    for (customer, facility) in assignment.iter().copied().enumerate() {
        if customer < fixed {
            forced.insert(facility);
            served[facility] = served[facility].checked_add(instance.bandwidth(customer)).ok_or(Error::Overflow)?;
        }
        total = total.checked_add(travel_cost(instance, facility, customer)?).ok_or(Error::Overflow)?;
    }

    for facility in forced.iter() {
        total = total.checked_add(opening_cost(instance, facility, served[facility])?).ok_or(Error::Overflow)?;
    }
    Ok(total)
}

/// The distance cost paid by `customer` when it is served by `facility`
fn travel_cost(instance: &Instance, facility: usize, customer: usize) -> Result<i64> {
    instance.distance_cost().checked_mul(instance.distance(facility, customer)).ok_or(Error::Overflow)
}
fn opening_cost(instance: &Instance, facility: usize, bandwidth: i64) -> Result<i64> {
    tier_cost(instance.tier_of(facility, bandwidth), instance.opening_cost(facility))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{evaluate_full, evaluate_relaxed, greedy_completion, DistanceRanking, Error, Instance};

    fn two_by_two() -> Instance {
        Instance::new(
            vec![10, 10],
            2,
            vec![100, 80],
            vec![5, 5],
            vec![vec![1, 4], vec![3, 2]],
        ).unwrap()
    }

    #[test]
    fn full_evaluation_is_the_objective() {
        let inst = two_by_two();
        for sol in [[0, 0], [0, 1], [1, 0], [1, 1]] {
            let opt = sol.iter().map(|f| Some(*f)).collect::<Vec<_>>();
            assert_eq!(inst.objective_value(&opt).unwrap(), evaluate_full(&inst, &sol).unwrap());
        }
        assert_eq!(186, evaluate_full(&inst, &[0, 1]).unwrap());
    }
    #[test]
    fn full_evaluation_is_idempotent() {
        let inst = two_by_two();
        assert_eq!(evaluate_full(&inst, &[1, 0]).unwrap(), evaluate_full(&inst, &[1, 0]).unwrap());
    }
    #[test]
    fn relaxed_evaluation_only_opens_forced_facilities() {
        let inst = two_by_two();
        // customer 0 fixed to facility 0, customer 1 greedily at facility 1
        assert_eq!(100 + 2 * (1 + 2), evaluate_relaxed(&inst, &[0, 1], 1).unwrap());
        // nothing fixed: distances only
        assert_eq!(2 * (1 + 2), evaluate_relaxed(&inst, &[0, 1], 0).unwrap());
        // everything fixed: this is the full cost
        assert_eq!(186, evaluate_relaxed(&inst, &[0, 1], 2).unwrap());
    }
    #[test]
    fn relaxed_evaluation_tiers_on_fixed_bandwidth_only() {
        // both customers end up at facility 0, but only the first one is
        // fixed: the facility is charged for tier 1 rather than tier 2
        let inst = Instance::new(vec![5], 1, vec![100], vec![5, 5], vec![vec![0, 0]]).unwrap();
        assert_eq!(100, evaluate_relaxed(&inst, &[0, 0], 1).unwrap());
        assert_eq!(150, evaluate_relaxed(&inst, &[0, 0], 2).unwrap());
        assert_eq!(150, evaluate_full(&inst, &[0, 0]).unwrap());
    }
    #[test]
    fn relaxed_evaluation_does_not_leak_between_calls() {
        let inst = two_by_two();
        let first  = evaluate_relaxed(&inst, &[1, 1], 2).unwrap();
        let _other = evaluate_relaxed(&inst, &[0, 0], 2).unwrap();
        assert_eq!(first, evaluate_relaxed(&inst, &[1, 1], 2).unwrap());
        assert_eq!(2 * (1 + 2), evaluate_relaxed(&inst, &[0, 1], 0).unwrap());
    }
    #[test]
    fn evaluations_of_nothing_cost_nothing() {
        let inst = Instance::new(vec![3], 5, vec![4], vec![], vec![vec![]]).unwrap();
        assert_eq!(0, evaluate_full(&inst, &[]).unwrap());
        assert_eq!(0, evaluate_relaxed(&inst, &[], 0).unwrap());
    }
    #[test]
    fn evaluations_overflow_explicitly() {
        let inst = Instance::new(vec![1], i64::MAX / 2, vec![0], vec![1, 1], vec![vec![2, 2]]).unwrap();
        assert!(matches!(evaluate_full(&inst, &[0, 0]), Err(Error::Overflow)));
        assert!(matches!(evaluate_relaxed(&inst, &[0, 0], 1), Err(Error::Overflow)));

        let inst = Instance::new(vec![1], 0, vec![1], vec![1; 200], vec![vec![0; 200]]).unwrap();
        assert!(matches!(evaluate_full(&inst, &[0; 200]), Err(Error::Overflow)));
    }
    #[test]
    fn huge_distances_are_free_when_distance_costs_nothing() {
        let far  = i64::MAX / 2 + 1;
        let inst = Instance::new(vec![10], 0, vec![5], vec![1, 1], vec![vec![far, far]]).unwrap();
        assert_eq!(5, inst.objective_value(&[Some(0), Some(0)]).unwrap());
        assert_eq!(5, evaluate_full(&inst, &[0, 0]).unwrap());
        assert_eq!(5, evaluate_relaxed(&inst, &[0, 0], 2).unwrap());
        assert_eq!(0, evaluate_relaxed(&inst, &[0, 0], 0).unwrap());
    }

    /// Some random small instance
    fn instance() -> impl Strategy<Value = Instance> {
        (1_usize..=4, 1_usize..=5).prop_flat_map(|(n, m)| {
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
        fn relaxed_never_exceeds_any_consistent_completion(
            inst   in instance(),
            seed   in prop::collection::vec(0_usize..100, 5),
            other  in prop::collection::vec(0_usize..100, 5),
            fixed  in 0_usize..=5,
        ) {
            let n = inst.nb_facilities();
            let m = inst.nb_customers();
            let fixed   = fixed.min(m);
            let ranking = DistanceRanking::new(&inst);
            let path    = seed.iter().take(m).map(|x| x % n).collect::<Vec<_>>();

            let completed = greedy_completion(&ranking, &path, fixed);
            let lower     = evaluate_relaxed(&inst, &completed, fixed).unwrap();

            // any completion that agrees with the fixed prefix
            let mut completion = path.clone();
            for (c, x) in other.iter().take(m).enumerate().skip(fixed) {
                completion[c] = x % n;
            }
            prop_assert!(lower <= evaluate_full(&inst, &completion).unwrap());
            prop_assert!(lower <= evaluate_full(&inst, &completed).unwrap());
        }
    }
}
