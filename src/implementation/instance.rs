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

//! This module defines the read only view of a CFLP instance.

use crate::{Error, Result, TierCostMemo};

/// This structure represents an instance of the capacitated facility
/// location problem with tiered opening costs. It is immutable once built,
/// and its construction fails when the data is not internally consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// The bandwidth served by one tier of each facility
    capacities: Vec<i64>,
    /// The cost to pay for each unit of distance
    distance_cost: i64,
    /// The base opening cost of each facility
    opening_costs: Vec<i64>,
    /// The bandwidth required by each customer
    bandwidths: Vec<i64>,
    /// The distance matrix, indexed by facility first and customer second
    distances: Vec<Vec<i64>>,
}

impl Instance {
    /// Creates a new instance after having checked that all the dimensions
    /// agree with one another (the number of facilities is the number of
    /// opening costs, and the number of customers is the number of
    /// bandwidths) and that all values lie within their domain.
    ///
    /// `distances[f][c]` is the distance between facility `f` and customer `c`.
    pub fn new(
        capacities: Vec<i64>,
        distance_cost: i64,
        opening_costs: Vec<i64>,
        bandwidths: Vec<i64>,
        distances: Vec<Vec<i64>>,
    ) -> Result<Self> {
        let nb_facilities = opening_costs.len();
        let nb_customers  = bandwidths.len();

        check_dimension("capacities", nb_facilities, capacities.len())?;
        check_dimension("distance rows", nb_facilities, distances.len())?;
        for row in distances.iter() {
            check_dimension("distance columns", nb_customers, row.len())?;
        }
        if nb_facilities == 0 && nb_customers > 0 {
            return Err(Error::NoFacility);
        }

        check_values("capacity", &capacities, |x| x > 0)?;
        check_values("opening cost", &opening_costs, |x| x >= 0)?;
        check_values("bandwidth", &bandwidths, |x| x > 0)?;
        check_values("distance cost", &[distance_cost], |x| x >= 0)?;
        for row in distances.iter() {
            check_values("distance", row, |x| x >= 0)?;
        }

        Ok(Self { capacities, distance_cost, opening_costs, bandwidths, distances })
    }

    /// The number of facilities which could be opened
    pub fn nb_facilities(&self) -> usize {
        self.opening_costs.len()
    }
    /// The number of customers which must be served
    pub fn nb_customers(&self) -> usize {
        self.bandwidths.len()
    }
    /// The distance between `facility` and `customer`
    pub fn distance(&self, facility: usize, customer: usize) -> i64 {
        self.distances[facility][customer]
    }
    /// The bandwidth demanded by `customer`
    pub fn bandwidth(&self, customer: usize) -> i64 {
        self.bandwidths[customer]
    }
    /// The bandwidth served by each tier of `facility`
    pub fn capacity(&self, facility: usize) -> i64 {
        self.capacities[facility]
    }
    /// The base opening cost of `facility`
    pub fn opening_cost(&self, facility: usize) -> i64 {
        self.opening_costs[facility]
    }
    /// The cost to pay per unit of distance between a customer and its facility
    pub fn distance_cost(&self) -> i64 {
        self.distance_cost
    }
    /// The tier `facility` must be built to in order to serve `bandwidth`.
    /// That is `ceil(bandwidth / capacity)`.
    pub fn tier_of(&self, facility: usize, bandwidth: i64) -> u64 {
        debug_assert!(bandwidth >= 0);
        (bandwidth as u64).div_ceil(self.capacities[facility] as u64)
    }

    /// Computes the objective value of a (possibly partial) solution. The
    /// value at index `c` is the facility serving customer `c`, or `None` when
    /// that customer is not assigned yet (in which case it is ignored).
    ///
    /// This evaluation is independent from the one that is used during the
    /// search and fails whenever the solution does not fit the instance.
    pub fn objective_value(&self, solution: &[Option<usize>]) -> Result<i64> {
        if solution.len() != self.nb_customers() {
            return Err(Error::SolutionLength { expected: self.nb_customers(), actual: solution.len() });
        }

        let mut served = vec![0_i64; self.nb_facilities()];
        let mut total  = 0_i64;
        for (customer, facility) in solution.iter().enumerate() {
            let Some(facility) = *facility else { continue };
            if facility >= self.nb_facilities() {
                return Err(Error::UnknownFacility { customer, facility });
            }
            served[facility] = served[facility].checked_add(self.bandwidth(customer))
                .ok_or(Error::Overflow)?;
            let travel = self.distance_cost.checked_mul(self.distance(facility, customer))
                .ok_or(Error::Overflow)?;
            total = total.checked_add(travel).ok_or(Error::Overflow)?;
        }

        for (facility, bandwidth) in served.iter().copied().enumerate() {
            if bandwidth == 0 {
                continue;
            }
            let tier    = self.tier_of(facility, bandwidth);
            let opening = TierCostMemo::new(self.opening_cost(facility)).cost(tier)?;
            total = total.checked_add(opening).ok_or(Error::Overflow)?;
        }
        Ok(total)
    }
}

fn check_dimension(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::Dimension { what, expected, actual })
    }
}
fn check_values(what: &'static str, values: &[i64], valid: impl Fn(i64) -> bool) -> Result<()> {
    match values.iter().copied().enumerate().find(|(_, v)| !valid(*v)) {
        Some((index, value)) => Err(Error::InvalidValue { what, index, value }),
        None => Ok(()),
    }
}
