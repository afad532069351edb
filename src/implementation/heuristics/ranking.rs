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

//! This module provides the distance ranking of the facilities: for each
//! customer, the list of all facilities sorted by increasing distance.

use crate::{Instance, RankedFacility};

/// For every customer, the facilities sorted from the nearest to the farthest.
/// Ties are broken by facility index so that the ranking is deterministic.
///
/// This ranking is computed once per instance and is read only afterwards.
/// The search uses it to decide the order in which the facilities are tried
/// for a customer, and the greedy completion uses its first entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceRanking {
    ranks: Vec<Vec<RankedFacility>>,
}
impl DistanceRanking {
    /// Precomputes the ranking of every customer of `instance`
    pub fn new(instance: &Instance) -> Self {
        let ranks = (0..instance.nb_customers())
            .map(|customer| {
                let mut rank = (0..instance.nb_facilities())
                    .map(|facility| RankedFacility { facility, distance: instance.distance(facility, customer) })
                    .collect::<Vec<_>>();
                // stable: equidistant facilities keep their index order
                rank.sort_by_key(|r| r.distance);
                rank
            })
            .collect();
        Self { ranks }
    }
    /// The number of ranked customers
    pub fn nb_customers(&self) -> usize {
        self.ranks.len()
    }
    /// All the facilities, from the nearest to the farthest from `customer`
    pub fn of(&self, customer: usize) -> &[RankedFacility] {
        &self.ranks[customer]
    }
    /// The facility which is the closest to `customer`
    pub fn nearest(&self, customer: usize) -> usize {
        self.ranks[customer][0].facility
    }
}
