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

//! This module provides the functions to read an instance from a text file.
//!
//! The format is line oriented. Blank lines and lines starting with `#` are
//! ignored. An instance starts with the following headers (in this order):
//! ```text
//! THRESHOLD: <int>
//! FACILITIES: <n>
//! CUSTOMERS: <m>
//! MAXBANDWIDTHS: <int> x n
//! DISTANCECOSTS: <int>
//! OPENINGCOSTS: <int> x n
//! ```
//! followed by one line per customer: `<bandwidth>; <d_0> <d_1> ... <d_n-1>`
//! where `d_f` is the distance between that customer and facility `f`.
//! Anything that follows the last customer is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

use regex::Regex;

use crate::{Error, Instance, Result};

/// An instance along with the threshold it came with. The threshold is the
/// reference cost a solution to that instance is graded against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstance {
    pub instance: Instance,
    pub threshold: i64,
}

/// This function is used to read an instance from file. It returns either an
/// instance if everything went on well or an error describing the problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<ParsedInstance> {
    let f = File::open(fname)?;
    parse_instance(BufReader::new(f))
}

/// Same as `read_instance` but reads from any buffered source.
pub fn parse_instance<R: BufRead>(source: R) -> Result<ParsedInstance> {
    let header   = Regex::new(r"^(?P<key>[A-Z]+):\s*(?P<values>.*)$")?;
    let customer = Regex::new(r"^(?P<bw>\S+)\s*;\s*(?P<dist>.*)$")?;

    let mut lines = Lines::new(source);

    let threshold     = lines.header(&header, "THRESHOLD", Some(1))?[0];
    let nb_facilities = lines.header::<usize>(&header, "FACILITIES", Some(1))?[0];
    let nb_customers  = lines.header::<usize>(&header, "CUSTOMERS", Some(1))?[0];
    let capacities    = lines.header(&header, "MAXBANDWIDTHS", Some(nb_facilities))?;
    let distance_cost = lines.header(&header, "DISTANCECOSTS", Some(1))?[0];
    let opening_costs = lines.header(&header, "OPENINGCOSTS", Some(nb_facilities))?;

    // the customer count is not trusted for allocation: it may exceed the file
    let mut bandwidths = vec![];
    let mut distances  = vec![vec![]; nb_facilities];
    for c in 0..nb_customers {
        let (number, line) = lines.require(|| format!("customer {c}"))?;
        let caps = customer.captures(&line).ok_or_else(|| Error::Format {
            line: number,
            reason: format!("expected '<bandwidth>; <distances>' for customer {c}"),
        })?;

        bandwidths.push(caps["bw"].parse::<i64>()?);
        let row = integers::<i64>(&caps["dist"])?;
        check_count(number, "distances", nb_facilities, row.len())?;
        for (f, d) in row.into_iter().enumerate() {
            distances[f].push(d);
        }
    }

    let instance = Instance::new(capacities, distance_cost, opening_costs, bandwidths, distances)?;
    Ok(ParsedInstance { instance, threshold })
}

/// The significant lines of a source, along with their (1-based) number
struct Lines<R: BufRead> {
    lines: std::io::Lines<R>,
    number: usize,
}
impl<R: BufRead> Lines<R> {
    fn new(source: R) -> Self {
        Self { lines: source.lines(), number: 0 }
    }
    /// Returns the next line which is neither blank nor a comment
    fn next_significant(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            self.number += 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            return Ok(Some((self.number, line.to_string())));
        }
        Ok(None)
    }
    /// Same as `next_significant` but running out of lines is an error
    fn require(&mut self, what: impl FnOnce() -> String) -> Result<(usize, String)> {
        match self.next_significant()? {
            Some(line) => Ok(line),
            None => Err(Error::Format {
                line: self.number + 1,
                reason: format!("unexpected end of file, expected {}", what()),
            }),
        }
    }
    /// Reads the `key` header and its values. When `count` is given, the
    /// header must carry exactly that many values.
    fn header<T>(&mut self, pattern: &Regex, key: &str, count: Option<usize>) -> Result<Vec<T>>
        where T: FromStr<Err = ParseIntError>
    {
        let (number, line) = self.require(|| format!("{key} header"))?;
        let caps = pattern.captures(&line)
            .filter(|caps| &caps["key"] == key)
            .ok_or_else(|| Error::Format { line: number, reason: format!("expected {key} header") })?;

        let values = integers(&caps["values"])?;
        if let Some(expected) = count {
            check_count(number, key, expected, values.len())?;
        }
        Ok(values)
    }
}

fn integers<T>(text: &str) -> Result<Vec<T>>
    where T: FromStr<Err = ParseIntError>
{
    text.split_whitespace()
        .map(|x| x.parse::<T>().map_err(Error::from))
        .collect()
}
fn check_count(line: usize, what: &str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::Format { line, reason: format!("expected {expected} {what} got {actual}") })
    }
}
