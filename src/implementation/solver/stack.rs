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

//! This module provides the explicit stack which replaces recursion in the
//! depth first search (the depth can be as large as the number of customers).

/// One level of the depth first search: the customer being decided and the
/// rank (in the customer's distance ranking) of the next facility to try.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The customer whose facility is being decided at this level
    pub customer: usize,
    /// The rank of the next facility to try for this customer
    pub next_rank: usize,
}

/// A LIFO stack of search frames. The frame at the top of the stack is the
/// deepest level of the current search path.
#[derive(Debug, Clone, Default)]
pub struct SearchStack {
    frames: Vec<Frame>,
}
impl SearchStack {
    /// Creates a `SearchStack` able to hold a path through all customers
    /// without reallocating.
    #[inline]
    pub fn preallocated(nb_customers: usize) -> Self {
        Self { frames: Vec::with_capacity(nb_customers) }
    }
    /// Returns the current search depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
    /// Opens a new level where all facilities remain to be tried for `customer`
    #[inline]
    pub fn push(&mut self, customer: usize) {
        self.frames.push(Frame { customer, next_rank: 0 });
    }
    /// Closes the deepest level (backtrack)
    #[inline]
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }
    /// Returns the deepest level, if any
    #[inline]
    pub fn current(&self) -> Option<Frame> {
        self.frames.last().copied()
    }
    /// Moves the deepest level on to its next facility
    #[inline]
    pub fn advance(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.next_rank += 1;
        }
    }
}
