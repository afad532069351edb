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

//! This module defines the knobs one can use to tune the search.

use std::time::Duration;

use derive_builder::Builder;

/// By default, the cutoff is consulted once every 1024 explored nodes
pub const DEFAULT_CHECK_INTERVAL: u64 = 1023;
/// By default, progress is logged at most once per second
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

/// This is how you configure the branch-and-bound search.
///
/// # Example
/// ```
/// # use cflp::*;
/// use std::time::Duration;
///
/// let config = SearchConfigBuilder::default()
///     .check_interval(255)
///     .build()
///     .unwrap();
/// assert_eq!(255, config.check_interval);
/// assert_eq!(Duration::from_secs(1), config.progress_interval);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SearchConfig {
    /// A mask on the number of explored nodes. The cutoff criterion and the
    /// progress log are only consulted when `explored & check_interval == 0`.
    /// Hence, it should be a power of two minus one.
    #[builder(default = "DEFAULT_CHECK_INTERVAL")]
    pub check_interval: u64,
    /// The minimum amount of time between two progress lines in the log
    #[builder(default = "DEFAULT_PROGRESS_INTERVAL")]
    pub progress_interval: Duration,
}
impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            check_interval: DEFAULT_CHECK_INTERVAL,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}
