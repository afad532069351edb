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

//! Solves one instance of the capacitated facility location problem with
//! tiered opening costs, and prints the best solution found within the
//! allotted time.

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cflp::{read_instance, BestSolution, BranchAndBound, Completion, Cutoff, NoCutoff, Solver, TimeBudget};

/// An anytime branch-and-bound solver for the capacitated facility location
/// problem with tiered opening costs.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The path to the instance file
    fname: String,
    /// The maximum amount of time (in seconds) you would like this solver to run
    #[clap(short, long, default_value = "30")]
    duration: u64,
    /// Do not impose any time limit: search until optimality is proven
    #[clap(long)]
    exhaustive: bool,
    /// Log the progress of the search
    #[clap(short, long)]
    verbose: bool,
}

fn enable_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn cutoff(args: &Args) -> Box<dyn Cutoff> {
    if args.exhaustive {
        Box::new(NoCutoff)
    } else {
        Box::new(TimeBudget::new(Duration::from_secs(args.duration)))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    enable_tracing(args.verbose);

    let parsed = read_instance(&args.fname)
        .with_context(|| format!("cannot read instance {}", args.fname))?;
    let cutoff = cutoff(&args);
    let mut best = BestSolution::default();

    let start = Instant::now();
    let (Completion { is_exact, best_value }, stats) = {
        let mut solver = BranchAndBound::new(&parsed.instance, cutoff.as_ref(), &mut best)
            .context("cannot evaluate the initial solution")?;
        (solver.run()?, solver.statistics())
    };
    let duration = start.elapsed();
    let objective = best_value.unwrap_or(-1);

    println!("Duration:   {:.3} seconds \nObjective:  {}\nThreshold:  {}\nWithin thr: {}\nAborted:    {}\nExplored:   {}\nPruned:     {}\nSolution:   {:?}",
            duration.as_secs_f32(),
            objective,
            parsed.threshold,
            best_value.map_or(false, |v| v <= parsed.threshold),
            !is_exact,
            stats.explored,
            stats.pruned,
            best.assignment().unwrap_or(&[]));
    Ok(())
}
