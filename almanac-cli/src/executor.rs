//! Executor for running puzzle parts, optionally fanning queries out

use crate::cli::ParallelizeBy;
use crate::error::CliError;
use almanac_solver::{Almanac, AlmanacInstance, SolveError, SolveReport};
use chrono::Utc;
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// Runs the selected parts of a parsed almanac against a thread pool.
pub struct Executor {
    thread_pool: rayon::ThreadPool,
    parallelize_by: ParallelizeBy,
}

impl Executor {
    /// Create an executor with the requested pool size (0 or `None` lets
    /// rayon pick).
    pub fn new(threads: Option<usize>, parallelize_by: ParallelizeBy) -> Result<Self, CliError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.unwrap_or(0))
            .build()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;

        Ok(Self {
            thread_pool,
            parallelize_by,
        })
    }

    /// Which parts a run covers, honoring the part filter
    pub fn collect_parts(&self, part_filter: Option<u8>) -> RangeInclusive<u8> {
        match part_filter {
            Some(part) => part..=part,
            None => 1..=Almanac::PARTS,
        }
    }

    /// Solve the selected parts in order, one result per part.
    pub fn execute(
        &self,
        instance: &AlmanacInstance,
        part_filter: Option<u8>,
    ) -> Vec<Result<SolveReport, SolveError>> {
        self.collect_parts(part_filter)
            .map(|part| self.run_part(instance, part))
            .collect()
    }

    fn run_part(&self, instance: &AlmanacInstance, part: u8) -> Result<SolveReport, SolveError> {
        match self.parallelize_by {
            ParallelizeBy::Sequential => instance.solve(part),
            ParallelizeBy::Query => self.run_part_parallel(instance.almanac(), part),
        }
    }

    /// Fan the part's queries across the pool.
    ///
    /// Each seed (part 1) or seed range (part 2) resolves independently with
    /// no shared mutable state, so the fan-out needs no coordination beyond
    /// the final minimum reduction.
    fn run_part_parallel(&self, almanac: &Almanac, part: u8) -> Result<SolveReport, SolveError> {
        let solve_start = Utc::now();
        let lowest = match part {
            1 => self.thread_pool.install(|| {
                almanac
                    .seeds()
                    .par_iter()
                    .map(|&seed| almanac.pipeline().resolve(seed))
                    .min()
            }),
            2 => {
                let intervals = almanac
                    .seed_intervals()
                    .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
                self.thread_pool.install(|| {
                    intervals
                        .par_iter()
                        .flat_map_iter(|&interval| almanac.pipeline().resolve_range(interval))
                        .map(|output| output.start())
                        .min()
                })
            }
            _ => return Err(SolveError::PartOutOfRange(part)),
        };
        let solve_end = Utc::now();

        let answer = lowest
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::SolveFailed("almanac lists no seeds".into()))?;

        Ok(SolveReport {
            part,
            answer,
            solve_start,
            solve_end,
        })
    }
}
