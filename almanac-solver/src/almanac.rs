//! The almanac model: seed inputs plus the remapping pipeline.

use crate::error::{ParseError, SolveError};
use almanac_core::{Interval, Pipeline, RangeMapping, Stage};
use anyhow::anyhow;
use itertools::Itertools;

/// Parsed almanac input: the seed list and the pipeline of translation
/// stages threading seeds through to locations.
///
/// Constructed once by [`Almanac::parse`] and queried read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    seeds: Vec<u64>,
    pipeline: Pipeline,
}

impl Almanac {
    /// Number of puzzle parts this model answers.
    pub const PARTS: u8 = 2;

    /// Parse almanac text.
    ///
    /// The expected shape is a `seeds:` line followed by blocks of rules:
    ///
    /// ```text
    /// seeds: 79 14 55 13
    ///
    /// seed-to-soil map:
    /// 50 98 2
    /// 52 50 48
    /// ```
    ///
    /// Header lines (anything else containing `:`) start a new stage and are
    /// otherwise discarded, blank lines are skipped, and every remaining
    /// line must be a whitespace-separated `destination source length`
    /// triple. Errors carry the offending 1-based line number.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut seeds: Vec<u64> = Vec::new();
        let mut saw_seeds = false;
        let mut stages: Vec<Stage> = Vec::new();
        let mut current: Vec<RangeMapping> = Vec::new();

        for (line_idx, raw) in input.lines().enumerate() {
            let line = raw.trim();
            let line_result: Result<(), anyhow::Error> = if line.is_empty() {
                Ok(())
            } else if let Some(values) = line.strip_prefix("seeds:") {
                parse_numbers(values).map(|parsed| {
                    seeds = parsed;
                    saw_seeds = true;
                })
            } else if line.contains(':') {
                // header line: a new stage begins, flush collected rules
                if !current.is_empty() {
                    stages.push(Stage::new(std::mem::take(&mut current)));
                }
                Ok(())
            } else {
                parse_rule(line).map(|rule| current.push(rule))
            };

            line_result.map_err(|e| {
                ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
            })?;
        }
        if !current.is_empty() {
            stages.push(Stage::new(current));
        }

        if !saw_seeds {
            return Err(ParseError::MissingData("no `seeds:` line in input".to_string()));
        }

        Ok(Self {
            seeds,
            pipeline: Pipeline::new(stages),
        })
    }

    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Part-two reading of the seed line: consecutive `(start, length)`
    /// pairs describing whole seed ranges.
    ///
    /// An odd number of seed values cannot form pairs and is rejected.
    pub fn seed_intervals(&self) -> Result<Vec<Interval>, ParseError> {
        if self.seeds.len() % 2 != 0 {
            return Err(ParseError::MissingData(format!(
                "seed ranges need (start, length) pairs, got {} values",
                self.seeds.len()
            )));
        }
        Ok(self
            .seeds
            .iter()
            .copied()
            .tuples()
            .map(|(start, length)| Interval::new(start, length))
            .collect())
    }

    /// Part 1: the minimum location any listed seed resolves to.
    pub fn lowest_location(&self) -> Option<u64> {
        self.seeds
            .iter()
            .map(|&seed| self.pipeline.resolve(seed))
            .min()
    }

    /// Part 2: the minimum location start across the fully resolved seed
    /// ranges.
    pub fn lowest_location_of_ranges(&self) -> Result<Option<u64>, ParseError> {
        let intervals = self.seed_intervals()?;
        Ok(intervals
            .into_iter()
            .flat_map(|interval| self.pipeline.resolve_range(interval))
            .map(|output| output.start())
            .min())
    }

    /// Solve a specific part of the problem.
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartOutOfRange)` - `part` is not in `1..=PARTS`
    /// * `Err(SolveError::SolveFailed)` - The almanac cannot answer it
    pub fn solve_part(&self, part: u8) -> Result<String, SolveError> {
        let answer = match part {
            1 => self.lowest_location(),
            2 => self
                .lowest_location_of_ranges()
                .map_err(|e| SolveError::SolveFailed(Box::new(e)))?,
            _ => return Err(SolveError::PartOutOfRange(part)),
        };
        answer
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("almanac lists no seeds").into()))
    }
}

fn parse_numbers(text: &str) -> Result<Vec<u64>, anyhow::Error> {
    text.split_whitespace()
        .map(|token| token.parse::<u64>().map_err(anyhow::Error::from))
        .collect()
}

fn parse_rule(line: &str) -> Result<RangeMapping, anyhow::Error> {
    let (destination_start, source_start, length) = parse_numbers(line)?
        .into_iter()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected `destination source length`, got {:?}", line))?;
    Ok(RangeMapping::new(destination_start, source_start, length))
}
