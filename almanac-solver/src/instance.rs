//! A parsed almanac bundled with parse and solve timing.

use crate::almanac::Almanac;
use crate::error::{ParseError, SolveError};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Which part was solved
    pub part: u8,
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveReport {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// An [`Almanac`] with parse timestamps recorded at construction.
///
/// `solve` stamps each part the same way, so a caller can report parse and
/// solve time separately.
pub struct AlmanacInstance {
    almanac: Almanac,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl AlmanacInstance {
    /// Parse `input` into an instance, recording parse timing internally.
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let almanac = Almanac::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            almanac,
            parse_start,
            parse_end,
        })
    }

    pub fn almanac(&self) -> &Almanac {
        &self.almanac
    }

    pub fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    pub fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    /// Convenience: parse duration as TimeDelta
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }

    /// Solve the specified part with timing.
    pub fn solve(&self, part: u8) -> Result<SolveReport, SolveError> {
        let solve_start = Utc::now();
        let answer = self.almanac.solve_part(part)?;
        let solve_end = Utc::now();

        Ok(SolveReport {
            part,
            answer,
            solve_start,
            solve_end,
        })
    }
}
