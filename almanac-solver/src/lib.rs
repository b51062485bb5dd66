//! Almanac Puzzle Layer
//!
//! Parsing and part queries for the seed-to-location almanac, built on the
//! remapping pipeline from [`almanac_core`].
//!
//! # Overview
//!
//! This crate provides:
//! - The almanac text parser with line-numbered errors
//! - The [`Almanac`] model: the seed list plus the stage pipeline, with the
//!   two part queries (minimum location over seeds, minimum location over
//!   whole seed ranges)
//! - [`AlmanacInstance`], which records parse and solve timing for callers
//!   that report durations
//!
//! # Quick Example
//!
//! ```
//! use almanac_solver::Almanac;
//!
//! let input = "\
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ";
//! let almanac = Almanac::parse(input)?;
//! assert_eq!(almanac.solve_part(1)?, "13");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod almanac;
mod error;
mod instance;

// Re-export public API
pub use almanac::Almanac;
pub use error::{ParseError, SolveError};
pub use instance::{AlmanacInstance, SolveReport};
