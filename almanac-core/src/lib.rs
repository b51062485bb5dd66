//! Interval Remapping Pipeline
//!
//! A small library for threading integers and integer ranges through ordered
//! layers of range-translation rules. Each layer (a [`Stage`]) holds rules
//! ([`RangeMapping`]) that move a span of source values onto a span of
//! destination values; anything no rule covers passes through unchanged.
//! A [`Pipeline`] chains stages so the output of one feeds the next.
//!
//! # Overview
//!
//! This library provides:
//! - [`Interval`], a half-open `u64` span, plus the [`intersect`] and
//!   [`subtract`] set arithmetic the remapper is built on
//! - Scalar lookup with identity fallback ([`Stage::map_value`],
//!   [`Pipeline::resolve`])
//! - Interval lookup that splits an input range into translated and
//!   untouched pieces ([`Stage::map_interval`], [`Pipeline::resolve_range`])
//!
//! # Quick Example
//!
//! ```
//! use almanac_core::{Interval, Pipeline, RangeMapping, Stage};
//!
//! let stage = Stage::new(vec![
//!     RangeMapping::new(50, 98, 2),
//!     RangeMapping::new(52, 50, 48),
//! ]);
//! let pipeline = Pipeline::new(vec![stage]);
//!
//! // 79 falls in [50, 98), so it moves to 52 + (79 - 50) = 81.
//! assert_eq!(pipeline.resolve(79), 81);
//!
//! // The whole range [79, 93) is covered by the same rule.
//! let outputs = pipeline.resolve_range(Interval::new(79, 14));
//! assert_eq!(outputs, vec![Interval::new(81, 14)]);
//! ```
//!
//! # Key Concepts
//!
//! Everything here is constructed once and then queried read-only; there are
//! no error paths, no I/O, and no shared mutable state. Queries are
//! independent pure computations, so callers may fan them out across threads
//! freely — the library itself stays single-threaded.

mod interval;
mod mapping;
mod pipeline;
mod stage;

pub use interval::{Interval, intersect, subtract};
pub use mapping::RangeMapping;
pub use pipeline::Pipeline;
pub use stage::{Mapped, Stage};
