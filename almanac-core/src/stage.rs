//! One translation layer of the pipeline.

use crate::interval::Interval;
use crate::mapping::RangeMapping;

/// An ordered collection of rules whose source spans are expected to be
/// disjoint.
///
/// Rule order is preserved as given; nothing here assumes the rules are
/// sorted. On a lookup the first rule containing the value wins, which makes
/// the behavior well defined even if the disjointness expectation is broken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stage {
    mappings: Vec<RangeMapping>,
}

/// What one [`Stage`] did to one interval.
///
/// `covered` holds translated pieces. `uncovered` holds the untouched pieces
/// *untranslated*: this function does not decide that identity applies to
/// them — the caller folds them back in unchanged, mirroring the scalar
/// fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapped {
    pub covered: Vec<Interval>,
    pub uncovered: Vec<Interval>,
}

impl Stage {
    pub fn new(mappings: Vec<RangeMapping>) -> Self {
        Self { mappings }
    }

    pub fn mappings(&self) -> &[RangeMapping] {
        &self.mappings
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Scalar lookup: first matching rule wins, identity when none matches.
    pub fn map_value(&self, value: u64) -> u64 {
        self.mappings
            .iter()
            .find_map(|mapping| mapping.translate(value))
            .unwrap_or(value)
    }

    /// Interval lookup.
    ///
    /// Each rule in turn intersects the still-uncovered worklist; hits become
    /// translated `covered` output and the leftovers keep circulating.
    /// Whatever survives every rule comes back `uncovered`.
    pub fn map_interval(&self, interval: Interval) -> Mapped {
        let mut covered = Vec::new();
        let mut uncovered = vec![interval];
        for mapping in &self.mappings {
            let mut remaining = Vec::new();
            for piece in uncovered {
                let (hit, leftover) = mapping.project(piece);
                covered.extend(hit);
                remaining.extend(leftover);
            }
            uncovered = remaining;
        }
        Mapped { covered, uncovered }
    }
}
