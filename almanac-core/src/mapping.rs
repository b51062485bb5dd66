//! A single range-translation rule.

use crate::interval::{Interval, intersect, subtract};

/// One translation rule: moves any value in
/// `[source_start, source_start + length)` to
/// `destination_start + (value - source_start)`.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeMapping {
    destination_start: u64,
    source_start: u64,
    length: u64,
}

impl RangeMapping {
    pub const fn new(destination_start: u64, source_start: u64, length: u64) -> Self {
        Self {
            destination_start,
            source_start,
            length,
        }
    }

    /// The span of source values this rule covers.
    pub const fn source(&self) -> Interval {
        Interval::new(self.source_start, self.length)
    }

    /// Translate `value`, or `None` when it falls outside the source span.
    ///
    /// A destination of zero is a real translation, not a miss; callers
    /// branch on the `Option`, never on the translated value itself.
    pub fn translate(&self, value: u64) -> Option<u64> {
        self.source()
            .contains(value)
            .then(|| self.destination_start + (value - self.source_start))
    }

    /// Project `interval` through this rule.
    ///
    /// Returns the translated overlap (if any) together with the zero, one,
    /// or two pieces of `interval` this rule did not touch.
    pub fn project(&self, interval: Interval) -> (Option<Interval>, Vec<Interval>) {
        match intersect(interval, self.source()) {
            None => (None, vec![interval]),
            Some(hit) => {
                let translated = Interval::new(
                    self.destination_start + (hit.start() - self.source_start),
                    hit.length(),
                );
                (Some(translated), subtract(interval, hit))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_inside_source() {
        let rule = RangeMapping::new(52, 50, 48);
        assert_eq!(rule.translate(50), Some(52));
        assert_eq!(rule.translate(79), Some(81));
        assert_eq!(rule.translate(97), Some(99));
    }

    #[test]
    fn translate_outside_source() {
        let rule = RangeMapping::new(50, 98, 2);
        assert_eq!(rule.translate(97), None);
        assert_eq!(rule.translate(100), None);
    }

    #[test]
    fn translate_to_zero_is_a_hit() {
        // A rule landing on destination 0 must not read as "no match".
        let rule = RangeMapping::new(0, 69, 1);
        assert_eq!(rule.translate(69), Some(0));
        assert_eq!(rule.translate(70), None);
    }

    #[test]
    fn project_disjoint_passes_interval_through() {
        let rule = RangeMapping::new(100, 50, 10);
        let span = Interval::new(0, 20);
        assert_eq!(rule.project(span), (None, vec![span]));
    }

    #[test]
    fn project_full_cover_translates_everything() {
        let rule = RangeMapping::new(52, 50, 48);
        let (hit, leftover) = rule.project(Interval::new(79, 14));
        assert_eq!(hit, Some(Interval::new(81, 14)));
        assert!(leftover.is_empty());
    }

    #[test]
    fn project_internal_hit_splits_leftovers() {
        let rule = RangeMapping::new(200, 10, 5);
        let (hit, leftover) = rule.project(Interval::new(0, 30));
        assert_eq!(hit, Some(Interval::new(200, 5)));
        assert_eq!(leftover, vec![Interval::new(0, 10), Interval::new(15, 15)]);
    }

    #[test]
    fn project_edge_hit_leaves_one_piece() {
        let rule = RangeMapping::new(200, 0, 10);
        let (hit, leftover) = rule.project(Interval::new(5, 10));
        assert_eq!(hit, Some(Interval::new(205, 5)));
        assert_eq!(leftover, vec![Interval::new(10, 5)]);
    }
}
