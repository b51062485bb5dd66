//! Ordered composition of translation stages.

use crate::interval::Interval;
use crate::stage::Stage;

/// The full chain of stages a value or interval is threaded through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Thread a scalar through every stage in order.
    ///
    /// Always terminates in O(stages × rules-per-stage); there are no error
    /// conditions.
    pub fn resolve(&self, value: u64) -> u64 {
        self.stages
            .iter()
            .fold(value, |current, stage| stage.map_value(current))
    }

    /// Thread an interval through every stage in order.
    ///
    /// Pieces a stage leaves uncovered pass to the next stage unchanged
    /// (identity fallback). The result is the final working list of disjoint
    /// output sub-ranges; callers reduce it further, typically to the
    /// minimum start.
    pub fn resolve_range(&self, interval: Interval) -> Vec<Interval> {
        let mut working = vec![interval];
        for stage in &self.stages {
            working = working
                .into_iter()
                .flat_map(|piece| {
                    let mut mapped = stage.map_interval(piece);
                    mapped.covered.append(&mut mapped.uncovered);
                    mapped.covered
                })
                .collect();
        }
        working
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::RangeMapping;

    fn seed_to_soil() -> Stage {
        Stage::new(vec![
            RangeMapping::new(50, 98, 2),
            RangeMapping::new(52, 50, 48),
        ])
    }

    fn soil_to_fertilizer() -> Stage {
        Stage::new(vec![
            RangeMapping::new(0, 15, 37),
            RangeMapping::new(37, 52, 2),
            RangeMapping::new(39, 0, 15),
        ])
    }

    #[test]
    fn resolve_composes_stage_lookups() {
        let first = seed_to_soil();
        let second = soil_to_fertilizer();
        let by_hand = second.map_value(first.map_value(79));

        let pipeline = Pipeline::new(vec![first, second]);
        assert_eq!(pipeline.resolve(79), by_hand);
        assert_eq!(pipeline.resolve(79), 81);
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = Pipeline::default();
        assert_eq!(pipeline.resolve(123), 123);
        assert_eq!(
            pipeline.resolve_range(Interval::new(5, 7)),
            vec![Interval::new(5, 7)]
        );
    }

    #[test]
    fn resolve_range_single_stage_covered() {
        let pipeline = Pipeline::new(vec![seed_to_soil()]);
        assert_eq!(
            pipeline.resolve_range(Interval::new(79, 14)),
            vec![Interval::new(81, 14)]
        );
    }

    #[test]
    fn resolve_range_threads_uncovered_pieces_forward() {
        // Stage one only touches [10, 20); stage two only touches [0, 5).
        // The piece below 5 must still get translated by stage two even
        // though stage one never saw it.
        let pipeline = Pipeline::new(vec![
            Stage::new(vec![RangeMapping::new(100, 10, 10)]),
            Stage::new(vec![RangeMapping::new(200, 0, 5)]),
        ]);
        let outputs = pipeline.resolve_range(Interval::new(0, 15));
        assert!(outputs.contains(&Interval::new(100, 5))); // 10..15 via stage one
        assert!(outputs.contains(&Interval::new(200, 5))); // 0..5 via stage two
        assert!(outputs.contains(&Interval::new(5, 5))); // untouched by both
        assert_eq!(outputs.len(), 3);
    }

    #[test]
    fn resolve_matches_resolve_range_for_members() {
        let pipeline = Pipeline::new(vec![seed_to_soil(), soil_to_fertilizer()]);
        let span = Interval::new(45, 20);
        let outputs = pipeline.resolve_range(span);
        for value in span.start()..span.end() {
            let resolved = pipeline.resolve(value);
            assert!(
                outputs.iter().any(|out| out.contains(resolved)),
                "{value} resolved to {resolved}, outside every output piece"
            );
        }
    }
}
