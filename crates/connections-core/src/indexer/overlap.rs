//! Interval overlap policy for employment spans.

use crate::models::DayOrdinal;

/// A span of days with an optional end; `end == None` means ongoing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: DayOrdinal,
    pub end: Option<DayOrdinal>,
}

impl Span {
    pub fn new(start: DayOrdinal, end: Option<DayOrdinal>) -> Self {
        Self { start, end }
    }

    pub fn bounded(start: DayOrdinal, end: DayOrdinal) -> Self {
        Self::new(start, Some(end))
    }

    pub fn ongoing(start: DayOrdinal) -> Self {
        Self::new(start, None)
    }

    /// Length in days of a bounded span, `None` when ongoing.
    pub fn duration_days(&self) -> Option<i64> {
        self.end.map(|end| end - self.start)
    }
}

/// Whether two spans share at least `min_days` days.
///
/// The shared window starts at the later start and ends at the earlier bounded
/// end. Two ongoing spans always overlap. The boundary is inclusive: a window of
/// exactly `min_days` qualifies.
pub fn overlaps_at_least(a: Span, b: Span, min_days: i64) -> bool {
    let window_end = match (a.end, b.end) {
        (None, None) => return true,
        (Some(end), None) | (None, Some(end)) => end,
        (Some(a_end), Some(b_end)) => a_end.min(b_end),
    };
    let window_start = a.start.max(b.start);
    window_end - window_start >= min_days
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const START: i64 = 200;
    const END: i64 = 300;

    fn bounded_target() -> Span {
        Span::bounded(START, END)
    }

    fn ongoing_target() -> Span {
        Span::ongoing(START)
    }

    #[test]
    fn test_basic_overlap() {
        let a = Span::bounded(20230101, 20230201);
        let b = Span::bounded(20230115, 20230301);
        let c = Span::ongoing(20230115);
        assert!(overlaps_at_least(a, b, 15));
        assert!(overlaps_at_least(b, c, 15));
    }

    #[test]
    fn test_starts_early_vs_bounded() {
        let t = bounded_target();
        assert!(!overlaps_at_least(t, Span::bounded(1, 100), 90));
        assert!(!overlaps_at_least(t, Span::bounded(2, START), 90));
        assert!(!overlaps_at_least(t, Span::bounded(3, 250), 90));
        assert!(overlaps_at_least(t, Span::bounded(4, 290), 90));
        assert!(overlaps_at_least(t, Span::bounded(5, END), 90));
        assert!(overlaps_at_least(t, Span::bounded(6, 400), 90));
        assert!(overlaps_at_least(t, Span::ongoing(7), 90));
    }

    #[test]
    fn test_starts_early_vs_ongoing() {
        let t = ongoing_target();
        assert!(!overlaps_at_least(t, Span::bounded(1, 100), 90));
        assert!(!overlaps_at_least(t, Span::bounded(2, START), 90));
        assert!(!overlaps_at_least(t, Span::bounded(3, 250), 90));
        assert!(overlaps_at_least(t, Span::bounded(4, 290), 90));
        assert!(overlaps_at_least(t, Span::bounded(6, 400), 90));
        assert!(overlaps_at_least(t, Span::ongoing(7), 90));
    }

    #[test]
    fn test_same_start() {
        for t in [bounded_target(), ongoing_target()] {
            assert!(overlaps_at_least(t, Span::bounded(START, END), 90));
            assert!(overlaps_at_least(t, Span::bounded(START, 500), 90));
            assert!(overlaps_at_least(t, Span::ongoing(START), 90));
        }
    }

    #[test]
    fn test_starts_inside_bounded() {
        let t = bounded_target();
        assert!(!overlaps_at_least(t, Span::bounded(250, END), 90));
        assert!(!overlaps_at_least(t, Span::bounded(250, 500), 90));
        assert!(!overlaps_at_least(t, Span::ongoing(250), 90));
    }

    #[test]
    fn test_starts_inside_ongoing() {
        let t = ongoing_target();
        assert!(!overlaps_at_least(t, Span::bounded(250, END), 90));
        assert!(overlaps_at_least(t, Span::bounded(250, 500), 90));
        assert!(overlaps_at_least(t, Span::ongoing(250), 90));
    }

    #[test]
    fn test_starts_after_bounded_end() {
        let t = bounded_target();
        assert!(!overlaps_at_least(t, Span::bounded(400, 600), 90));
        assert!(!overlaps_at_least(t, Span::ongoing(400), 90));
        assert!(overlaps_at_least(ongoing_target(), Span::bounded(400, 600), 90));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert!(overlaps_at_least(Span::bounded(0, 90), Span::bounded(0, 90), 90));
        assert!(!overlaps_at_least(Span::bounded(0, 89), Span::bounded(0, 90), 90));
    }

    #[test]
    fn test_zero_length_never_qualifies() {
        let zero = Span::bounded(250, 250);
        assert!(!overlaps_at_least(zero, Span::ongoing(0), 1));
        assert!(!overlaps_at_least(zero, Span::bounded(0, 1000), 1));
        assert!(!overlaps_at_least(zero, zero, 1));
    }

    proptest! {
        #[test]
        fn test_symmetry(
            a_start in 0i64..5000,
            a_len in proptest::option::of(0i64..2000),
            b_start in 0i64..5000,
            b_len in proptest::option::of(0i64..2000),
            min_days in 1i64..400,
        ) {
            let a = Span::new(a_start, a_len.map(|len| a_start + len));
            let b = Span::new(b_start, b_len.map(|len| b_start + len));
            prop_assert_eq!(
                overlaps_at_least(a, b, min_days),
                overlaps_at_least(b, a, min_days)
            );
        }

        #[test]
        fn test_short_inner_span_never_qualifies(
            outer_start in 0i64..5000,
            min_days in 1i64..400,
            offset in 0i64..400,
            inner_len in 0i64..400,
        ) {
            prop_assume!(inner_len < min_days);
            let inner_start = outer_start + min_days + offset;
            let inner = Span::bounded(inner_start, inner_start + inner_len);
            let outer = Span::bounded(outer_start, inner_start + inner_len + min_days);
            prop_assert!(!overlaps_at_least(outer, inner, min_days));
            prop_assert!(!overlaps_at_least(Span::ongoing(outer_start), inner, min_days));
        }

        #[test]
        fn test_two_ongoing_always_overlap(
            a_start in 0i64..100_000,
            b_start in 0i64..100_000,
            min_days in 1i64..100_000,
        ) {
            prop_assert!(overlaps_at_least(
                Span::ongoing(a_start),
                Span::ongoing(b_start),
                min_days
            ));
        }
    }
}
