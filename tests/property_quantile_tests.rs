use box_series::core::{box_extent, box_quartiles};
use proptest::prelude::*;

proptest! {
    #[test]
    fn quartiles_are_monotonic(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..200)
    ) {
        let q = box_quartiles(&values).expect("non-empty");
        prop_assert!(q.q1 <= q.median);
        prop_assert!(q.median <= q.q3);
    }

    #[test]
    fn extent_matches_reference_min_max(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..200)
    ) {
        let extent = box_extent(&values).expect("non-empty");
        let reference_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let reference_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(extent.min, reference_min);
        prop_assert_eq!(extent.max, reference_max);
    }

    #[test]
    fn quartiles_stay_inside_extent(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..64)
    ) {
        let q = box_quartiles(&values).expect("non-empty");
        let extent = box_extent(&values).expect("non-empty");
        prop_assert!(extent.min <= q.q1);
        prop_assert!(q.q3 <= extent.max);
    }

    #[test]
    fn quartiles_ignore_input_order(
        mut values in prop::collection::vec(-1_000.0f64..1_000.0, 1..64)
    ) {
        let forward = box_quartiles(&values);
        values.reverse();
        prop_assert_eq!(forward, box_quartiles(&values));
    }
}
