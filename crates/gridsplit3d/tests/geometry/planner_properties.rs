use gridsplit3d::math::Real;
use gridsplit3d::split::{extents, plan_axis};
use proptest::prelude::*;

proptest! {
    #[test]
    fn max_size_gives_the_fewest_parts(size in 0.0..10_000.0 as Real, max in 1.0..1_000.0 as Real) {
        let n = plan_axis(size, None, Some(max)).unwrap();

        prop_assert!(n >= 1);
        prop_assert!(n as Real * max >= size);
        prop_assert!(n == 1 || (n - 1) as Real * max < size);
    }

    #[test]
    fn explicit_count_is_kept(size in 0.0..10_000.0 as Real, splits in 1u32..1_000, max in -10.0..1_000.0 as Real) {
        prop_assert_eq!(plan_axis(size, Some(splits), Some(max)).unwrap(), splits);
    }

    #[test]
    fn extents_are_evenly_spaced(min in -1_000.0..1_000.0 as Real, len in 0.0..1_000.0 as Real, splits in 1u32..50) {
        let max = min + len;
        let xs = extents(min, max, splits);

        prop_assert_eq!(xs.len(), splits as usize + 1);
        prop_assert_eq!(xs[0], min);
        prop_assert_eq!(xs[splits as usize], max);

        let step = len / splits as Real;
        for w in xs.windows(2) {
            prop_assert!(w[0] <= w[1]);
            prop_assert!((w[1] - w[0] - step).abs() <= 1.0e-9);
        }
    }
}
