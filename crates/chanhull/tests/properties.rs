//! Property tests over small integer grids, where duplicates and collinear
//! runs are frequent, and over wide grids for general position.

use chanhull::orient::anchor;
use chanhull::prelude::*;
use proptest::prelude::*;

fn grid_points(max: i32, len: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0..=max, 0..=max), 0..len).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| (f64::from(x), f64::from(y)))
            .collect()
    })
}

fn any_grid() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop_oneof![
        grid_points(3, 20),
        grid_points(10, 60),
        grid_points(30_000, 200),
    ]
}

fn shuffled_pair() -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<(f64, f64)>)> {
    any_grid().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fast_matches_baseline(coords in any_grid()) {
        let input = PointSet::from_xy(coords).unwrap();
        let fast = compute_hull_fast(&input).unwrap();
        prop_assert_eq!(fast, compute_hull_baseline(&input));
    }

    #[test]
    fn hull_is_convex_and_encloses_the_input(coords in any_grid()) {
        let input = PointSet::from_xy(coords).unwrap();
        let hull = compute_hull_fast(&input).unwrap();
        prop_assert!(hull.is_convex());
        prop_assert!(hull.len() <= input.len());
        for p in input.iter() {
            prop_assert!(hull.contains(p), "{:?} outside {:?}", p, hull);
        }
        for v in hull.vertices() {
            prop_assert!(input.iter().any(|p| p == v));
        }
    }

    #[test]
    fn hull_starts_at_the_anchor(coords in any_grid()) {
        let input = PointSet::from_xy(coords).unwrap();
        let hull = compute_hull_fast(&input).unwrap();
        prop_assert_eq!(hull.first().copied(), anchor(input.as_slice()));
    }

    #[test]
    fn input_order_does_not_matter((coords, shuffled) in shuffled_pair()) {
        let a = compute_hull_fast(&PointSet::from_xy(coords).unwrap()).unwrap();
        let b = compute_hull_fast(&PointSet::from_xy(shuffled).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn hull_of_the_hull_is_itself(coords in any_grid()) {
        let input = PointSet::from_xy(coords).unwrap();
        let hull = compute_hull_fast(&input).unwrap();
        let again = PointSet::new(hull.vertices().to_vec()).unwrap();
        prop_assert_eq!(compute_hull_fast(&again).unwrap(), hull);
    }
}
