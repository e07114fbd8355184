// tests/segment_properties.rs
//
// Свойства сегментации на случайных профилях (proptest).

use plategraph::prelude::*;
use proptest::prelude::*;

fn samples() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(0.0f32..100.0, 2..64)
}

fn thresholds(rel: f64, foot: f64) -> Thresholds {
    Thresholds { rel_min_peak_size: rel, peak_foot_constant: foot }
}

proptest! {
    #[test]
    fn zero_count_yields_no_regions(
        s in samples(),
        rel in 0.0f64..1.0,
        foot in 0.0f64..1.0,
        height in 1usize..64,
    ) {
        let mut p = Profile::new(s);
        prop_assert!(segment(&mut p, 0, height, rel, foot).unwrap().is_empty());
    }

    #[test]
    fn regions_are_ordered_and_disjoint(
        s in samples(),
        count in 0i32..30,
        rel in 0.0f64..1.0,
        foot in 0.0f64..1.0,
        height in 1usize..64,
    ) {
        let n = s.len();
        let mut p = Profile::new(s);
        let chars = segment(&mut p, count, height, rel, foot).unwrap();
        for r in &chars {
            prop_assert!(r.left() <= r.right() && r.right() < n);
        }
        for w in chars.windows(2) {
            prop_assert!(w[0].left() < w[1].left());
            // соседние символы делят только общую границу
            prop_assert!(w[0].right() <= w[1].left());
        }
    }

    #[test]
    fn raising_peak_threshold_never_adds_gaps(
        s in samples(),
        count in 0i32..30,
        rel_a in 0.0f64..1.2,
        rel_b in 0.0f64..1.2,
        foot in 0.0f64..1.0,
        height in 1usize..64,
    ) {
        let (lo, hi) = if rel_a <= rel_b { (rel_a, rel_b) } else { (rel_b, rel_a) };
        let gaps_lo = find_gaps(&mut Profile::new(s.clone()), count, height, &thresholds(lo, foot)).unwrap();
        let gaps_hi = find_gaps(&mut Profile::new(s), count, height, &thresholds(hi, foot)).unwrap();
        prop_assert!(gaps_hi.len() <= gaps_lo.len());
    }

    #[test]
    fn characters_chain_across_whole_profile(
        s in samples(),
        count in 1i32..30,
        rel in 0.0f64..1.0,
        foot in 0.0f64..1.0,
        height in 1usize..64,
    ) {
        let n = s.len();
        let mut p = Profile::new(s);
        let gaps = find_gaps(&mut p, count, height, &thresholds(rel, foot)).unwrap();
        let chars = characters_from_gaps(&gaps, n);
        if gaps.is_empty() {
            prop_assert!(chars.is_empty());
        } else {
            prop_assert_eq!(chars.first().map(Region::left), Some(0));
            prop_assert_eq!(chars.last().map(Region::right), Some(n - 1));
            for w in chars.windows(2) {
                prop_assert_eq!(w[0].right(), w[1].left());
            }
            // каждая граница символа: вершина промежутка (кроме краёв профиля)
            for r in &chars {
                prop_assert!(r.left() == 0 || gaps.iter().any(|g| g.apex() == r.left()));
                prop_assert!(r.right() == n - 1 || gaps.iter().any(|g| g.apex() == r.right()));
            }
        }
    }

    #[test]
    fn unreachable_threshold_yields_nothing(
        s in samples().prop_filter("non-constant", |v| v.iter().any(|&x| x != v[0])),
        count in 1i32..30,
        rel in 1.01f64..3.0,
        foot in 0.0f64..1.0,
    ) {
        let mut p = Profile::new(s);
        let chars = segment(&mut p, count, usize::MAX, rel, foot).unwrap();
        prop_assert!(chars.is_empty());
        prop_assert!(p.peaks().is_empty());
    }

    #[test]
    fn flat_topped_peak_is_kept_only_below_plate_height(
        pre in 1usize..10,
        top in 1usize..10,
        post in 1usize..10,
        base in 0.0f32..10.0,
        rise in 1.0f32..50.0,
    ) {
        let mut s = vec![base; pre];
        s.extend(std::iter::repeat(base + rise).take(top));
        s.extend(std::iter::repeat(base).take(post));
        let t = thresholds(0.5, 0.5);
        // подошвы на ближайших фоновых отсчётах, ширина top + 1
        let width = top + 1;

        let gaps = find_gaps(&mut Profile::new(s.clone()), 1, width, &t).unwrap();
        prop_assert!(gaps.is_empty());

        let gaps = find_gaps(&mut Profile::new(s), 1, width + 1, &t).unwrap();
        prop_assert_eq!(gaps, vec![Region::peak(pre - 1, pre, pre + top)]);
    }
}

#[test]
fn negative_count_is_invalid_for_any_profile() {
    let mut p = Profile::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(
        segment(&mut p, -5, 10, 0.5, 0.5),
        Err(SegmentError::InvalidArgument { count: -5 })
    );
}
