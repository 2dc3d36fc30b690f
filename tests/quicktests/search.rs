use bst_search::search::{binary_search, binary_search_traced, index_of};

const SORTED: [i32; 10] = [3, 5, 6, 8, 11, 12, 14, 15, 17, 18];

quickcheck::quickcheck! {
    fn finds_what_linear_search_finds(xs: Vec<i8>, target: i8) -> bool {
        let mut xs = xs;
        xs.sort_unstable();

        binary_search(&xs, &target).is_some() == index_of(&xs, &target).is_some()
    }
}

quickcheck::quickcheck! {
    fn traced_agrees_with_untraced(xs: Vec<i8>, target: i8) -> bool {
        let mut xs = xs;
        xs.sort_unstable();

        let trace = binary_search_traced(&xs, &target);
        trace.index() == binary_search(&xs, &target)
            && trace.probes().iter().all(|&i| i < xs.len())
            && trace.index().map_or(true, |i| trace.probes().last() == Some(&i))
    }
}

#[test]
fn probes_for_a_hit() {
    let trace = binary_search_traced(&SORTED, &8);
    let probed: Vec<_> = trace.probes().iter().map(|&i| SORTED[i]).collect();

    assert_eq!(trace.index(), Some(3));
    assert_eq!(probed, [11, 5, 6, 8]);
}

#[test]
fn probes_for_a_miss() {
    let trace = binary_search_traced(&SORTED, &16);
    let probed: Vec<_> = trace.probes().iter().map(|&i| SORTED[i]).collect();

    assert_eq!(trace.index(), None);
    assert_eq!(probed, [11, 15, 17]);
}
