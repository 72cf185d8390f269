//! Property-based tests for the color list.
//! Verifies the change reporting contract for arbitrary sequences.

use flowgrid::{ChangeKind, ColorList, Swatch};
use proptest::prelude::*;

fn swatch() -> impl Strategy<Value = Swatch> {
    (0..Swatch::ALL.len()).prop_map(|index| Swatch::ALL[index])
}

proptest! {
    /// Appending reports exactly the new tail positions, in order.
    #[test]
    fn append_reports_contiguous_tail(
        initial in prop::collection::vec(swatch(), 0..20),
        batch in prop::collection::vec(swatch(), 0..20),
    ) {
        let start = initial.len();
        let mut list = ColorList::from(initial);
        let change = list.append_all(batch.clone());
        prop_assert_eq!(change.kind(), ChangeKind::Inserted);
        prop_assert_eq!(change.positions().to_vec(), (start..start + batch.len()).collect::<Vec<_>>());
        prop_assert_eq!(&list.as_slice()[start..], batch.as_slice());
    }

    /// Removal reports strictly descending positions that all held the target.
    #[test]
    fn removal_positions_descend_and_match(
        colors in prop::collection::vec(swatch(), 0..40),
        target in swatch(),
    ) {
        let before = colors.clone();
        let mut list = ColorList::from(colors);
        let change = list.remove_all_matching(&target);

        prop_assert!(change.positions().windows(2).all(|pair| pair[0] > pair[1]));
        for &position in change.positions() {
            prop_assert_eq!(before[position], target);
        }
        let expected: Vec<Swatch> = before.iter().copied().filter(|c| *c != target).collect();
        prop_assert_eq!(list.as_slice(), expected.as_slice());
        prop_assert_eq!(change.len(), before.len() - expected.len());
    }

    /// Replaying a removal onto a parallel copy keeps it in sync with the list.
    #[test]
    fn removal_replays_onto_parallel_copy(
        colors in prop::collection::vec(swatch(), 0..40),
        target in swatch(),
    ) {
        let mut mirror = colors.clone();
        let mut list = ColorList::from(colors);
        prop_assert!(list.remove_all_matching(&target).apply_removals(&mut mirror).is_ok());
        prop_assert_eq!(list.as_slice(), mirror.as_slice());
    }

    /// Removing every distinct appended value empties the list.
    #[test]
    fn removing_each_distinct_value_empties(values in prop::collection::vec(swatch(), 0..30)) {
        let mut list = ColorList::new();
        list.append_all(values.clone());
        for value in &values {
            list.remove_all_matching(value);
        }
        prop_assert!(list.is_empty());
    }

    /// Indexed reads succeed exactly inside the bounds.
    #[test]
    fn get_is_bounded_by_count(colors in prop::collection::vec(swatch(), 0..20), extra in 0usize..5) {
        let list = ColorList::from(colors);
        let count = list.count();
        if count > 0 {
            prop_assert!(list.get(count - 1).is_ok());
        }
        prop_assert!(list.get(count + extra).is_err());
    }
}
