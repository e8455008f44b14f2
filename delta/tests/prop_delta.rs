use delta::DeltaList;
use proptest::prelude::*;
use store::{ErrorKind, Position};

const CAPACITY: Position = 32;

proptest! {
    #[test]
    fn prop_ascending_inserts_roundtrip(
        magnitudes in prop::collection::btree_set(1i16..=i16::MAX, 1..32)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
    ) {
        let mut slots = [0i16; CAPACITY as usize];
        let mut list = DeltaList::from_buffer(&mut slots, CAPACITY).unwrap();
        for value in &magnitudes {
            list.insert(*value).unwrap();
        }
        prop_assert_eq!(list.magnitudes().collect::<Vec<_>>(), magnitudes);
        prop_assert!(list.deltas().iter().all(|gap| *gap > 0));
    }

    #[test]
    fn prop_any_order_stays_sorted(
        values in prop::collection::vec(1i16..=1000, 1..48)
    ) {
        let mut slots = [0i16; CAPACITY as usize];
        let mut list = DeltaList::from_buffer(&mut slots, CAPACITY).unwrap();
        let mut model: Vec<i16> = Vec::new();
        for value in &values {
            let before: Vec<i16> = list.deltas().to_vec();
            match list.insert(*value) {
                Ok(position) => {
                    model.push(*value);
                    model.sort_unstable();
                    prop_assert_eq!(list.magnitude_at(position), Some(*value));
                }
                Err(err) => {
                    prop_assert_eq!(err.kind(), ErrorKind::Range);
                    prop_assert_eq!(list.deltas(), before.as_slice());
                }
            }
            prop_assert_eq!(list.magnitudes().collect::<Vec<_>>(), model.clone());
            if let Some(head) = list.deltas().first() {
                prop_assert!(*head >= 1);
            }
            prop_assert!(list.deltas().iter().all(|gap| *gap >= 0));
        }
    }

    #[test]
    fn prop_non_positive_rejected(value in i16::MIN..=0) {
        let mut slots = [0i16; 4];
        let mut list = DeltaList::from_buffer(&mut slots, 4).unwrap();
        list.insert(5).unwrap();
        prop_assert_eq!(list.insert(value).unwrap_err().kind(), ErrorKind::Domain);
        prop_assert_eq!(list.deltas(), &[5][..]);
    }

    #[test]
    fn prop_advance_matches_model(
        values in prop::collection::vec(1i16..=500, 0..24),
        elapsed in 0i16..=600,
    ) {
        let mut slots = [0i16; CAPACITY as usize];
        let mut list = DeltaList::from_buffer(&mut slots, CAPACITY).unwrap();
        for value in &values {
            list.insert(*value).unwrap();
        }
        let expired = list.advance(elapsed).unwrap();
        let survivors: Vec<i16> = {
            let mut sorted = values.clone();
            sorted.sort_unstable();
            sorted.into_iter().filter(|m| *m > elapsed).map(|m| m - elapsed).collect()
        };
        prop_assert_eq!(usize::from(expired), values.len() - survivors.len());
        prop_assert_eq!(list.magnitudes().collect::<Vec<_>>(), survivors);
    }
}
