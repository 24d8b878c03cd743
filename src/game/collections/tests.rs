//! Tests for RankedList

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::super::*;

    /// Rank plus an insertion tag so ties can be told apart.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Entry {
        rank: f32,
        tag: u32,
    }

    impl Entry {
        fn new(rank: f32, tag: u32) -> Self {
            Self { rank, tag }
        }
    }

    impl Ranked for Entry {
        fn rank_cmp(&self, other: &Self) -> Ordering {
            self.rank.total_cmp(&other.rank)
        }
    }

    fn ranks(list: &RankedList<Entry>) -> Vec<f32> {
        list.iter().map(|e| e.rank).collect()
    }

    fn tags(list: &RankedList<Entry>) -> Vec<u32> {
        list.iter().map(|e| e.tag).collect()
    }

    fn list_of(ranks: &[f32]) -> RankedList<Entry> {
        let mut list = RankedList::new();
        for (tag, rank) in ranks.iter().enumerate() {
            list.add(Entry::new(*rank, tag as u32));
        }
        list
    }

    #[test]
    fn test_add_to_empty_list() {
        let mut list = RankedList::new();
        assert!(list.is_empty());

        let index = list.add(Entry::new(3.0, 0));

        assert_eq!(index, 0);
        assert_eq!(list.count(), 1);
        assert_eq!(list.get(0).unwrap().rank, 3.0);
    }

    #[test]
    fn test_add_is_stable_for_equal_ranks() {
        let list = list_of(&[5.0, 3.0, 3.0, 1.0]);

        assert_eq!(ranks(&list), vec![1.0, 3.0, 3.0, 5.0]);
        // The first rank-3 entry added (tag 1) stays ahead of the second (tag 2)
        assert_eq!(tags(&list), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_add_returns_insertion_index() {
        let mut list = list_of(&[1.0, 4.0]);

        assert_eq!(list.add(Entry::new(2.0, 10)), 1);
        assert_eq!(list.add(Entry::new(9.0, 11)), 3);
        assert_eq!(list.add(Entry::new(0.5, 12)), 0);
        assert_eq!(ranks(&list), vec![0.5, 1.0, 2.0, 4.0, 9.0]);
    }

    #[test]
    fn test_sorted_after_every_add() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut list = RankedList::new();

        for tag in 0..500 {
            // Coarse values so plenty of ties are exercised
            let rank = rng.u32(0..40) as f32 * 0.5;
            list.add(Entry::new(rank, tag));
            assert!(list.is_sorted(), "list unsorted after adding tag {}", tag);
        }
        assert_eq!(list.count(), 500);

        // Stability: among equal ranks, tags must be increasing
        for pair in list.iter().collect::<Vec<_>>().windows(2) {
            if pair[0].rank == pair[1].rank {
                assert!(pair[0].tag < pair[1].tag);
            }
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let list = list_of(&[1.0, 2.0]);

        assert_eq!(
            list.get(2).unwrap_err(),
            CollectionError::OutOfRange { index: 2, count: 2 }
        );
        assert!(RankedList::<Entry>::new().get(0).is_err());
    }

    #[test]
    fn test_remove_at_keeps_survivor_order() {
        let mut list = list_of(&[1.0, 2.0, 2.0, 3.0, 8.0]);
        let before = tags(&list);

        let removed = list.remove_at(2).unwrap();

        assert_eq!(removed.tag, before[2]);
        assert_eq!(list.count(), 4);
        let mut expected = before.clone();
        expected.remove(2);
        assert_eq!(tags(&list), expected);
        assert!(list.is_sorted());
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut list = list_of(&[1.0]);

        assert_eq!(
            list.remove_at(1).unwrap_err(),
            CollectionError::OutOfRange { index: 1, count: 1 }
        );
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn test_index_of_tail_short_circuit() {
        let list = list_of(&[1.0, 2.0, 4.0, 4.0]);

        // Both rank-4 entries match; the tail wins without searching
        assert_eq!(list.index_of(&Entry::new(4.0, 99)), Some(3));
    }

    #[test]
    fn test_index_of_binary_search() {
        let list = list_of(&[1.0, 2.0, 4.0, 4.0]);

        assert_eq!(list.index_of(&Entry::new(2.0, 99)), Some(1));
        assert_eq!(list.index_of(&Entry::new(1.0, 99)), Some(0));
    }

    #[test]
    fn test_index_of_not_found() {
        let list = list_of(&[1.0, 2.0, 4.0, 4.0]);

        assert_eq!(list.index_of(&Entry::new(3.0, 99)), None);
        assert_eq!(list.index_of(&Entry::new(0.0, 99)), None);
        assert_eq!(list.index_of(&Entry::new(10.0, 99)), None);
        assert_eq!(RankedList::<Entry>::new().index_of(&Entry::new(1.0, 0)), None);
    }

    #[test]
    fn test_index_of_duplicate_rank_may_hit_other_entry() {
        // Documented caveat: lookup is by rank, so a twin can be returned
        let list = list_of(&[2.0, 2.0, 2.0, 7.0]);
        let wanted = *list.get(0).unwrap();

        let found = list.index_of(&wanted).unwrap();

        assert_eq!(list.get(found).unwrap().rank, wanted.rank);
        assert_eq!(list.position(|e| e.tag == wanted.tag), Some(0));
    }

    #[test]
    fn test_sort_after_rank_mutation() {
        let mut list = list_of(&[1.0, 2.0, 3.0, 4.0]);

        for entry in list.iter_mut() {
            entry.rank = 10.0 - entry.rank;
        }
        assert!(!list.is_sorted());

        list.sort();

        assert!(list.is_sorted());
        assert_eq!(ranks(&list), vec![6.0, 7.0, 8.0, 9.0]);
        assert_eq!(tags(&list), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_retain_preserves_order() {
        let mut list = list_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        list.retain(|e| e.tag % 2 == 0);

        assert_eq!(ranks(&list), vec![1.0, 3.0, 5.0]);
        assert_eq!(list.last().unwrap().rank, 5.0);
    }
}
