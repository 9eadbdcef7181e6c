use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

const UNIVERSE: u64 = 8;

fn brute_force(transactions: &[Vec<u64>], min_support: u64) -> BTreeMap<Vec<u64>, u64> {
    let mut expected = BTreeMap::new();
    for mask in 1u32..(1 << UNIVERSE) {
        let itemset: Vec<u64> = (0..UNIVERSE).filter(|&bit| mask & (1 << bit) != 0).collect();
        let support = transactions
            .iter()
            .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
            .count() as u64;
        if support >= min_support && support > 0 {
            expected.insert(itemset, support);
        }
    }
    expected
}

fn database() -> impl Strategy<Value = Vec<Vec<u64>>> {
    prop::collection::vec(prop::collection::vec(0..UNIVERSE, 0..6), 0..14)
}

proptest! {
    #[test]
    fn mines_exactly_the_frequent_itemsets(transactions in database(), min_support in 1u64..5) {
        let db = Transactions::new(transactions);
        let found = mine(&db, MinSupport::Count(min_support)).unwrap();

        let mut mined = BTreeMap::new();
        for (itemset, support) in found.iter() {
            let previous = mined.insert(itemset.to_vec(), support);
            prop_assert!(previous.is_none(), "duplicate itemset {:?}", itemset);
        }
        let all: Vec<Vec<u64>> = db.iter().map(<[u64]>::to_vec).collect();
        prop_assert_eq!(mined, brute_force(&all, min_support));
    }

    #[test]
    fn supports_never_grow_with_the_itemset(transactions in database(), min_support in 1u64..4) {
        let db = Transactions::new(transactions);
        let found = mine(&db, MinSupport::Count(min_support)).unwrap();
        for (itemset, support) in found.iter() {
            for skip in 0..itemset.len() {
                let mut subset = itemset.to_vec();
                subset.remove(skip);
                if subset.is_empty() {
                    continue;
                }
                let subset_support = found.support_of(&subset);
                prop_assert!(subset_support.is_some_and(|s| s >= support));
            }
        }
    }

    #[test]
    fn output_is_reproducible_and_well_formed(transactions in database(), fraction in 0.05f64..=1.0) {
        let db = Transactions::new(transactions);
        let render = || {
            let mut out = Vec::new();
            run(&db, MinSupport::Fraction(fraction), MiningOptions::default(), ItemsetWriter::new(&mut out))
                .unwrap();
            String::from_utf8(out).unwrap()
        };
        let first = render();
        prop_assert_eq!(&first, &render());

        let num_transactions = db.len() as u64;
        for line in first.lines() {
            let (_, stats) = line.split_once("#SUP:").unwrap();
            let (support, pct) = stats.split_once(" %:").unwrap();
            let support: u64 = support.parse().unwrap();
            let pct: u64 = pct.parse().unwrap();
            prop_assert_eq!(pct, percentage(support, num_transactions));
        }
    }

    #[test]
    fn max_len_keeps_only_short_itemsets(transactions in database(), max_len in 1usize..4) {
        let db = Transactions::new(transactions);
        let full = mine(&db, MinSupport::Count(1)).unwrap();
        let capped = mine_with_options(&db, MinSupport::Count(1), MiningOptions::with_max_len(max_len)).unwrap();
        let expected = full.iter().filter(|(itemset, _)| itemset.len() <= max_len).count();
        prop_assert_eq!(capped.len(), expected);
        for (itemset, support) in capped.iter() {
            prop_assert_eq!(full.support_of(itemset), Some(support));
        }
    }
}
