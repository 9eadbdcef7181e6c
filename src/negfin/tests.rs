use super::*;
use ndarray::Array2;
use temp_dir::TempDir;

fn mine_text(text: &str, min_support: MinSupport) -> String {
    let db = Transactions::parse(text).unwrap();
    let mut out = Vec::new();
    run(&db, min_support, MiningOptions::default(), ItemsetWriter::new(&mut out)).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_four_transaction_scenario() {
    let db = Transactions::parse("1 2 3\n1 2\n1 3\n2 3\n").unwrap();
    let found = mine(&db, MinSupport::Fraction(0.5)).unwrap();

    assert_eq!(found.len(), 6);
    for single in [1, 2, 3] {
        assert_eq!(found.support_of(&[single]), Some(3));
    }
    for pair in [[1, 2], [1, 3], [2, 3]] {
        assert_eq!(found.support_of(&pair), Some(2));
    }
    assert_eq!(found.support_of(&[1, 2, 3]), None);
}

#[test]
fn test_four_transaction_output_lines() {
    let text = mine_text("1 2 3\n1 2\n1 3\n2 3\n", MinSupport::Fraction(0.5));
    assert_eq!(
        text,
        "3 #SUP:3 %:75\n\
         3 2 #SUP:2 %:50\n\
         3 1 #SUP:2 %:50\n\
         2 #SUP:3 %:75\n\
         2 1 #SUP:2 %:50\n\
         1 #SUP:3 %:75\n"
    );
}

#[test]
fn test_file_run_skips_comment_and_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("db.txt");
    std::fs::write(&path, "# header\n% meta\n@attribute\n\n1 2 3\n   \n1 2\n1 3\n2 3\n").unwrap();

    let mut out = Vec::new();
    let stats = run(
        &TransactionFile::new(&path),
        MinSupport::Fraction(0.5),
        MiningOptions::default(),
        ItemsetWriter::new(&mut out),
    )
    .unwrap();

    assert_eq!(stats.num_transactions, 4);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "3 #SUP:3 %:75\n\
         3 2 #SUP:2 %:50\n\
         3 1 #SUP:2 %:50\n\
         2 #SUP:3 %:75\n\
         2 1 #SUP:2 %:50\n\
         1 #SUP:3 %:75\n"
    );
}

#[test]
fn test_single_transaction_expands_every_subset() {
    let text = mine_text("5 6 7\n", MinSupport::Count(1));
    assert_eq!(
        text,
        "7 #SUP:1 %:100\n\
         7 6 #SUP:1 %:100\n\
         7 5 #SUP:1 %:100\n\
         7 6 5 #SUP:1 %:100\n\
         6 #SUP:1 %:100\n\
         6 5 #SUP:1 %:100\n\
         5 #SUP:1 %:100\n"
    );
}

#[test]
fn test_empty_dataset_yields_nothing() {
    let db = Transactions::default();
    let mut out = Vec::new();
    let stats = run(&db, MinSupport::Fraction(0.5), MiningOptions::default(), ItemsetWriter::new(&mut out)).unwrap();
    assert!(out.is_empty());
    assert_eq!(stats.num_transactions, 0);
    assert_eq!(stats.itemsets, 0);
}

#[test]
fn test_no_frequent_items_yields_nothing() {
    let text = mine_text("1\n2\n3\n4\n", MinSupport::Count(2));
    assert!(text.is_empty());
}

#[test]
fn test_ties_are_inherited_by_descendants() {
    // 1 occurs in every transaction holding 9, so {9, 2} must still yield {9, 2, 1}.
    let db = Transactions::parse("1 9\n1 9 2\n1 9 2\n2\n3\n").unwrap();
    let found = mine(&db, MinSupport::Count(2)).unwrap();
    assert_eq!(found.support_of(&[1, 9]), Some(3));
    assert_eq!(found.support_of(&[1, 2]), Some(2));
    assert_eq!(found.support_of(&[1, 2, 9]), Some(2));
    assert_eq!(found.support_of(&[2, 9]), Some(2));
    assert_eq!(found.support_of(&[3]), None);
}

#[test]
fn test_stats_report_the_run() {
    let db = Transactions::parse("1 2 3\n1 2\n1 3\n2 3\n").unwrap();
    let mut found = FrequentItemsets::new();
    let stats = run(&db, MinSupport::Count(2), MiningOptions::default(), &mut found).unwrap();
    assert_eq!(stats.num_transactions, 4);
    assert_eq!(stats.min_support, 2);
    assert_eq!(stats.frequent_items, 3);
    assert_eq!(stats.tree_nodes, 6);
    assert_eq!(stats.itemsets, 6);
    assert_eq!(found.num_transactions(), 4);
}

#[test]
fn test_max_len_limits_itemset_size() {
    let db = Transactions::parse("5 6 7\n5 6 7\n5 6\n").unwrap();
    let all = mine(&db, MinSupport::Count(1)).unwrap();
    assert_eq!(all.len(), 7);
    let capped = mine_with_options(&db, MinSupport::Count(1), MiningOptions::with_max_len(2)).unwrap();
    assert_eq!(capped.len(), 6);
    assert!(capped.iter().all(|(itemset, _)| itemset.len() <= 2));
    for (itemset, support) in capped.iter() {
        assert_eq!(all.support_of(itemset), Some(support));
    }
}

#[test]
fn test_invalid_max_len_is_rejected() {
    let db = Transactions::new(vec![vec![1]]);
    let result = mine_with_options(&db, MinSupport::Count(1), MiningOptions::with_max_len(0));
    assert!(matches!(result, Err(crate::error::Error::Config(_))));
}

#[test]
fn test_dense_matrix_input() {
    // Transactions: [[0,1], [0,1,2], [0,2], [1,2]]
    let transactions = Array2::from_shape_vec(
        (4, 3),
        vec![
            1, 1, 0, // Transaction 0: items 0, 1
            1, 1, 1, // Transaction 1: items 0, 1, 2
            1, 0, 1, // Transaction 2: items 0, 2
            0, 1, 1, // Transaction 3: items 1, 2
        ],
    )
    .unwrap();

    let db = Transactions::from_dense(transactions.view());
    let found = mine(&db, MinSupport::Fraction(0.5)).unwrap();

    assert_eq!(found.iter_level(1).count(), 3);
    assert_eq!(found.iter_level(2).count(), 3);
    assert_eq!(found.iter_level(3).count(), 0);
}

#[test]
fn test_output_is_deterministic() {
    let text = "4 1 3\n2 4\n1 2 3 4\n3 1\n2 3\n4 2 1\n";
    let first = mine_text(text, MinSupport::Count(2));
    let second = mine_text(text, MinSupport::Count(2));
    assert!(!first.is_empty());
    assert_eq!(first, second);
}
