//! Tests for the search filter.

use afya_model::{Drug, filter_by};
use proptest::prelude::*;

fn catalog() -> Vec<Drug> {
    vec![
        Drug::new("Paracetamol", "Pain relief"),
        Drug::new("Ibuprofen", "Anti-inflammatory"),
    ]
}

#[test]
fn test_substring_match() {
    let drugs = catalog();
    let hits = filter_by(&drugs, "par", |d| d.name.as_str());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Paracetamol");
}

#[test]
fn test_match_ignores_case_both_ways() {
    let drugs = catalog();
    assert_eq!(filter_by(&drugs, "PARA", |d| d.name.as_str()).len(), 1);
    assert_eq!(filter_by(&drugs, "ibuPROfen", |d| d.name.as_str()).len(), 1);
}

#[test]
fn test_empty_query_returns_everything_in_order() {
    let drugs = catalog();
    let hits = filter_by(&drugs, "", |d| d.name.as_str());
    let names: Vec<&str> = hits.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Paracetamol", "Ibuprofen"]);
}

#[test]
fn test_no_match_yields_empty() {
    let drugs = catalog();
    assert!(filter_by(&drugs, "amoxicillin", |d| d.name.as_str()).is_empty());
}

#[test]
fn test_order_preserved_across_multiple_hits() {
    let drugs = vec![
        Drug::new("Aspirin", ""),
        Drug::new("Ibuprofen", ""),
        Drug::new("Antacid", ""),
    ];
    let hits = filter_by(&drugs, "a", |d| d.name.as_str());
    let names: Vec<&str> = hits.iter().map(|d| d.name.as_str()).collect();
    // "a" appears in all three, order untouched
    assert_eq!(names, vec!["Aspirin", "Ibuprofen", "Antacid"]);
}

#[test]
fn test_filter_does_not_mutate_input() {
    let drugs = catalog();
    let _ = filter_by(&drugs, "par", |d| d.name.as_str());
    assert_eq!(drugs.len(), 2);
}

fn arb_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z ]{0,12}", 0..20)
}

proptest! {
    /// The empty query is the identity filter.
    #[test]
    fn prop_empty_query_is_identity(names in arb_names()) {
        let hits = filter_by(&names, "", String::as_str);
        prop_assert_eq!(hits.len(), names.len());
        for (hit, original) in hits.iter().zip(names.iter()) {
            prop_assert_eq!(*hit, original);
        }
    }

    /// Every returned item contains the query, case-insensitively, and no
    /// matching item is dropped.
    #[test]
    fn prop_hits_contain_query_and_nothing_is_missed(
        names in arb_names(),
        query in "[a-zA-Z]{1,6}",
    ) {
        let hits = filter_by(&names, &query, String::as_str);
        let needle = query.to_lowercase();

        for hit in &hits {
            prop_assert!(hit.to_lowercase().contains(&needle));
        }

        let expected = names
            .iter()
            .filter(|n| n.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(hits.len(), expected);
    }

    /// Results appear in the same relative order as the input.
    #[test]
    fn prop_result_is_an_ordered_subsequence(
        names in arb_names(),
        query in "[a-zA-Z]{0,4}",
    ) {
        let hits = filter_by(&names, &query, String::as_str);
        let mut cursor = names.iter();
        for hit in hits {
            // Each hit must be found in the remaining input, in order.
            prop_assert!(cursor.any(|n| std::ptr::eq(n, hit)));
        }
    }
}
