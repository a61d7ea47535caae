//! Generic comparator-driven stable sorting.
//!
//! A sort is a `(comparison, order)` pair. Comparisons are built from key
//! extraction functions; [`sorted`] applies them with a stable sort and a
//! fresh output vector, never touching the input. Stability matters:
//! sentinel-valued priorities produce many equal keys whose prior relative
//! order must survive.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortingOrder {
    #[default]
    Ascending,
    Descending,
}

/// A pairwise comparison over `T`.
pub type Comparison<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

/// Comparison by a numeric key.
///
/// NaN keys compare equal, which keeps the sort total and stable.
pub fn sort_key_numeric<'a, T, K>(key: K) -> Comparison<'a, T>
where
    K: Fn(&T) -> f64 + 'a,
{
    Box::new(move |a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal))
}

/// Comparison by a text key, case-insensitive.
pub fn sort_key_text<'a, T, K>(key: K) -> Comparison<'a, T>
where
    K: Fn(&T) -> String + 'a,
{
    Box::new(move |a, b| fold_case(&key(a)).cmp(&fold_case(&key(b))))
}

fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Sort a slice into a new vector.
///
/// `None` comparison leaves the input order untouched. Descending order
/// reverses the comparison result; the sort is stable either way, so
/// equal keys keep their prior relative order.
pub fn sorted<T: Clone>(items: &[T], comparison: Option<Comparison<T>>, order: SortingOrder) -> Vec<T> {
    let mut result = items.to_vec();
    if let Some(compare) = comparison {
        match order {
            SortingOrder::Ascending => result.sort_by(|a, b| compare(a, b)),
            SortingOrder::Descending => result.sort_by(|a, b| compare(a, b).reverse()),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        score: f64,
        label: &'static str,
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, score: -2.0, label: "Beta" },
            Item { id: 2, score: -2.0, label: "alpha" },
            Item { id: 3, score: 0.5, label: "Gamma" },
        ]
    }

    #[test]
    fn test_stable_ascending_keeps_tied_order() {
        let sorted = sorted(&items(), Some(sort_key_numeric(|i: &Item| i.score)), SortingOrder::Ascending);
        let ids: Vec<_> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_stable_descending_keeps_tied_order() {
        let sorted = sorted(&items(), Some(sort_key_numeric(|i: &Item| i.score)), SortingOrder::Descending);
        let ids: Vec<_> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_text_key_is_case_insensitive() {
        let sorted = sorted(
            &items(),
            Some(sort_key_text(|i: &Item| i.label.to_string())),
            SortingOrder::Ascending,
        );
        let labels: Vec<_> = sorted.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_no_comparison_preserves_input_order() {
        let input = items();
        let sorted = sorted(&input, None, SortingOrder::Descending);
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = items();
        let _ = sorted(&input, Some(sort_key_numeric(|i: &Item| i.score)), SortingOrder::Descending);
        assert_eq!(input[0].id, 1);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = sorted(&items(), Some(sort_key_numeric(|i: &Item| i.score)), SortingOrder::Ascending);
        let twice = sorted(&once, Some(sort_key_numeric(|i: &Item| i.score)), SortingOrder::Ascending);
        assert_eq!(once, twice);
    }
}
