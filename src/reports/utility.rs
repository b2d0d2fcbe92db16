//! Order-independent aggregation helpers shared by the report passes.

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value, `None` for empty input.
///
/// Ties break toward the smallest value so repeated runs over the same
/// table always agree, whatever order the rows arrive in.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, u64> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|(va, ca), (vb, cb)| ca.cmp(cb).then_with(|| vb.cmp(va)))
        .map(|(value, _)| value)
}

/// Count per distinct value, descending by count with alphabetical ties.
pub fn value_counts<'a, I>(values: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut table: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    table.sort_by(|(va, ca), (vb, cb)| cb.cmp(ca).then_with(|| va.cmp(vb)));
    table
}

/// Whether every observation holds the same value. Vacuously true when
/// there are none.
pub fn is_uniform<T, I>(values: I) -> bool
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut iter = values.into_iter();
    match iter.next() {
        Some(first) => iter.all(|value| value == first),
        None => true,
    }
}

/// Arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_picks_most_frequent() {
        assert_eq!(mode([3u32, 1, 3, 2, 3]), Some(3));
    }

    #[test]
    fn test_mode_tie_breaks_to_smallest() {
        // 1 and 3 both appear twice; the smaller value wins.
        assert_eq!(mode([1u32, 1, 3, 3]), Some(1));
        assert_eq!(mode(["b", "a", "b", "a"]), Some("a"));
    }

    #[test]
    fn test_mode_empty_is_none() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_value_counts_descending_then_alphabetical() {
        let table = value_counts(["Customer", "Subscriber", "Subscriber", "Dependent"]);
        assert_eq!(
            table,
            vec![
                ("Subscriber".to_string(), 2),
                ("Customer".to_string(), 1),
                ("Dependent".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_is_uniform() {
        assert!(is_uniform([1u32, 1, 1]));
        assert!(!is_uniform([1u32, 2]));
        assert!(is_uniform(Vec::<u32>::new()));
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_normal_values() {
        assert_eq!(mean(&[125.0, 95.0]), 110.0);
    }
}
