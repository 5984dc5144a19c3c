use std::collections::BTreeMap;

/// Group `items` into sorted alphabetic buckets keyed by the first character
/// of `key(item)`. Items whose key does not start with an alphabetic
/// character land in the trailing `"#"` bucket.
///
/// Relative order inside a bucket follows the input order.
pub fn alpha_groups<T>(items: Vec<T>, key: impl Fn(&T) -> String) -> Vec<(String, Vec<T>)> {
    const OTHER: char = '#';

    let mut buckets: BTreeMap<String, Vec<T>> = BTreeMap::new();
    let mut other: Vec<T> = Vec::new();

    for item in items {
        let initial = key(&item).chars().next().filter(|c| c.is_alphabetic());
        match initial {
            Some(c) => buckets
                .entry(c.to_uppercase().collect())
                .or_default()
                .push(item),
            None => other.push(item),
        }
    }

    let mut groups: Vec<(String, Vec<T>)> = buckets.into_iter().collect();
    if !other.is_empty() {
        groups.push((OTHER.to_string(), other));
    }
    groups
}
