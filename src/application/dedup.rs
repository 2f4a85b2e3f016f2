use std::collections::HashSet;

/// Distinct, non-empty values of `values`.
///
/// Callers must not rely on the order of the result.
pub fn unique<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| !v.is_empty() && seen.insert(v.clone()))
        .collect()
}
