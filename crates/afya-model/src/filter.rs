/// Returns the items whose `field` value contains `query`, ignoring case.
///
/// The empty query matches everything. Input order is preserved and matches
/// are borrowed, not cloned.
pub fn filter_by<'a, T>(items: &'a [T], query: &str, field: impl Fn(&T) -> &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| field(item).to_lowercase().contains(&needle))
        .collect()
}
