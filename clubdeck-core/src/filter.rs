//! Free-text and facet filtering over record sequences
//!
//! Filtering is a pure reduction of the full record slice to the visible
//! subset. Facets AND together; the text query ORs across each record's
//! searchable fields. Output preserves input order, so the result is always
//! an order-preserving subsequence of the input.

/// Per-record free-text matching against a fixed set of fields.
///
/// Implementations receive an already lowercased, trimmed needle and should
/// match with [`contains_ignore_case`] over each searchable field.
pub trait Searchable {
    fn matches_query(&self, needle: &str) -> bool;
}

/// A discrete filter dimension with a closed set of values.
///
/// Every facet carries a distinguished "All" value that restricts nothing.
/// Values may be derived predicates over nested fields rather than plain
/// field equality (e.g. a member segment that matches on subscription
/// status instead of tier).
pub trait Facet<R> {
    /// Whether this value is the no-op "All" selection.
    fn is_all(&self) -> bool;

    /// Whether the record matches this facet value. Only consulted when
    /// `is_all` is false.
    fn matches(&self, record: &R) -> bool;

    fn accepts(&self, record: &R) -> bool {
        self.is_all() || self.matches(record)
    }
}

/// Case-insensitive substring test. The needle must already be lowercase.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Reduce `records` to the subsequence matching the query and every facet.
///
/// An empty or whitespace-only query matches everything. Facets with the
/// "All" value are skipped. The relative order of the input is preserved.
pub fn apply<'r, R: Searchable>(
    records: &'r [R],
    query: &str,
    facets: &[&dyn Facet<R>],
) -> Vec<&'r R> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| facets.iter().all(|f| f.accepts(r)))
        .filter(|r| needle.is_empty() || r.matches_query(&needle))
        .collect()
}
