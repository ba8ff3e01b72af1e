//! Query-parameter handling
//!
//! Resource methods collect their filters into an ordered [`QueryParams`]
//! bag; [`QueryOptions`] holds the projection and pagination knobs shared by
//! every search-style endpoint.

use std::fmt;

/// Ordered bag of query parameters.
///
/// Order is preserved so request URLs are deterministic and testable.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any existing value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Set a parameter only when the key is not already present.
    ///
    /// Used for injected defaults (e.g. the session study): an explicit
    /// caller value always wins.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        let key = key.into();
        if !self.contains(&key) {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Set a parameter when the value is present.
    pub fn set_opt(&mut self, key: impl Into<String>, value: Option<impl ToString>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Set a boolean flag only when it is true; OpenCGA flags default false.
    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        if value {
            self.set(key, "true");
        }
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Sort direction for `order`-aware endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ASCENDING"),
            SortOrder::Descending => write!(f, "DESCENDING"),
        }
    }
}

/// Projection and pagination options shared by search-style endpoints.
///
/// Every field maps to the query parameter of the same name; unset fields
/// are omitted and take the server-side default (`limit` 10, `skip` 0,
/// `count` false).
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Comma-separated fields to include in the response.
    pub include: Option<String>,
    /// Comma-separated fields to exclude from the response.
    pub exclude: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<usize>,
    /// Number of results to skip.
    pub skip: Option<usize>,
    /// Ask the server for the total match count.
    pub count: bool,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Sort direction, meaningful with `sort`.
    pub order: Option<SortOrder>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_count(mut self) -> Self {
        self.count = true;
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some(field.into());
        self.order = Some(order);
        self
    }

    /// Write these options into a parameter bag.
    pub fn apply(&self, params: &mut QueryParams) {
        params.set_opt("include", self.include.as_deref());
        params.set_opt("exclude", self.exclude.as_deref());
        params.set_opt("limit", self.limit);
        params.set_opt("skip", self.skip);
        params.set_flag("count", self.count);
        params.set_opt("sort", self.sort.as_deref());
        params.set_opt("order", self.order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing_value() {
        let mut params = QueryParams::new();
        params.set("study", "demo");
        params.set("study", "cancer37");
        assert_eq!(params.get("study"), Some("cancer37"));
        assert_eq!(params.pairs().len(), 1);
    }

    #[test]
    fn test_set_default_never_overrides_caller_value() {
        let mut params = QueryParams::new();
        params.set("study", "explicit");
        params.set_default("study", "session-default");
        assert_eq!(params.get("study"), Some("explicit"));

        let mut empty = QueryParams::new();
        empty.set_default("study", "session-default");
        assert_eq!(empty.get("study"), Some("session-default"));
    }

    #[test]
    fn test_flags_only_serialized_when_true() {
        let mut params = QueryParams::new();
        params.set_flag("count", false);
        assert!(params.is_empty());
        params.set_flag("count", true);
        assert_eq!(params.get("count"), Some("true"));
    }

    #[test]
    fn test_query_options_builder_applies_in_order() {
        let opts = QueryOptions::new()
            .with_include("id,name")
            .with_limit(25)
            .with_skip(50)
            .with_count()
            .with_sort("creationDate", SortOrder::Descending);

        let mut params = QueryParams::new();
        opts.apply(&mut params);

        let keys: Vec<_> = params.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["include", "limit", "skip", "count", "sort", "order"]);
        assert_eq!(params.get("order"), Some("DESCENDING"));
    }
}
