//! Filtering and lookup over catalog collections.
//!
//! A [`FilterSpec`] carries up to three independent constraints: an exact
//! category, a secondary classifier, and a free-text search term. Each
//! active constraint is a predicate over a single record; `query` composes
//! them with logical AND. Because the dimensions narrow independently,
//! their application order cannot affect the result, and the filter is
//! stable: records come back in the order the collection holds them.
//!
//! Search terms are deliberately not trimmed. A term of only whitespace is
//! an active constraint matched literally, mirroring how the inert/active
//! decision is made on the raw string (empty means inert, anything else is
//! matched as-is).

use crate::catalog::record::{CatalogRecord, Classifier};
use crate::error::{CoreError, CoreResult};

/// Optional constraints narrowing a catalog collection to a subset.
///
/// The default spec is unconstrained and returns collections unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Exact-match category. `Some("")` is inert.
    pub category: Option<String>,
    /// Secondary classifier, compared by strict equality.
    pub classifier: Option<Classifier>,
    /// Case-insensitive substring search over label, description, and
    /// (for resources) tags. `Some("")` is inert; whitespace is literal.
    pub search: Option<String>,
}

impl FilterSpec {
    /// Returns a spec with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exact-match category constraint.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Adds a secondary classifier constraint.
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Adds a free-text search constraint.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The category constraint, if active. Empty strings are inert.
    fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// The search constraint, if active. Empty strings are inert; the
    /// term is lower-cased here once rather than per record.
    fn active_search(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// Category predicate: case-sensitive exact match.
fn matches_category<R: CatalogRecord>(record: &R, category: &str) -> bool {
    record.category() == category
}

/// Classifier predicate: strict equality, including the classifier kind.
fn matches_classifier<R: CatalogRecord>(record: &R, classifier: &Classifier) -> bool {
    record.classifier() == *classifier
}

/// Search predicate: the lower-cased needle must be a substring of the
/// lower-cased label, description, or any search tag.
fn matches_search<R: CatalogRecord>(record: &R, needle: &str) -> bool {
    record.label().to_lowercase().contains(needle)
        || record.description().to_lowercase().contains(needle)
        || record
            .search_tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Filters a collection by the given spec, preserving input order.
///
/// Each active dimension of the spec narrows the candidate set
/// independently; the result is their intersection. An unconstrained spec
/// returns every record. No ranking or pagination is applied.
pub fn query<'a, R: CatalogRecord>(records: &'a [R], spec: &FilterSpec) -> Vec<&'a R> {
    let category = spec.active_category();
    let classifier = spec.classifier.as_ref();
    let search = spec.active_search();

    records
        .iter()
        .filter(|record| category.is_none_or(|c| matches_category(*record, c)))
        .filter(|record| classifier.is_none_or(|c| matches_classifier(*record, c)))
        .filter(|record| {
            search
                .as_deref()
                .is_none_or(|needle| matches_search(*record, needle))
        })
        .collect()
}

/// Looks up a single record by its identifier.
///
/// The identifier arrives as a string (a route parameter in the rendering
/// layer) and is coerced numerically before comparison, so `"3"` finds the
/// record with id `3`. Surrounding whitespace is tolerated, as numeric
/// coercion implies.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] when the identifier does not coerce to
/// a number or no record carries it. Both are the same recoverable
/// condition from the caller's point of view: nothing to show.
pub fn find_by_id<'a, R: CatalogRecord>(records: &'a [R], id: &str) -> CoreResult<&'a R> {
    let wanted: u32 = id
        .trim()
        .parse()
        .map_err(|_| CoreError::not_found(R::ENTITY))?;

    records
        .iter()
        .find(|record| record.id() == wanted)
        .ok_or_else(|| CoreError::not_found(R::ENTITY))
}
