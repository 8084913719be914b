//! The FilterPipeline chains filters in order.

use crate::context::FeedContext;
use crate::traits::Filter;
use catalog::Product;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AlreadyLikedFilter)
///     .add_filter(LikedAffinityFilter);
///
/// let feed = pipeline.apply(catalog.to_vec(), &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence.
    pub fn apply(&self, products: Vec<Product>, context: &FeedContext<'_>) -> Vec<Product> {
        let mut current = products;
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
