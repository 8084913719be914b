//! Core traits for the feed pipeline.

use crate::context::FeedContext;
use catalog::Product;

/// A single selection step over the catalog.
///
/// - `Send + Sync` so a ranker can be shared across request handlers
/// - Filters take ownership of the Vec and return the survivors
/// - Filters only remove products, never reorder them
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    fn apply(&self, products: Vec<Product>, context: &FeedContext<'_>) -> Vec<Product>;
}
