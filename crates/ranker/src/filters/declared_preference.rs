//! Filter to keep only products matching the user's onboarding choices.
//!
//! Used for new users who haven't liked anything yet.

use crate::context::FeedContext;
use crate::signals::MatchSignals;
use crate::traits::Filter;
use catalog::Product;

/// Keeps candidates that match a declared style, color or brand.
///
/// ## Algorithm
/// 1. For each candidate, evaluate every preference category the candidate
///    has a field for
/// 2. Keep it if any evaluable category matches
/// 3. Keep it as well if no category could be evaluated at all, so an empty
///    profile (or an untagged catalog) doesn't starve the feed
pub struct DeclaredPreferenceFilter;

impl Filter for DeclaredPreferenceFilter {
    fn name(&self) -> &str {
        "DeclaredPreferenceFilter"
    }

    fn apply(&self, products: Vec<Product>, context: &FeedContext<'_>) -> Vec<Product> {
        products
            .into_iter()
            .filter(|product| MatchSignals::cold_start(product, context.preferences).is_match())
            .collect()
    }
}
