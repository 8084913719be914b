//! Filter to keep products that look like what the user already liked.
//!
//! Two independent gates, OR'd together:
//! - brand affinity: the candidate's brand appears among liked items
//! - eco boost: some liked item is eco-friendly and so is the candidate

use crate::context::FeedContext;
use crate::signals::MatchSignals;
use crate::traits::Filter;
use catalog::Product;

/// Keeps candidates with brand affinity or an eco boost.
///
/// Expects liked products to have been removed already
/// (see `AlreadyLikedFilter`).
pub struct LikedAffinityFilter;

impl Filter for LikedAffinityFilter {
    fn name(&self) -> &str {
        "LikedAffinityFilter"
    }

    fn apply(&self, products: Vec<Product>, context: &FeedContext<'_>) -> Vec<Product> {
        let profile = &context.liked_profile;
        tracing::debug!(
            "Liked profile: {} brands, eco like: {}",
            profile.brands.len(),
            profile.has_eco_like()
        );

        products
            .into_iter()
            .filter(|product| MatchSignals::warm_start(product, profile).is_match())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{LikedIds, UserPreferences};

    #[test]
    fn test_liked_affinity_filter() {
        let prefs = UserPreferences::default();
        let liked: LikedIds = ["1".to_string(), "2".to_string()].into_iter().collect();

        let catalog = vec![
            Product::new("1").with_brand("Zara").with_eco_friendly(false),
            Product::new("2").with_brand("Pact").with_eco_friendly(true),
            Product::new("3").with_brand("Zara").with_eco_friendly(false), // brand affinity
            Product::new("4").with_brand("Everlane").with_eco_friendly(true), // eco boost
            Product::new("5").with_brand("H&M").with_eco_friendly(false), // neither
            Product::new("6").with_eco_friendly(true), // eco boost, no brand
            Product::new("7"), // nothing known
        ];
        let context = FeedContext::new(&prefs, &liked, &catalog);

        let candidates: Vec<Product> = catalog[2..].to_vec();
        let filtered = LikedAffinityFilter.apply(candidates, &context);

        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4", "6"]);
    }
}
