//! Filter to remove products the user has already liked.
//!
//! A liked product has already been decided on; showing it again would make
//! the user swipe the same card twice.

use crate::context::FeedContext;
use crate::traits::Filter;
use catalog::Product;

/// Removes candidates whose id is in the liked set.
pub struct AlreadyLikedFilter;

impl Filter for AlreadyLikedFilter {
    fn name(&self) -> &str {
        "AlreadyLikedFilter"
    }

    fn apply(&self, products: Vec<Product>, context: &FeedContext<'_>) -> Vec<Product> {
        products
            .into_iter()
            .filter(|product| !context.liked_ids.contains(&product.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{LikedIds, UserPreferences};

    #[test]
    fn test_already_liked_filter() {
        let prefs = UserPreferences::default();
        let liked: LikedIds = ["100".to_string(), "200".to_string()].into_iter().collect();

        let products = vec![
            Product::new("100"),
            Product::new("101"),
            Product::new("200"),
            Product::new("300"),
        ];
        let context = FeedContext::new(&prefs, &liked, &products);

        let filtered = AlreadyLikedFilter.apply(products.clone(), &context);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "101");
        assert_eq!(filtered[1].id, "300");
    }
}
