//! Implicit preference profile built from liked items.
//!
//! Only liked ids that resolve against the supplied catalog page carry any
//! signal. Ids the page doesn't contain are counted and otherwise ignored.

use catalog::{LikedIds, Product};
use std::collections::HashSet;

/// What the user's likes say about them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedProfile {
    /// Brands of resolvable liked items
    pub brands: HashSet<String>,
    /// `ecoFriendly` values observed on resolvable liked items
    pub eco_values: HashSet<bool>,
    /// Liked ids found in the catalog
    pub resolved: usize,
    /// Liked ids not found in the catalog
    pub unresolved: usize,
}

impl LikedProfile {
    /// True if any resolvable liked item is eco-friendly.
    pub fn has_eco_like(&self) -> bool {
        self.eco_values.contains(&true)
    }

    pub fn likes_brand(&self, brand: &str) -> bool {
        self.brands.contains(brand)
    }
}

/// Build a [`LikedProfile`] from the liked ids found in `catalog`.
pub fn build_liked_profile(liked_ids: &LikedIds, catalog: &[Product]) -> LikedProfile {
    let mut profile = LikedProfile::default();

    for product in catalog.iter().filter(|p| liked_ids.contains(&p.id)) {
        profile.resolved += 1;

        if let Some(brand) = product.brand_tag() {
            profile.brands.insert(brand.to_string());
        }
        if let Some(eco) = product.eco_friendly {
            profile.eco_values.insert(eco);
        }
    }

    profile.unresolved = liked_ids.len().saturating_sub(profile.resolved);
    if profile.unresolved > 0 {
        tracing::debug!(
            "{} liked ids not present in catalog, skipping",
            profile.unresolved
        );
    }

    profile
}
