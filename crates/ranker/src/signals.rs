//! Match signals for a single product.
//!
//! Each filter decides inclusion from these signals, and the same values are
//! what `FeedRanker::explain` reports. Inclusion stays a boolean gate:
//! [`MatchSignals::strength`] is for display and is never used to reorder.

use crate::context::FeedMode;
use crate::profile::LikedProfile;
use catalog::{Product, ProductId, UserPreferences};
use std::collections::BTreeSet;

/// Which signals fired for one product under one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSignals {
    pub product_id: ProductId,
    pub mode: FeedMode,

    // Cold start: declared preferences
    pub style_match: bool,
    pub color_match: bool,
    pub brand_match: bool,
    /// No declared category could be evaluated against this product
    pub permissive_default: bool,

    // Warm start: liked profile
    pub liked_brand_match: bool,
    pub eco_boost: bool,
}

/// `Some(matched)` when the category can be evaluated, `None` otherwise.
///
/// A category is evaluable when the user declared something for it and the
/// product populates the corresponding field.
fn evaluate(declared: &BTreeSet<String>, value: Option<&str>) -> Option<bool> {
    match value {
        Some(value) if !declared.is_empty() => Some(declared.contains(value)),
        _ => None,
    }
}

impl MatchSignals {
    fn empty(product_id: &ProductId, mode: FeedMode) -> Self {
        Self {
            product_id: product_id.clone(),
            mode,
            style_match: false,
            color_match: false,
            brand_match: false,
            permissive_default: false,
            liked_brand_match: false,
            eco_boost: false,
        }
    }

    /// Evaluate a product against declared onboarding preferences.
    ///
    /// Legacy entries are checked on style, color and brand; brand-only
    /// entries can only be checked on brand. If nothing is evaluable the
    /// product passes by default.
    pub fn cold_start(product: &Product, preferences: &UserPreferences) -> Self {
        let style = evaluate(&preferences.styles, product.style_tag());
        let color = evaluate(&preferences.colors, product.color_tag());
        let brand = evaluate(&preferences.brands, product.brand_tag());

        let mut signals = Self::empty(&product.id, FeedMode::ColdStart);
        signals.style_match = style == Some(true);
        signals.color_match = color == Some(true);
        signals.brand_match = brand == Some(true);
        signals.permissive_default = style.is_none() && color.is_none() && brand.is_none();
        signals
    }

    /// Evaluate an unliked product against the liked profile.
    pub fn warm_start(product: &Product, profile: &LikedProfile) -> Self {
        let mut signals = Self::empty(&product.id, FeedMode::WarmStart);
        signals.liked_brand_match = product
            .brand_tag()
            .is_some_and(|brand| profile.likes_brand(brand));
        signals.eco_boost = profile.has_eco_like() && product.is_eco_friendly();
        signals
    }

    /// Number of signals that fired.
    pub fn strength(&self) -> u32 {
        [
            self.style_match,
            self.color_match,
            self.brand_match,
            self.liked_brand_match,
            self.eco_boost,
        ]
        .iter()
        .filter(|&&fired| fired)
        .count() as u32
    }

    /// Whether the product belongs in the feed.
    pub fn is_match(&self) -> bool {
        self.permissive_default || self.strength() > 0
    }

    /// Short human-readable list of the signals that fired.
    pub fn describe(&self) -> String {
        if self.permissive_default {
            return "no evaluable preference".to_string();
        }

        let labels: Vec<&str> = [
            (self.style_match, "style"),
            (self.color_match, "color"),
            (self.brand_match, "brand"),
            (self.liked_brand_match, "liked brand"),
            (self.eco_boost, "eco boost"),
        ]
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, label)| *label)
        .collect();

        if labels.is_empty() {
            "no match".to_string()
        } else {
            labels.join(", ")
        }
    }
}
