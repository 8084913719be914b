//! # Feed Ranker
//!
//! Entry point of the crate. Picks the policy for the call and runs the
//! matching filter pipeline:
//!
//! - cold start (no likes): `DeclaredPreferenceFilter`
//! - warm start: `AlreadyLikedFilter` then `LikedAffinityFilter`
//!
//! The ranker is pure. It clones the surviving products into a new Vec and
//! never touches its inputs, so it can be called from any thread.

use crate::context::{FeedContext, FeedMode};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{AlreadyLikedFilter, DeclaredPreferenceFilter, LikedAffinityFilter};
use crate::signals::MatchSignals;
use catalog::{LikedIds, Product, UserPreferences};
use tracing::debug;

/// Builds and runs the per-mode filter pipelines.
pub struct FeedRanker {
    cold_start: FilterPipeline,
    warm_start: FilterPipeline,
}

impl FeedRanker {
    pub fn new() -> Self {
        Self {
            cold_start: FilterPipeline::new().add_filter(DeclaredPreferenceFilter),
            warm_start: FilterPipeline::new()
                .add_filter(AlreadyLikedFilter)
                .add_filter(LikedAffinityFilter),
        }
    }

    fn pipeline(&self, mode: FeedMode) -> &FilterPipeline {
        match mode {
            FeedMode::ColdStart => &self.cold_start,
            FeedMode::WarmStart => &self.warm_start,
        }
    }

    /// Select the products to show, preserving catalog order.
    pub fn rank(
        &self,
        preferences: &UserPreferences,
        liked_ids: &LikedIds,
        catalog: &[Product],
    ) -> Vec<Product> {
        let context = FeedContext::new(preferences, liked_ids, catalog);
        let feed = self.pipeline(context.mode).apply(catalog.to_vec(), &context);

        debug!(
            "Ranked feed ({:?}): {} of {} products",
            context.mode,
            feed.len(),
            catalog.len()
        );
        feed
    }

    /// Signals behind each product of the ranked feed, in feed order.
    pub fn explain(
        &self,
        preferences: &UserPreferences,
        liked_ids: &LikedIds,
        catalog: &[Product],
    ) -> Vec<MatchSignals> {
        let context = FeedContext::new(preferences, liked_ids, catalog);
        self.pipeline(context.mode)
            .apply(catalog.to_vec(), &context)
            .iter()
            .map(|product| match context.mode {
                FeedMode::ColdStart => MatchSignals::cold_start(product, preferences),
                FeedMode::WarmStart => MatchSignals::warm_start(product, &context.liked_profile),
            })
            .collect()
    }
}

impl Default for FeedRanker {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank `catalog` for a user with a default [`FeedRanker`].
pub fn rank(preferences: &UserPreferences, liked_ids: &LikedIds, catalog: &[Product]) -> Vec<Product> {
    FeedRanker::new().rank(preferences, liked_ids, catalog)
}
