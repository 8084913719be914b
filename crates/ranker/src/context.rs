//! Per-call context shared by every filter in the pipeline.

use crate::profile::{build_liked_profile, LikedProfile};
use catalog::{LikedIds, Product, UserPreferences};

/// Which policy the ranker applies for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedMode {
    /// No likes yet: filter by declared onboarding preferences
    ColdStart,
    /// At least one like: filter by signal inferred from liked items
    WarmStart,
}

impl FeedMode {
    pub fn for_likes(liked_ids: &LikedIds) -> Self {
        if liked_ids.is_empty() {
            FeedMode::ColdStart
        } else {
            FeedMode::WarmStart
        }
    }
}

/// Inputs of one ranking call, plus what is derived from them up front.
#[derive(Debug, Clone)]
pub struct FeedContext<'a> {
    pub preferences: &'a UserPreferences,
    pub liked_ids: &'a LikedIds,
    pub mode: FeedMode,
    /// Empty in cold start
    pub liked_profile: LikedProfile,
}

impl<'a> FeedContext<'a> {
    /// Build the context, resolving liked ids against `catalog`.
    pub fn new(
        preferences: &'a UserPreferences,
        liked_ids: &'a LikedIds,
        catalog: &[Product],
    ) -> Self {
        let mode = FeedMode::for_likes(liked_ids);
        let liked_profile = match mode {
            FeedMode::ColdStart => LikedProfile::default(),
            FeedMode::WarmStart => build_liked_profile(liked_ids, catalog),
        };

        Self {
            preferences,
            liked_ids,
            mode,
            liked_profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection() {
        let mut liked = LikedIds::new();
        assert_eq!(FeedMode::for_likes(&liked), FeedMode::ColdStart);

        liked.insert("1".to_string());
        assert_eq!(FeedMode::for_likes(&liked), FeedMode::WarmStart);
    }

    #[test]
    fn test_cold_start_skips_profile() {
        let prefs = UserPreferences::default();
        let liked = LikedIds::new();
        let catalog = vec![Product::new("1").with_brand("Zara")];

        let context = FeedContext::new(&prefs, &liked, &catalog);
        assert_eq!(context.mode, FeedMode::ColdStart);
        assert!(context.liked_profile.brands.is_empty());
    }
}
