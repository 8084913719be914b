//! Personalized feed ranking for the swipe feed.
//!
//! This crate provides:
//! - Filter trait and implementations for product filtering
//! - FilterPipeline for composing filters
//! - LikedProfile, the implicit preferences inferred from likes
//! - MatchSignals, the per-product explanation of a decision
//! - FeedRanker / `rank`, which tie everything together
//!
//! ## Architecture
//! A ranking call never fetches anything. The caller hands over the
//! preference record, the liked ids and the catalog page; the ranker returns
//! the subsequence of the catalog to display, in catalog order.
//!
//! 1. No likes yet: products are matched against declared preferences
//! 2. Otherwise: liked products are dropped and the rest must share a brand
//!    with a liked item, or be eco-friendly when an eco-friendly item was liked
//!
//! ## Example Usage
//! ```ignore
//! use ranker::rank;
//!
//! let feed = rank(&preferences, &liked_ids, &catalog);
//! if feed.is_empty() {
//!     // caller decides on a fallback
//! }
//! ```

pub mod traits;
pub mod context;
pub mod profile;
pub mod signals;
pub mod filters;
pub mod filter_pipeline;
pub mod feed;

// Re-export main types
pub use traits::Filter;
pub use context::{FeedContext, FeedMode};
pub use profile::{build_liked_profile, LikedProfile};
pub use signals::MatchSignals;
pub use filter_pipeline::FilterPipeline;
pub use feed::{rank, FeedRanker};
