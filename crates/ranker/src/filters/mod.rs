//! Filter implementations for the feed pipeline.

pub mod already_liked;
pub mod declared_preference;
pub mod liked_affinity;

// Re-export for convenience
pub use already_liked::AlreadyLikedFilter;
pub use declared_preference::DeclaredPreferenceFilter;
pub use liked_affinity::LikedAffinityFilter;
