//! # Catalog Crate
//!
//! Data contracts for the personalized feed: the product catalog, the user's
//! onboarding preferences and the set of liked products, plus the plumbing
//! that produces them.
//!
//! ## Main Components
//!
//! - **types**: Product, ProductShape, UserPreferences, LikedIds
//! - **parser**: JSON documents to Rust structs
//! - **index**: CatalogIndex with id/brand lookups and uniqueness checks
//! - **store**: ProfileStore trait with local-file and in-memory backends
//! - **mock**: seeded mock catalog
//! - **error**: error types for loading and storage
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogIndex, LocalProfileStore, load_feed_inputs};
//! use std::path::Path;
//!
//! let store = LocalProfileStore::new(".swipe-feed");
//! let inputs = load_feed_inputs(
//!     || Ok(CatalogIndex::load_from_file(Path::new("catalog.json"))?.into_products()),
//!     &store,
//! )?;
//! println!("{} products, {} likes", inputs.catalog.len(), inputs.liked_ids.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod store;
pub mod mock;

pub use error::{CatalogError, Result};
pub use types::{LikedIds, Product, ProductId, ProductShape, UserPreferences};
pub use index::{CatalogIndex, CatalogStats};
pub use store::{load_feed_inputs, FeedInputs, LocalProfileStore, MemoryProfileStore, ProfileStore};
pub use mock::{mock_catalog, DEFAULT_MOCK_SIZE};
