//! Seeded mock catalog.
//!
//! The app ships a locally generated catalog that it shows before the
//! commerce backend is reachable, and falls back to when a personalized feed
//! comes back empty. Entries are legacy-tagged (style and color populated).
//! Generation is seeded so the same seed always yields the same catalog.

use crate::types::Product;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STYLES: &[&str] = &[
    "casual", "formal", "boho", "minimal", "streetwear", "vintage", "athleisure", "elegant",
];

const COLORS: &[&str] = &[
    "black", "white", "navy", "beige", "olive", "burgundy", "pink", "denim", "cream", "charcoal",
];

const BRANDS: &[&str] = &[
    "Everlane",
    "Reformation",
    "Levi’s",
    "Zara",
    "H&M",
    "Patagonia",
    "Madewell",
    "COS",
    "&OtherStories",
    "Pact",
];

/// Brands whose products are always eco-friendly
pub const ECO_BRANDS: &[&str] = &["Everlane", "Reformation", "Patagonia", "Pact"];

const DESCRIPTORS: &[&str] = &[
    "Organic Cotton",
    "Recycled Polyester",
    "Linen Blend",
    "Tencel™",
    "Hemp",
    "Deadstock Fabric",
    "Vintage-Inspired",
    "Minimalist",
    "Tailored",
    "Relaxed Fit",
    "High-Waisted",
    "Wrap",
    "Puff Sleeve",
    "Oversized",
    "Ribbed Knit",
    "Silk-Blend",
    "Cropped",
    "Utility",
    "Ruffled",
    "Sustainable",
];

const CATEGORIES: &[&str] = &[
    "Dress", "Blouse", "Jeans", "T-Shirt", "Sweater", "Skirt", "Jumpsuit", "Blazer", "Cardigan",
    "Trousers", "Top", "Jacket", "Leggings", "Coat", "Tank Top",
];

const SIZE_GRIDS: &[&[&str]] = &[
    &["XS", "S", "M", "L", "XL", "XXL"],
    &["24", "26", "28", "30", "32"],
    &["0", "2", "4", "6", "8", "10", "12", "14", "16"],
    &["S", "M", "L", "XL"],
];

/// Default number of products in the mock catalog
pub const DEFAULT_MOCK_SIZE: usize = 60;

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generate `count` mock products with ids `"1"..="count"`.
pub fn mock_catalog(count: usize, seed: u64) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let category = pick(&mut rng, CATEGORIES);
            let descriptor = pick(&mut rng, DESCRIPTORS);
            let brand = pick(&mut rng, BRANDS);
            let style = pick(&mut rng, STYLES);
            let color = pick(&mut rng, COLORS);
            let price = rng.random_range(25..145);
            let eco_friendly = ECO_BRANDS.contains(&brand) || rng.random_bool(0.3);
            let sizes = SIZE_GRIDS[rng.random_range(0..SIZE_GRIDS.len())];

            let mut product = Product::new((i + 1).to_string())
                .with_name(format!("{} {}", descriptor, category))
                .with_brand(brand)
                .with_style(style)
                .with_color(color)
                .with_eco_friendly(eco_friendly)
                .with_price(price as f64);
            product.image = Some(format!(
                "https://images.unsplash.com/photo-{}?auto=format&fit=crop&w=500&q=80",
                1525507119028u64 + (i % 10) as u64
            ));
            product.sizes = sizes.iter().map(|s| s.to_string()).collect();
            product
        })
        .collect()
}
