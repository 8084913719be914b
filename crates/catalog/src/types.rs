//! Core domain types for the product catalog.
//!
//! A catalog snapshot mixes two record shapes: locally seeded entries that
//! carry `style`/`color` tags, and entries enriched by the commerce backend
//! that only know their `brand` and eco flag. Rather than a tagged enum, every
//! ranking-relevant field is optional and [`Product::shape`] reports which
//! capabilities a record actually has.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashSet};

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque product identifier, unique within one catalog snapshot
pub type ProductId = String;

/// Identifiers of products the user has approved (swiped right / hearted)
pub type LikedIds = HashSet<ProductId>;

// =============================================================================
// Product
// =============================================================================

/// A catalog entry available for display.
///
/// Only `id` is mandatory. Display fields (`name`, `price`, `image`, `sizes`)
/// are carried through untouched; the ranker never looks at them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Style tag, only present on locally seeded entries
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Color tag, only present on locally seeded entries
    #[serde(default, deserialize_with = "non_blank", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_friendly: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Available sizes. The mobile app stores these under `size`.
    #[serde(default, alias = "size", skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
}

/// Blank strings carry no signal; read them as absent.
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn tag(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Product {
    /// Create a bare product with only an identifier.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            brand: None,
            style: None,
            color: None,
            eco_friendly: None,
            price: None,
            image: None,
            sizes: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_eco_friendly(mut self, eco_friendly: bool) -> Self {
        self.eco_friendly = Some(eco_friendly);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Brand, unless absent or blank.
    pub fn brand_tag(&self) -> Option<&str> {
        tag(&self.brand)
    }

    /// Style, unless absent or blank.
    pub fn style_tag(&self) -> Option<&str> {
        tag(&self.style)
    }

    /// Color, unless absent or blank.
    pub fn color_tag(&self) -> Option<&str> {
        tag(&self.color)
    }

    /// Which ranking-relevant fields this record populates.
    pub fn shape(&self) -> ProductShape {
        if self.style_tag().is_some() || self.color_tag().is_some() {
            ProductShape::LegacyTagged
        } else if self.brand_tag().is_some() {
            ProductShape::BrandTagged
        } else {
            ProductShape::Untagged
        }
    }

    /// True only when the record explicitly says it is eco-friendly.
    pub fn is_eco_friendly(&self) -> bool {
        self.eco_friendly == Some(true)
    }
}

/// Capability view of a [`Product`], derived from its populated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductShape {
    /// Carries `style` and/or `color` (mock or locally seeded entries)
    LegacyTagged,
    /// Carries only `brand` (entries enriched by the commerce service)
    BrandTagged,
    /// Carries none of brand, style or color
    Untagged,
}

// =============================================================================
// User preferences
// =============================================================================

/// The user's declared onboarding choices.
///
/// Every field defaults, so `{}` is a valid (empty) preference record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub styles: BTreeSet<String>,
    #[serde(default)]
    pub colors: BTreeSet<String>,
    #[serde(default)]
    pub brands: BTreeSet<String>,
    /// Preferred size token; empty means no preference
    #[serde(default)]
    pub size: String,
}

impl UserPreferences {
    /// True when no style, color or brand has been declared.
    ///
    /// `size` is not a ranking signal and is ignored here.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.colors.is_empty() && self.brands.is_empty()
    }
}
