//! CatalogIndex building and lookups.
//!
//! The index owns one catalog snapshot in display order and adds:
//! - an id -> position map (and the uniqueness check that comes with it)
//! - a brand -> positions secondary index
//! - aggregate stats used by the CLI

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// One validated catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    products: Vec<Product>,
    positions: HashMap<ProductId, usize>,
    brand_index: HashMap<String, Vec<usize>>,
}

/// Aggregate numbers about a catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub legacy_tagged: usize,
    pub brand_tagged: usize,
    pub untagged: usize,
    pub eco_friendly: usize,
    /// Product count per brand, sorted by brand name
    pub brands: BTreeMap<String, usize>,
}

impl CatalogIndex {
    /// Build an index from products, rejecting empty or duplicate ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut index = CatalogIndex {
            positions: HashMap::with_capacity(products.len()),
            products,
            brand_index: HashMap::new(),
        };

        for (position, product) in index.products.iter().enumerate() {
            if product.id.is_empty() {
                return Err(CatalogError::InvalidValue {
                    field: "id".to_string(),
                    value: format!("<empty> at position {}", position),
                });
            }
            if index.positions.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: product.id.clone(),
                });
            }
        }

        index.build_secondary_indices();
        Ok(index)
    }

    /// Load and validate a catalog JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let products = parser::parse_catalog(path)?;
        tracing::info!("Loaded {} products from {}", products.len(), path.display());
        Self::from_products(products)
    }

    fn build_secondary_indices(&mut self) {
        for (position, product) in self.products.iter().enumerate() {
            if let Some(brand) = product.brand_tag() {
                self.brand_index
                    .entry(brand.to_string())
                    .or_default()
                    .push(position);
            }
        }
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Consume the index, returning the products in display order.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.positions.get(id).map(|&position| &self.products[position])
    }

    /// Products of one brand, in display order.
    pub fn get_products_by_brand(&self, brand: &str) -> Vec<&Product> {
        self.brand_index
            .get(brand)
            .map(|positions| positions.iter().map(|&p| &self.products[p]).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total: self.products.len(),
            ..Default::default()
        };

        for product in &self.products {
            match product.shape() {
                ProductShape::LegacyTagged => stats.legacy_tagged += 1,
                ProductShape::BrandTagged => stats.brand_tagged += 1,
                ProductShape::Untagged => stats.untagged += 1,
            }
            if product.is_eco_friendly() {
                stats.eco_friendly += 1;
            }
        }

        stats.brands = self
            .brand_index
            .iter()
            .map(|(brand, positions)| (brand.clone(), positions.len()))
            .collect();

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("1").with_brand("Zara").with_eco_friendly(false),
            Product::new("2").with_brand("Patagonia").with_eco_friendly(true),
            Product::new("3").with_brand("Zara").with_style("minimal").with_color("black"),
            Product::new("4"),
        ]
    }

    #[test]
    fn test_lookup_by_id() {
        let index = CatalogIndex::from_products(sample_products()).unwrap();

        assert_eq!(index.len(), 4);
        assert_eq!(index.get_product("2").unwrap().brand.as_deref(), Some("Patagonia"));
        assert!(index.get_product("99").is_none());
        assert_eq!(index.get_product("4").unwrap().shape(), ProductShape::Untagged);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut products = sample_products();
        products.push(Product::new("2"));

        match CatalogIndex::from_products(products) {
            Err(CatalogError::DuplicateId { id }) => assert_eq!(id, "2"),
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = CatalogIndex::from_products(vec![Product::new("")]);
        assert!(matches!(result, Err(CatalogError::InvalidValue { .. })));
    }

    #[test]
    fn test_brand_index_keeps_display_order() {
        let index = CatalogIndex::from_products(sample_products()).unwrap();

        let zara: Vec<&str> = index
            .get_products_by_brand("Zara")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(zara, vec!["1", "3"]);
        assert!(index.get_products_by_brand("COS").is_empty());
    }

    #[test]
    fn test_stats() {
        let index = CatalogIndex::from_products(sample_products()).unwrap();
        let stats = index.stats();

        assert_eq!(stats.total, 4);
        assert_eq!(stats.legacy_tagged, 1);
        assert_eq!(stats.brand_tagged, 2);
        assert_eq!(stats.untagged, 1);
        assert_eq!(stats.eco_friendly, 1);
        assert_eq!(stats.brands.get("Zara"), Some(&2));
        assert_eq!(stats.brands.get("Patagonia"), Some(&1));
    }

    #[test]
    fn test_empty_catalog() {
        let index = CatalogIndex::from_products(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.stats(), CatalogStats::default());
    }
}
