//! Search results, facets and pagination.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of matching items.
    pub total: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> i64 {
        (self.page * self.per_page).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 24, 0)
    }
}

/// Search results container.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    /// The result items on this page.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
    /// Facets (if requested).
    pub facets: Vec<Facet>,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self {
            items,
            pagination,
            facets: Vec::new(),
        }
    }

    /// Set facets.
    pub fn with_facets(mut self, facets: Vec<Facet>) -> Self {
        self.facets = facets;
        self
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Distinct values of one product field, in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Brand").
    pub name: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create an empty facet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Count one occurrence of `value`, appending it if unseen.
    pub fn add_value(&mut self, value: &str) {
        match self.values.iter_mut().find(|v| v.value == value) {
            Some(existing) => existing.count += 1,
            None => self.values.push(FacetValue {
                value: value.to_string(),
                count: 1,
            }),
        }
    }

    /// The facet's values without counts.
    pub fn value_names(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.value.as_str()).collect()
    }

    /// Brand, category and color facets for a product list.
    pub fn catalog_facets(products: &[Product]) -> Vec<Facet> {
        let mut brands = Facet::new("Brand");
        let mut categories = Facet::new("Category");
        let mut colors = Facet::new("Color");
        for product in products {
            brands.add_value(&product.brand);
            categories.add_value(product.category.display_name());
            for color in &product.colors {
                colors.add_value(color);
            }
        }
        vec![brands, categories, colors]
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of products with this value.
    pub count: i64,
}
