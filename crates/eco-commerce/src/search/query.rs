//! Search query builder.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::{Currency, Money};
use crate::search::{Facet, Filter, Pagination, SearchResults};
use crate::CommerceError;

/// Upper bound of the storefront price slider, in whole currency units.
pub const DEFAULT_MAX_PRICE: i64 = 5000;

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by carbon, lowest first.
    #[default]
    Co2Asc,
    /// Sort by carbon, highest first.
    Co2Desc,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Co2Asc,
        SortOption::Co2Desc,
        SortOption::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Co2Asc => "co2-asc",
            SortOption::Co2Desc => "co2-desc",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Co2Asc => "CO2: Low to High",
            SortOption::Co2Desc => "CO2: High to Low",
            SortOption::Rating => "Highest Rated",
        }
    }

    /// Compare two products under this ordering.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::PriceAsc => a.price.amount_minor.cmp(&b.price.amount_minor),
            SortOption::PriceDesc => b.price.amount_minor.cmp(&a.price.amount_minor),
            SortOption::Co2Asc => a.co2_kg.total_cmp(&b.co2_kg),
            SortOption::Co2Desc => b.co2_kg.total_cmp(&a.co2_kg),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == wanted)
            .ok_or_else(|| CommerceError::UnknownValue {
                kind: "sort option",
                value: s.to_string(),
            })
    }
}

/// A search query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text query.
    pub query: Option<String>,
    /// Filters to apply; a product must pass all of them.
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Whether to include facets in results.
    pub include_facets: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new() -> Self {
        Self {
            query: None,
            filters: Vec::new(),
            sort: SortOption::default(),
            page: 1,
            per_page: 24,
            include_facets: false,
        }
    }

    /// The storefront default: everything priced 0 to 5000 whole units.
    pub fn storefront(currency: Currency) -> Self {
        Self::new().with_filter(Filter::price_range(
            Some(Money::zero(currency)),
            Some(Money::from_whole(DEFAULT_MAX_PRICE, currency)),
        ))
    }

    /// Set the text query. Blank queries are ignored.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.is_empty() {
            self.query = Some(q.clone());
            self.filters.push(Filter::Text(q));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Enable facets.
    pub fn with_facets(mut self) -> Self {
        self.include_facets = true;
        self
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Run the query over a product list.
    ///
    /// Sorting is stable, so ties keep catalog order.
    pub fn run<'a>(&self, products: &'a [Product]) -> SearchResults<&'a Product> {
        let mut hits: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        hits.sort_by(|a, b| self.sort.compare(a, b));

        let total = hits.len() as i64;
        let pagination = Pagination::new(self.page, self.per_page, total);
        let items: Vec<&Product> = hits
            .into_iter()
            .skip(usize::try_from(self.offset()).unwrap_or(0))
            .take(usize::try_from(self.per_page).unwrap_or(0))
            .collect();

        tracing::debug!(
            query = self.query.as_deref().unwrap_or(""),
            filters = self.filters.len(),
            total,
            "search executed"
        );

        let results = SearchResults::new(items, pagination);
        if self.include_facets {
            results.with_facets(Facet::catalog_facets(products))
        } else {
            results
        }
    }
}
