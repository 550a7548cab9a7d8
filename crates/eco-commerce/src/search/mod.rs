//! Search module.
//!
//! Fuzzy matching, filters, sorting, facets and pagination over the catalog.

mod filter;
mod fuzzy;
mod query;
mod results;

pub use filter::Filter;
pub use fuzzy::{fuzzy_match, match_ratio, FUZZY_MATCH_THRESHOLD};
pub use query::{SearchQuery, SortOption, DEFAULT_MAX_PRICE};
pub use results::{Facet, FacetValue, Pagination, SearchResults};
