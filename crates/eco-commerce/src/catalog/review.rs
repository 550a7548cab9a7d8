//! Customer reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::{ProductId, ReviewId, UserId};
use crate::CommerceError;

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// A review left on a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub user_name: String,
    /// Stars, 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Review {
    /// Validate and build a review. The comment is trimmed.
    pub fn new(
        user_id: UserId,
        user_name: impl Into<String>,
        rating: u8,
        comment: &str,
    ) -> Result<Self, CommerceError> {
        if rating == 0 || rating > MAX_RATING {
            return Err(CommerceError::InvalidRating(rating));
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(CommerceError::EmptyReview);
        }

        Ok(Self {
            id: ReviewId::generate(),
            user_id,
            user_name: user_name.into(),
            rating,
            comment: comment.to_string(),
            created_at: Utc::now(),
            images: Vec::new(),
        })
    }
}

impl Product {
    /// Append a review and recompute the average rating.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        self.rating = f64::from(total) / self.reviews.len() as f64;
    }
}

/// A review paired with the product it was left on, for the admin listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductReview<'a> {
    pub product_id: &'a ProductId,
    pub product_name: &'a str,
    pub review: &'a Review,
}

/// Every review across the catalog, product by product.
pub fn all_reviews(products: &[Product]) -> Vec<ProductReview<'_>> {
    products
        .iter()
        .flat_map(|p| {
            p.reviews.iter().map(move |review| ProductReview {
                product_id: &p.id,
                product_name: &p.name,
                review,
            })
        })
        .collect()
}
