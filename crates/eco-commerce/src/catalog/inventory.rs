//! Catalog collection and admin inventory operations.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product, DEFAULT_IMAGE_URL};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::CommerceError;

/// The product list owned by the application state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, or fail with `ProductNotFound`.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub(crate) fn require_mut(&mut self, id: &ProductId) -> Result<&mut Product, CommerceError> {
        self.products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Append a product.
    pub fn add(&mut self, product: Product) -> &Product {
        tracing::info!(product_id = %product.id, name = %product.name, "product added");
        self.products.push(product);
        &self.products[self.products.len() - 1]
    }

    /// Set a product's stock level.
    pub fn update_stock(&mut self, id: &ProductId, stock: i64) -> Result<&Product, CommerceError> {
        if stock < 0 {
            return Err(CommerceError::InvalidStock(stock));
        }
        let product = self.require_mut(id)?;
        tracing::info!(product_id = %id, from = product.stock, to = stock, "stock updated");
        product.stock = stock;
        Ok(product)
    }

    /// Set a product's unit price.
    pub fn update_price(&mut self, id: &ProductId, price: Money) -> Result<&Product, CommerceError> {
        if price.is_negative() {
            return Err(CommerceError::InvalidPrice(price.display()));
        }
        let product = self.require_mut(id)?;
        if product.price.currency != price.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: product.price.currency.code().to_string(),
                got: price.currency.code().to_string(),
            });
        }
        tracing::info!(product_id = %id, from = %product.price, to = %price, "price updated");
        product.price = price;
        Ok(product)
    }

    /// Products with 0 < stock < 20.
    pub fn low_stock(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }

    /// Products with no stock left.
    pub fn out_of_stock(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_out_of_stock()).collect()
    }
}

/// The admin "add product" form.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub price: Option<f64>,
    pub co2_kg: Option<f64>,
    pub description: String,
    pub stock: Option<i64>,
    /// Comma separated, e.g. "Green, Beige".
    pub colors: String,
    pub category: Option<Category>,
    pub image_url: Option<String>,
    pub delivery_charge: Option<f64>,
}

impl ProductDraft {
    /// Validate the form and build a new product.
    pub fn into_product(self, currency: Currency) -> Result<Product, CommerceError> {
        let name = required_text(&self.name, "name")?;
        let brand = required_text(&self.brand, "brand")?;
        let description = required_text(&self.description, "description")?;
        let price = self.price.ok_or(CommerceError::MissingField("price"))?;
        let co2_kg = self.co2_kg.ok_or(CommerceError::MissingField("co2"))?;
        let stock = self.stock.ok_or(CommerceError::MissingField("stock"))?;
        let category = self.category.ok_or(CommerceError::MissingField("category"))?;

        let price = non_negative_money(price, currency)?;
        let delivery_charge = non_negative_money(self.delivery_charge.unwrap_or(0.0), currency)?;
        if !co2_kg.is_finite() || co2_kg < 0.0 {
            return Err(CommerceError::InvalidCarbon(co2_kg));
        }
        if stock < 0 {
            return Err(CommerceError::InvalidStock(stock));
        }

        let image = self
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        let mut product = Product::new(name, brand, price, co2_kg, category)
            .with_description(description)
            .with_stock(stock)
            .with_delivery_charge(delivery_charge)
            .with_colors(parse_colors(&self.colors));
        product.image = image;
        Ok(product)
    }
}

/// Split a comma separated color list, dropping blanks.
pub fn parse_colors(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn required_text(value: &str, field: &'static str) -> Result<String, CommerceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommerceError::MissingField(field));
    }
    Ok(value.to_string())
}

fn non_negative_money(amount: f64, currency: Currency) -> Result<Money, CommerceError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CommerceError::InvalidPrice(amount.to_string()));
    }
    Ok(Money::from_decimal(amount, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Jute Tote".to_string(),
            brand: "Loom & Leaf".to_string(),
            price: Some(349.0),
            co2_kg: Some(0.8),
            description: "Sturdy jute shopping bag".to_string(),
            stock: Some(25),
            colors: "Natural, , Olive ".to_string(),
            category: Some(Category::Bags),
            image_url: None,
            delivery_charge: None,
        }
    }

    #[test]
    fn test_draft_into_product() {
        let product = draft().into_product(Currency::INR).unwrap();
        assert_eq!(product.price, Money::from_whole(349, Currency::INR));
        assert_eq!(product.colors, vec!["Natural", "Olive"]);
        assert_eq!(product.image, DEFAULT_IMAGE_URL);
        assert!(product.has_free_delivery());
        assert_eq!(product.rating, 4.5);
    }

    #[test]
    fn test_draft_missing_fields() {
        let mut d = draft();
        d.brand = "  ".to_string();
        assert!(matches!(
            d.into_product(Currency::INR),
            Err(CommerceError::MissingField("brand"))
        ));

        let mut d = draft();
        d.category = None;
        assert!(matches!(
            d.into_product(Currency::INR),
            Err(CommerceError::MissingField("category"))
        ));
    }

    #[test]
    fn test_draft_rejects_negative_values() {
        let mut d = draft();
        d.stock = Some(-1);
        assert!(matches!(
            d.into_product(Currency::INR),
            Err(CommerceError::InvalidStock(-1))
        ));

        let mut d = draft();
        d.price = Some(-5.0);
        assert!(matches!(
            d.into_product(Currency::INR),
            Err(CommerceError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_update_stock_and_price() {
        let product = draft().into_product(Currency::INR).unwrap();
        let id = product.id.clone();
        let mut catalog = Catalog::new(vec![product]);

        catalog.update_stock(&id, 5).unwrap();
        assert_eq!(catalog.low_stock().len(), 1);

        catalog.update_stock(&id, 0).unwrap();
        assert_eq!(catalog.out_of_stock().len(), 1);
        assert!(catalog.low_stock().is_empty());

        assert!(matches!(
            catalog.update_stock(&id, -3),
            Err(CommerceError::InvalidStock(-3))
        ));

        catalog
            .update_price(&id, Money::from_whole(299, Currency::INR))
            .unwrap();
        assert_eq!(
            catalog.require(&id).unwrap().price,
            Money::from_whole(299, Currency::INR)
        );
    }

    #[test]
    fn test_update_unknown_product() {
        let mut catalog = Catalog::default();
        assert!(matches!(
            catalog.update_stock(&ProductId::new("missing"), 1),
            Err(CommerceError::ProductNotFound(_))
        ));
    }
}
