//! Demo catalog loaded on first run.

use crate::catalog::{Catalog, Category, Product};
use crate::money::{Currency, Money};

struct SeedRow {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    price: i64,
    co2_kg: f64,
    stock: i64,
    category: Category,
    delivery: i64,
    colors: &'static [&'static str],
    sizes: Option<&'static [&'static str]>,
    rating: f64,
    description: &'static str,
}

const ROWS: &[SeedRow] = &[
    SeedRow {
        id: "1",
        name: "Organic Cotton T-Shirt",
        brand: "EarthWear",
        price: 599,
        co2_kg: 2.1,
        stock: 50,
        category: Category::Clothing,
        delivery: 0,
        colors: &["White", "Green", "Beige"],
        sizes: Some(&["S", "M", "L", "XL"]),
        rating: 4.6,
        description: "Soft everyday tee made from GOTS certified organic cotton.",
    },
    SeedRow {
        id: "2",
        name: "Hemp Denim Jacket",
        brand: "EarthWear",
        price: 2499,
        co2_kg: 8.5,
        stock: 15,
        category: Category::Clothing,
        delivery: 50,
        colors: &["Indigo", "Black"],
        sizes: Some(&["M", "L", "XL"]),
        rating: 4.4,
        description: "Durable jacket woven from a hemp and recycled cotton blend.",
    },
    SeedRow {
        id: "3",
        name: "Linen Kurta",
        brand: "Khadi Roots",
        price: 1199,
        co2_kg: 1.8,
        stock: 30,
        category: Category::Clothing,
        delivery: 0,
        colors: &["White", "Sky Blue"],
        sizes: Some(&["S", "M", "L"]),
        rating: 4.7,
        description: "Breathable handloom linen kurta dyed with natural pigments.",
    },
    SeedRow {
        id: "4",
        name: "Bamboo Sunglasses",
        brand: "Tribe Optics",
        price: 899,
        co2_kg: 1.2,
        stock: 25,
        category: Category::Accessories,
        delivery: 40,
        colors: &["Brown"],
        sizes: None,
        rating: 4.3,
        description: "Polarised lenses in a lightweight bamboo frame.",
    },
    SeedRow {
        id: "5",
        name: "Recycled Steel Watch",
        brand: "Tribe Optics",
        price: 3499,
        co2_kg: 6.4,
        stock: 8,
        category: Category::Accessories,
        delivery: 0,
        colors: &["Silver", "Black"],
        sizes: None,
        rating: 4.5,
        description: "Minimal analog watch with a recycled stainless steel case.",
    },
    SeedRow {
        id: "6",
        name: "Jute Tote Bag",
        brand: "Loom & Leaf",
        price: 349,
        co2_kg: 0.8,
        stock: 60,
        category: Category::Bags,
        delivery: 0,
        colors: &["Natural", "Olive"],
        sizes: None,
        rating: 4.6,
        description: "Sturdy jute shopping bag with cotton handles.",
    },
    SeedRow {
        id: "7",
        name: "Recycled PET Backpack",
        brand: "Loom & Leaf",
        price: 1899,
        co2_kg: 4.2,
        stock: 18,
        category: Category::Bags,
        delivery: 60,
        colors: &["Grey", "Navy"],
        sizes: None,
        rating: 4.4,
        description: "Laptop backpack made from recycled plastic bottles.",
    },
    SeedRow {
        id: "8",
        name: "Solar Power Bank",
        brand: "SunCell",
        price: 1599,
        co2_kg: 5.5,
        stock: 20,
        category: Category::Electronics,
        delivery: 0,
        colors: &["Black"],
        sizes: None,
        rating: 4.2,
        description: "10000 mAh power bank with a built-in solar panel.",
    },
    SeedRow {
        id: "9",
        name: "Bamboo Wireless Charger",
        brand: "SunCell",
        price: 999,
        co2_kg: 1.9,
        stock: 0,
        category: Category::Electronics,
        delivery: 30,
        colors: &["Natural"],
        sizes: None,
        rating: 4.1,
        description: "Qi charging pad in a sustainably harvested bamboo shell.",
    },
    SeedRow {
        id: "10",
        name: "Stainless Steel Water Bottle",
        brand: "Hydra",
        price: 699,
        co2_kg: 2.8,
        stock: 40,
        category: Category::Kitchen,
        delivery: 0,
        colors: &["Silver", "Green", "Blue"],
        sizes: None,
        rating: 4.8,
        description: "Insulated bottle that keeps drinks cold for 24 hours.",
    },
    SeedRow {
        id: "11",
        name: "Coconut Shell Bowl Set",
        brand: "Hydra",
        price: 549,
        co2_kg: 0.4,
        stock: 12,
        category: Category::Kitchen,
        delivery: 40,
        colors: &["Brown"],
        sizes: None,
        rating: 4.5,
        description: "Set of two hand-polished coconut shell bowls.",
    },
    SeedRow {
        id: "12",
        name: "Cork Yoga Mat",
        brand: "FitEarth",
        price: 1799,
        co2_kg: 3.6,
        stock: 22,
        category: Category::Sports,
        delivery: 80,
        colors: &["Natural"],
        sizes: None,
        rating: 4.6,
        description: "Non-slip cork mat backed with natural tree rubber.",
    },
    SeedRow {
        id: "13",
        name: "Bamboo Toothbrush",
        brand: "GreenSmile",
        price: 99,
        co2_kg: 0.2,
        stock: 120,
        category: Category::Beauty,
        delivery: 0,
        colors: &["Natural", "Charcoal"],
        sizes: None,
        rating: 4.7,
        description: "Biodegradable toothbrush with charcoal infused bristles.",
    },
    SeedRow {
        id: "14",
        name: "Seed Paper Notebook",
        brand: "PaperLeaf",
        price: 249,
        co2_kg: 0.6,
        stock: 45,
        category: Category::Stationery,
        delivery: 0,
        colors: &["Cream"],
        sizes: None,
        rating: 4.5,
        description: "Notebook with a plantable seed paper cover.",
    },
    SeedRow {
        id: "15",
        name: "Recycled Rubber Sneakers",
        brand: "SoleCycle",
        price: 2999,
        co2_kg: 9.8,
        stock: 14,
        category: Category::Footwear,
        delivery: 0,
        colors: &["White", "Grey"],
        sizes: Some(&["7", "8", "9", "10"]),
        rating: 4.3,
        description: "Sneakers with soles made from reclaimed tyre rubber.",
    },
    SeedRow {
        id: "16",
        name: "Organic Cotton Bedsheet",
        brand: "Khadi Roots",
        price: 1499,
        co2_kg: 4.9,
        stock: 16,
        category: Category::Home,
        delivery: 70,
        colors: &["White", "Beige"],
        sizes: Some(&["Single", "Double", "King"]),
        rating: 4.6,
        description: "Percale weave bedsheet in undyed organic cotton.",
    },
];

impl SeedRow {
    fn to_product(&self, currency: Currency) -> Product {
        let mut product = Product::new(
            self.name,
            self.brand,
            Money::from_whole(self.price, currency),
            self.co2_kg,
            self.category,
        )
        .with_id(self.id)
        .with_description(self.description)
        .with_stock(self.stock)
        .with_delivery_charge(Money::from_whole(self.delivery, currency))
        .with_colors(self.colors.iter().copied());
        product.sizes = self
            .sizes
            .map(|sizes| sizes.iter().map(|s| s.to_string()).collect());
        product.rating = self.rating;
        product
    }
}

/// The demo catalog, priced in `currency`.
pub fn demo_catalog(currency: Currency) -> Catalog {
    Catalog::new(ROWS.iter().map(|row| row.to_product(currency)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use std::collections::HashSet;

    #[test]
    fn test_demo_catalog_ids_unique() {
        let catalog = demo_catalog(Currency::INR);
        let ids: HashSet<&ProductId> = catalog.iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_demo_catalog_covers_every_category() {
        let catalog = demo_catalog(Currency::INR);
        for category in Category::ALL {
            assert!(catalog.iter().any(|p| p.category == category), "{category} missing");
        }
    }

    #[test]
    fn test_demo_catalog_values_valid() {
        for p in demo_catalog(Currency::INR).iter() {
            assert!(p.price.is_positive());
            assert!(p.co2_kg >= 0.0);
            assert!(p.stock >= 0);
            assert!(!p.delivery_charge.is_negative());
        }
    }
}
