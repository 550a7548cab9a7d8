//! CLI command implementations.

pub mod account;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod orders;

use clap::{Args, Subcommand};
use eco_commerce::catalog::{AlternativeSort, Category};
use eco_commerce::checkout::{OrderStatus, PaymentMode};
use eco_commerce::search::SortOption;

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Full name.
    #[arg(short, long)]
    pub name: String,

    /// Email address.
    #[arg(short, long)]
    pub email: String,

    /// 10-digit phone number.
    #[arg(short, long)]
    pub phone: String,

    /// Password (prompted when omitted).
    #[arg(long)]
    pub password: Option<String>,

    /// Register as a store administrator.
    #[arg(long)]
    pub admin: bool,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address.
    #[arg(short, long)]
    pub email: String,

    /// Password (prompted when omitted).
    #[arg(long)]
    pub password: Option<String>,

    /// Sign in as a store administrator.
    #[arg(long)]
    pub admin: bool,
}

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    /// New display name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// New 10-digit phone number.
    #[arg(short, long)]
    pub phone: Option<String>,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Text to search for (fuzzy).
    pub query: Option<String>,

    /// Only this category (e.g. kitchen, footwear).
    #[arg(long)]
    pub category: Option<Category>,

    /// Only this brand.
    #[arg(long)]
    pub brand: Option<String>,

    /// Only products offered in this color.
    #[arg(long)]
    pub color: Option<String>,

    /// Lowest price, in whole units.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Highest price, in whole units (default from config).
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Hide sold-out products.
    #[arg(long)]
    pub in_stock: bool,

    /// Only Eco Star products (under 2 kg CO2).
    #[arg(long)]
    pub eco_star: bool,

    /// Sort order: price-asc, price-desc, co2-asc, co2-desc, rating.
    #[arg(short, long)]
    pub sort: Option<SortOption>,

    /// Page number.
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Products per page (default from config).
    #[arg(long)]
    pub per_page: Option<i64>,

    /// Show brand, category and color counts.
    #[arg(long)]
    pub facets: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,

    /// Order alternatives by co2, price or rating.
    #[arg(long, default_value = "co2")]
    pub alternatives: AlternativeSort,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,

    /// Coupon code to preview (ECO10, GREEN50, SAVE100).
    #[arg(long)]
    pub coupon: Option<String>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart and its summary.
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        id: String,
        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: i64,
    },
    /// Set a product's quantity (0 removes it).
    Update {
        /// Product ID.
        id: String,
        /// New quantity.
        quantity: i64,
    },
    /// Remove a product.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommand>,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// List saved products.
    Show,
    /// Save or unsave a product.
    Toggle {
        /// Product ID.
        id: String,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Street address.
    #[arg(long)]
    pub street: String,

    /// City.
    #[arg(long)]
    pub city: String,

    /// State.
    #[arg(long)]
    pub state: String,

    /// 6-digit pincode.
    #[arg(long)]
    pub pincode: String,

    /// Payment mode: cod, upi or card.
    #[arg(long, default_value = "cod")]
    pub payment: PaymentMode,

    /// Coupon code.
    #[arg(long)]
    pub coupon: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    /// Show one order in detail.
    pub id: Option<String>,
}

/// Arguments for the review command.
#[derive(Args)]
pub struct ReviewArgs {
    /// Order ID.
    pub order: String,

    /// Stars, 1 to 5.
    #[arg(short, long)]
    pub rating: u8,

    /// Review text.
    #[arg(short = 'm', long)]
    pub comment: String,

    /// Product to review (default: the order's first item).
    #[arg(short, long)]
    pub product: Option<String>,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Dashboard figures.
    Stats,
    /// Add a product to the catalog.
    AddProduct(AddProductArgs),
    /// Set a product's stock level.
    Stock {
        /// Product ID.
        id: String,
        /// New stock level.
        stock: i64,
    },
    /// Set a product's price.
    Price {
        /// Product ID.
        id: String,
        /// New price, in whole units (decimals allowed).
        price: f64,
    },
    /// List every order.
    Orders {
        /// Only orders with this status.
        #[arg(long)]
        status: Option<OrderStatus>,
    },
    /// Move an order to a new status.
    OrderStatus {
        /// Order ID.
        id: String,
        /// pending, packed, shipped or delivered.
        status: OrderStatus,
    },
    /// List every product review.
    Reviews,
}

/// Arguments for adding a product.
#[derive(Args)]
pub struct AddProductArgs {
    /// Product name.
    #[arg(long)]
    pub name: String,

    /// Brand.
    #[arg(long)]
    pub brand: String,

    /// Price, in whole units.
    #[arg(long)]
    pub price: f64,

    /// Carbon footprint per unit, in kg.
    #[arg(long)]
    pub co2: f64,

    /// Description.
    #[arg(long)]
    pub description: String,

    /// Units in stock.
    #[arg(long)]
    pub stock: i64,

    /// Category.
    #[arg(long)]
    pub category: Category,

    /// Comma separated colors.
    #[arg(long, default_value = "")]
    pub colors: String,

    /// Image URL.
    #[arg(long)]
    pub image: Option<String>,

    /// Delivery charge per unit.
    #[arg(long)]
    pub delivery: Option<f64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File format (toml or json).
        #[arg(long, default_value = "toml", value_parser = ["toml", "json"])]
        format: String,
    },
}
