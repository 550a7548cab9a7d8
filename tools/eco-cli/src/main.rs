//! EcoBazaar CLI - Command line storefront for eco-friendly shopping.
//!
//! Commands:
//! - `ecobazaar register` / `login` / `logout` / `whoami` / `profile` - Accounts
//! - `ecobazaar products` - Search the catalog
//! - `ecobazaar product <id>` - Product detail with greener alternatives
//! - `ecobazaar cart` / `wishlist` - Manage the basket
//! - `ecobazaar checkout` - Place an order
//! - `ecobazaar orders` / `review` / `footprint` - Order history and impact
//! - `ecobazaar admin` - Inventory, orders and dashboard
//! - `ecobazaar config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AdminArgs, CartArgs, CheckoutArgs, ConfigArgs, LoginArgs, OrdersArgs, ProductArgs, ProductsArgs,
    ProfileArgs, RegisterArgs, ReviewArgs, WishlistArgs,
};

/// EcoBazaar - Shop sustainably and track your carbon footprint
#[derive(Parser)]
#[command(name = "ecobazaar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory holding the storefront data
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Register(RegisterArgs),

    /// Sign in
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Show or edit your profile
    Profile(ProfileArgs),

    /// Search and browse products
    Products(ProductsArgs),

    /// Show one product and its greener alternatives
    Product(ProductArgs),

    /// Manage your cart
    Cart(CartArgs),

    /// Manage your wishlist
    Wishlist(WishlistArgs),

    /// Place an order for the items in your cart
    Checkout(CheckoutArgs),

    /// List your orders
    Orders(OrdersArgs),

    /// Review a product from a past order
    Review(ReviewArgs),

    /// Show your lifetime carbon footprint
    Footprint,

    /// Store administration
    Admin(AdminArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.data_dir.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Register(args) => commands::account::register(args, &ctx),
        Commands::Login(args) => commands::account::login(args, &ctx),
        Commands::Logout => commands::account::logout(&ctx),
        Commands::Whoami => commands::account::whoami(&ctx),
        Commands::Profile(args) => commands::account::profile(args, &ctx),
        Commands::Products(args) => commands::catalog::products(args, &ctx),
        Commands::Product(args) => commands::catalog::product(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Wishlist(args) => commands::cart::wishlist(args, &ctx),
        Commands::Checkout(args) => commands::orders::checkout(args, &ctx),
        Commands::Orders(args) => commands::orders::list(args, &ctx),
        Commands::Review(args) => commands::orders::review(args, &ctx),
        Commands::Footprint => commands::orders::footprint(&ctx),
        Commands::Admin(args) => commands::admin::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
