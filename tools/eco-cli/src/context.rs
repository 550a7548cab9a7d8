//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use eco_commerce::accounts::User;
use eco_commerce::cart::Cart;
use eco_commerce::state::AppState;
use eco_commerce::storage::{Repository, Store};
use eco_commerce::wishlist::Wishlist;
use eco_commerce::Currency;

use crate::config::CliConfig;
use crate::output::Output;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ECOBAZAAR_DATA_DIR";

/// Config file names searched from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["ecobazaar.toml", ".ecobazaar.toml", "ecobazaar.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
    data_dir: PathBuf,
}

impl Context {
    /// Load context from config file.
    ///
    /// The data directory comes from `--data-dir`, then `ECOBAZAAR_DATA_DIR`,
    /// then `[store] data_dir`, then the per-user data directory.
    pub fn load(config_path: Option<&str>, data_dir: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };
        config.validate()?;

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        let data_dir = data_dir
            .map(str::to_string)
            .or_else(|| std::env::var(DATA_DIR_ENV).ok().filter(|d| !d.is_empty()))
            .or_else(|| config.store.data_dir.clone())
            .map(|dir| resolve_against(&cwd, &dir))
            .unwrap_or_else(|| dirs_path().join("ecobazaar"));

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
            data_dir,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The storefront data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Currency of the storefront.
    pub fn currency(&self) -> Currency {
        self.config.storefront.currency
    }

    /// Open the repository over the data directory.
    pub fn repository(&self) -> Result<Repository> {
        let store = Store::open(self.data_dir.clone())
            .with_context(|| format!("Failed to open data directory: {}", self.data_dir.display()))?;
        Ok(Repository::new(store, self.currency()))
    }

    /// Load the repository and the application state in one go.
    pub fn session(&self) -> Result<Session> {
        let repo = self.repository()?;
        let state = repo.load().context("Failed to load storefront state")?;
        Ok(Session { repo, state })
    }
}

/// The state loaded for one command, saved back on success.
pub struct Session {
    pub repo: Repository,
    pub state: AppState,
}

impl Session {
    /// Persist the state.
    pub fn save(&self) -> Result<()> {
        self.repo.save(&self.state).context("Failed to save storefront state")
    }

    /// The signed-in user.
    pub fn user(&self) -> Result<&User> {
        Ok(self.state.require_user()?)
    }

    /// The signed-in admin.
    pub fn admin(&self) -> Result<&User> {
        Ok(self.state.require_admin()?)
    }

    /// The signed-in user's cart.
    pub fn cart(&self) -> Result<Cart> {
        let user = self.user()?;
        Ok(self.repo.load_cart(&user.id)?)
    }

    pub fn save_cart(&self, cart: &Cart) -> Result<()> {
        let user = self.user()?;
        Ok(self.repo.save_cart(&user.id, cart)?)
    }

    /// The signed-in user's wishlist.
    pub fn wishlist(&self) -> Result<Wishlist> {
        let user = self.user()?;
        Ok(self.repo.load_wishlist(&user.id)?)
    }

    pub fn save_wishlist(&self, wishlist: &Wishlist) -> Result<()> {
        let user = self.user()?;
        Ok(self.repo.save_wishlist(&user.id, wishlist)?)
    }
}

/// Resolve a path relative to `base`.
fn resolve_against(base: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        base.join(path)
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_against() {
        let base = Path::new("/srv/shop");
        assert_eq!(resolve_against(base, "data"), PathBuf::from("/srv/shop/data"));
        assert_eq!(resolve_against(base, "/var/eco"), PathBuf::from("/var/eco"));
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("ecobazaar.toml"),
            "[rewards]\nfloor_negative_points = true\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap();
        assert!(config.rewards.floor_negative_points);
        assert_eq!(path, dir.path().join("ecobazaar.toml"));
    }
}
