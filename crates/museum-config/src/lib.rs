//! # museum-config: Loading Rates and Settings
//!
//! The data-loading side of museum ticketing. `museum-core` never touches the
//! file system; this crate reads the config file, applies environment
//! overrides, and loads (and checks) the rate table handed to the core.
//!
//! ## Module Organization
//! ```text
//! museum_config/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── config.rs       ◄─── MuseumConfig: museum.toml + MUSEUM_* env vars
//! ├── pricing.rs      ◄─── Rate file loading (.json / .toml) + validation
//! ├── error.rs        ◄─── ConfigError
//! └── bin/receipt.rs  ◄─── Command-line receipt printer
//! ```
//!
//! ## Example Usage
//! ```rust,no_run
//! use museum_config::MuseumConfig;
//! use museum_core::{Receipt, TicketRequest};
//!
//! let config = MuseumConfig::load(None)?;
//! let table = config.pricing_table()?;
//!
//! let purchases = vec![TicketRequest::new("general", "adult", ["movie"])];
//! let receipt = Receipt::from_purchases(&table, &purchases)?.with_header(config.receipt_header());
//! println!("{}", receipt);
//! # Ok::<(), museum_config::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod pricing;

pub use config::MuseumConfig;
pub use error::{ConfigError, ConfigResult};
pub use pricing::{default_pricing_table, load_pricing_table, PricingFormat};
