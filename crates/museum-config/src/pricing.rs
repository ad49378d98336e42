//! # Rate File Loading
//!
//! Reads the museum's rate table from disk and checks it before the pricing
//! code ever sees it.
//!
//! ## Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rate Table Sources                               │
//! │                                                                         │
//! │  tickets.json ──┐                                                       │
//! │                 ├──► parse_pricing_table() ──► validate_pricing_table() │
//! │  tickets.toml ──┘            ▲                          │               │
//! │                              │                          ▼               │
//! │  bundled data/tickets.json ──┘                    PricingTable          │
//! │  (when no file is configured)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## TOML Shape
//! ```toml
//! [general]
//! description = "General Admission"
//! priceInCents = { child = 2000, adult = 3000, senior = 2500 }
//!
//! [extras.movie]
//! description = "Movie Access"
//! priceInCents = { child = 1000, adult = 1000, senior = 1000 }
//! ```

use std::path::Path;

use museum_core::PricingTable;
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// The museum's published rates, bundled with the crate.
const BUNDLED_RATES: &str = include_str!("../data/tickets.json");

/// On-disk format of a rate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingFormat {
    Json,
    Toml,
}

impl PricingFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(PricingFormat::Json),
            Some("toml") => Ok(PricingFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parses and validates a rate table.
pub fn parse_pricing_table(contents: &str, format: PricingFormat) -> ConfigResult<PricingTable> {
    let table: PricingTable = match format {
        PricingFormat::Json => serde_json::from_str(contents)?,
        PricingFormat::Toml => toml::from_str(contents)?,
    };

    validate_pricing_table(&table)?;
    Ok(table)
}

/// Loads a rate table from a `.json` or `.toml` file.
pub fn load_pricing_table(path: &Path) -> ConfigResult<PricingTable> {
    let format = PricingFormat::from_path(path)?;
    info!(?path, ?format, "Loading rate table");

    let contents = std::fs::read_to_string(path)?;
    let table = parse_pricing_table(&contents, format)?;

    debug!(
        ticket_types = table.ticket_types().count(),
        extras = table.extra_names().count(),
        "Rate table loaded"
    );
    Ok(table)
}

/// Returns the bundled rate table.
pub fn default_pricing_table() -> ConfigResult<PricingTable> {
    parse_pricing_table(BUNDLED_RATES, PricingFormat::Json)
}

/// Checks the invariants the pricing code relies on.
///
/// ## Rules
/// - At least one ticket type is defined
/// - No price is negative (zero is allowed: free entry)
pub fn validate_pricing_table(table: &PricingTable) -> ConfigResult<()> {
    if table.ticket_types().next().is_none() {
        return Err(ConfigError::InvalidPricing(
            "at least one ticket type is required".into(),
        ));
    }

    for (name, rate) in table.rates() {
        if let Some((entrant, price)) = rate.price_in_cents.iter().find(|(_, p)| p.is_negative()) {
            return Err(ConfigError::InvalidPricing(format!(
                "{} price for '{}' is negative ({} cents)",
                entrant,
                name,
                price.cents()
            )));
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
