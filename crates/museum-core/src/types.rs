//! # Domain Types
//!
//! Core domain types used throughout museum ticketing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PricingTable   │   │      Rate       │   │  EntrantPrices  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  admissions ────┼──►│  description    │   │  child  (Money) │       │
//! │  │  extras ────────┼──►│  price_in_cents─┼──►│  adult  (Money) │       │
//! │  └─────────────────┘   └─────────────────┘   │  senior (Money) │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  TicketRequest  │   │  EntrantType    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  ticket_type    │   │  Child          │                             │
//! │  │  entrant_type   │   │  Adult          │                             │
//! │  │  extras         │   │  Senior         │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! The pricing table reads the same shape the museum publishes its rates in:
//! ```json
//! {
//!   "general": { "description": "General Admission",
//!                "priceInCents": { "child": 2000, "adult": 3000, "senior": 2500 } },
//!   "extras": {
//!     "movie": { "description": "Movie Access",
//!                "priceInCents": { "child": 1000, "adult": 1000, "senior": 1000 } }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::{PricingError, PricingResult, ReferenceKind};
use crate::money::Money;
use crate::EXTRAS_KEY;

// =============================================================================
// Entrant Type
// =============================================================================

/// Age-based visitor class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrantType {
    Child,
    Adult,
    Senior,
}

impl EntrantType {
    /// All entrant types, in rate-table order.
    pub const ALL: [EntrantType; 3] = [EntrantType::Child, EntrantType::Adult, EntrantType::Senior];

    /// The lowercase name used in requests and rate files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntrantType::Child => "child",
            EntrantType::Adult => "adult",
            EntrantType::Senior => "senior",
        }
    }
}

impl fmt::Display for EntrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match: `"Adult"` is not an entrant type.
impl FromStr for EntrantType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "child" => Ok(EntrantType::Child),
            "adult" => Ok(EntrantType::Adult),
            "senior" => Ok(EntrantType::Senior),
            other => Err(PricingError::not_found(ReferenceKind::EntrantType, other)),
        }
    }
}

// =============================================================================
// Rates
// =============================================================================

/// One price per entrant type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntrantPrices {
    pub child: Money,
    pub adult: Money,
    pub senior: Money,
}

impl EntrantPrices {
    /// Creates prices from cents, in child/adult/senior order.
    pub const fn from_cents(child: i64, adult: i64, senior: i64) -> Self {
        EntrantPrices {
            child: Money::from_cents(child),
            adult: Money::from_cents(adult),
            senior: Money::from_cents(senior),
        }
    }

    /// Returns the price for the given entrant.
    #[inline]
    pub const fn price_for(&self, entrant: EntrantType) -> Money {
        match entrant {
            EntrantType::Child => self.child,
            EntrantType::Adult => self.adult,
            EntrantType::Senior => self.senior,
        }
    }

    /// Iterates `(entrant, price)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (EntrantType, Money)> + '_ {
        EntrantType::ALL
            .into_iter()
            .map(move |entrant| (entrant, self.price_for(entrant)))
    }
}

/// A priced admission or add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    /// Human-readable label, e.g. "General Admission" or "Movie Access".
    #[serde(default)]
    pub description: String,

    /// Price for each entrant type.
    pub price_in_cents: EntrantPrices,
}

impl Rate {
    pub fn new(description: impl Into<String>, price_in_cents: EntrantPrices) -> Self {
        Rate {
            description: description.into(),
            price_in_cents,
        }
    }

    /// Returns the price for the given entrant.
    #[inline]
    pub fn price_for(&self, entrant: EntrantType) -> Money {
        self.price_in_cents.price_for(entrant)
    }
}

// =============================================================================
// Pricing Table
// =============================================================================

/// The full rate schedule: admissions keyed by ticket type plus add-ons.
///
/// ## Lookups
/// Every lookup is explicit and yields a [`PricingError`] when the name is
/// absent, so callers never probe the maps directly.
///
/// ## Example
/// ```rust
/// use museum_core::{EntrantPrices, PricingTable, Rate};
///
/// let table = PricingTable::new()
///     .with_admission("general", Rate::new("General Admission", EntrantPrices::from_cents(2000, 3000, 2500)))
///     .with_extra("movie", Rate::new("Movie Access", EntrantPrices::from_cents(1000, 1000, 1000)));
///
/// assert!(table.admission("general").is_ok());
/// assert!(table.admission("extras").is_err());
/// assert!(table.extra("terrace").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTable {
    /// Add-ons, serialized under the reserved `extras` key.
    #[serde(default)]
    extras: BTreeMap<String, Rate>,

    /// Every other top-level key is a ticket type.
    #[serde(flatten)]
    admissions: BTreeMap<String, Rate>,
}

impl PricingTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an admission rate.
    ///
    /// The reserved `extras` name is skipped: it is where add-ons serialize,
    /// so storing it as a ticket type would write the key twice.
    pub fn with_admission(mut self, ticket_type: impl Into<String>, rate: Rate) -> Self {
        let ticket_type = ticket_type.into();
        if ticket_type == EXTRAS_KEY {
            warn!(ticket_type = %ticket_type, "Reserved name cannot be a ticket type, skipping");
            return self;
        }

        self.admissions.insert(ticket_type, rate);
        self
    }

    /// Adds (or replaces) an add-on rate.
    pub fn with_extra(mut self, name: impl Into<String>, rate: Rate) -> Self {
        self.extras.insert(name.into(), rate);
        self
    }

    /// Looks up the admission rate for a ticket type.
    pub fn admission(&self, ticket_type: &str) -> PricingResult<&Rate> {
        if ticket_type == EXTRAS_KEY {
            return Err(PricingError::not_found(ReferenceKind::TicketType, ticket_type));
        }

        self.admissions
            .get(ticket_type)
            .ok_or_else(|| PricingError::not_found(ReferenceKind::TicketType, ticket_type))
    }

    /// Looks up the rate for an add-on.
    pub fn extra(&self, name: &str) -> PricingResult<&Rate> {
        self.extras
            .get(name)
            .ok_or_else(|| PricingError::not_found(ReferenceKind::Extra, name))
    }

    /// Ticket types that can be priced, in sorted order.
    pub fn ticket_types(&self) -> impl Iterator<Item = &str> {
        self.admissions.keys().map(String::as_str)
    }

    /// Add-on names, in sorted order.
    pub fn extra_names(&self) -> impl Iterator<Item = &str> {
        self.extras.keys().map(String::as_str)
    }

    /// Every rate in the table, admissions first, with its name.
    pub fn rates(&self) -> impl Iterator<Item = (&str, &Rate)> {
        self.admissions
            .iter()
            .chain(self.extras.iter())
            .map(|(name, rate)| (name.as_str(), rate))
    }
}

// =============================================================================
// Ticket Request
// =============================================================================

/// One ticket a visitor wants to buy.
///
/// Fields stay raw strings so an error can name exactly what was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    pub ticket_type: String,
    pub entrant_type: String,
    #[serde(default)]
    pub extras: Vec<String>,
}

impl TicketRequest {
    pub fn new<I, S>(ticket_type: impl Into<String>, entrant_type: impl Into<String>, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TicketRequest {
            ticket_type: ticket_type.into(),
            entrant_type: entrant_type.into(),
            extras: extras.into_iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PricingTable {
        PricingTable::new()
            .with_admission(
                "general",
                Rate::new("General Admission", EntrantPrices::from_cents(2000, 3000, 2500)),
            )
            .with_extra(
                "terrace",
                Rate::new("Terrace Access", EntrantPrices::from_cents(500, 1000, 1000)),
            )
    }

    #[test]
    fn test_entrant_type_parsing() {
        assert_eq!("child".parse::<EntrantType>().unwrap(), EntrantType::Child);
        assert_eq!("adult".parse::<EntrantType>().unwrap(), EntrantType::Adult);
        assert_eq!("senior".parse::<EntrantType>().unwrap(), EntrantType::Senior);

        let err = "Adult".parse::<EntrantType>().unwrap_err();
        assert_eq!(err.to_string(), "Entrant type 'Adult' cannot be found.");
    }

    #[test]
    fn test_price_for_entrant() {
        let prices = EntrantPrices::from_cents(500, 1000, 900);
        assert_eq!(prices.price_for(EntrantType::Child).cents(), 500);
        assert_eq!(prices.price_for(EntrantType::Adult).cents(), 1000);
        assert_eq!(prices.price_for(EntrantType::Senior).cents(), 900);
        assert_eq!(prices.iter().count(), 3);
    }

    #[test]
    fn test_admission_lookup() {
        let table = table();
        assert_eq!(table.admission("general").unwrap().description, "General Admission");

        let err = table.admission("membership").unwrap_err();
        assert_eq!(err.kind(), ReferenceKind::TicketType);
        assert_eq!(err.value(), "membership");
    }

    #[test]
    fn test_extras_key_is_not_a_ticket_type() {
        let table = table().with_admission(
            EXTRAS_KEY,
            Rate::new("", EntrantPrices::from_cents(1, 1, 1)),
        );
        assert!(table.admission(EXTRAS_KEY).is_err());
        assert_eq!(table.ticket_types().collect::<Vec<_>>(), vec!["general"]);
        assert_eq!(table, self::table());
    }

    #[test]
    fn test_table_json_round_trip_with_reserved_name() {
        let table = table().with_admission(
            EXTRAS_KEY,
            Rate::new("Not A Ticket", EntrantPrices::from_cents(1, 1, 1)),
        );

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json.matches("\"extras\"").count(), 1);

        let parsed: PricingTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
        assert!(parsed.extra("terrace").is_ok());
    }

    #[test]
    fn test_extra_lookup() {
        let table = table();
        assert!(table.extra("terrace").is_ok());
        let err = table.extra("movie").unwrap_err();
        assert_eq!(err.to_string(), "Extra type 'movie' cannot be found.");
    }

    #[test]
    fn test_table_deserializes_published_shape() {
        let json = r#"{
            "general": {
                "description": "General Admission",
                "priceInCents": { "child": 2000, "adult": 3000, "senior": 2500 }
            },
            "extras": {
                "movie": {
                    "description": "Movie Access",
                    "priceInCents": { "child": 1000, "adult": 1000, "senior": 1000 }
                }
            }
        }"#;

        let table: PricingTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.ticket_types().collect::<Vec<_>>(), vec!["general"]);
        assert_eq!(table.extra_names().collect::<Vec<_>>(), vec!["movie"]);
        assert_eq!(
            table.admission("general").unwrap().price_for(EntrantType::Senior).cents(),
            2500
        );
    }

    #[test]
    fn test_ticket_request_camel_case() {
        let json = r#"{ "ticketType": "general", "entrantType": "adult" }"#;
        let request: TicketRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, TicketRequest::new("general", "adult", Vec::<String>::new()));
    }
}
