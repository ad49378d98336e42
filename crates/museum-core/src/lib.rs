//! # museum-core: Ticket Pricing for the Museum Front Desk
//!
//! This crate prices admission tickets from a rate table and renders the
//! purchase receipt. Everything here is a pure function with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Museum Ticketing Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 museum-config (Data Loading)                    │   │
//! │  │      museum.toml, MUSEUM_* env vars, tickets.json / .toml      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PricingTable                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ museum-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │  pricing  │  │  receipt  │  │   │
//! │  │   │PricingTbl │─►│ resolve   │─►│ calculate │─►│  Receipt  │  │   │
//! │  │   │TicketReq  │  │ request   │  │ _price    │  │  render   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Rate table and ticket request types
//! - [`money`] - Money type with integer cents
//! - [`error`] - Pricing error types
//! - [`validation`] - Resolves a request against the rate table
//! - [`pricing`] - Price Calculator
//! - [`receipt`] - Receipt Builder
//!
//! ## Example Usage
//!
//! ```rust
//! use museum_core::{calculate_ticket_price, purchase_tickets};
//! use museum_core::{EntrantPrices, PricingTable, Rate, TicketRequest};
//!
//! let table = PricingTable::new()
//!     .with_admission("general", Rate::new("General Admission", EntrantPrices::from_cents(2000, 3000, 2500)))
//!     .with_extra("terrace", Rate::new("Terrace Access", EntrantPrices::from_cents(500, 1000, 1000)));
//!
//! let request = TicketRequest::new("general", "senior", ["terrace"]);
//! assert_eq!(calculate_ticket_price(&table, &request).unwrap().cents(), 3500);
//!
//! let receipt = purchase_tickets(&table, &[request]).unwrap();
//! assert!(receipt.contains("Senior General Admission: $35.00 (Terrace Access)"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{PricingError, PricingResult, ReferenceKind};
pub use money::Money;
pub use pricing::calculate_ticket_price;
pub use receipt::{purchase_tickets, Receipt, ReceiptLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Top-level key of the rate table that holds add-ons.
///
/// It can never be requested as a ticket type.
pub const EXTRAS_KEY: &str = "extras";
