//! # Price Calculator
//!
//! Prices a single ticket request against a rate table.
//!
//! ## User Workflow
//! ```text
//! Visitor asks for: membership / child / [movie]
//!      │
//!      ▼
//! calculate_ticket_price() ← THIS MODULE
//!      │
//!      ├── unknown reference? → PricingError ("Entrant type 'kid' ...")
//!      │
//!      ▼
//! membership.child (1500) + movie.child (1000) = 2500 cents
//! ```

use tracing::debug;

use crate::error::PricingResult;
use crate::money::Money;
use crate::types::{PricingTable, TicketRequest};
use crate::validation::validate_ticket_request;

/// Returns the price of one ticket.
///
/// The price is the admission rate for the entrant plus the entrant's rate for
/// every listed add-on. Listing an add-on twice charges it twice.
///
/// ## Example
/// ```rust
/// use museum_core::{calculate_ticket_price, EntrantPrices, PricingTable, Rate, TicketRequest};
///
/// let table = PricingTable::new()
///     .with_admission("membership", Rate::new("Membership Admission", EntrantPrices::from_cents(1500, 2800, 2300)))
///     .with_extra("movie", Rate::new("Movie Access", EntrantPrices::from_cents(1000, 1000, 1000)));
///
/// let request = TicketRequest::new("membership", "child", ["movie"]);
/// assert_eq!(calculate_ticket_price(&table, &request).unwrap().cents(), 2500);
/// ```
pub fn calculate_ticket_price(table: &PricingTable, request: &TicketRequest) -> PricingResult<Money> {
    let ticket = validate_ticket_request(table, request)?;
    let price = ticket.price();

    debug!(
        ticket_type = %request.ticket_type,
        entrant = %ticket.entrant,
        price_cents = price.cents(),
        "Ticket priced"
    );

    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================
