//! # Validation Module
//!
//! Resolves a [`TicketRequest`] against a [`PricingTable`].
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate_ticket_request(table, request)                                │
//! │                                                                         │
//! │  1. ticket_type  ── table.admission()  ── "Ticket type 'x' ..."        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  2. entrant_type ── EntrantType::from_str ── "Entrant type 'x' ..."    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  3. extras[i]    ── table.extra()      ── "Extra type 'x' ..."         │
//! │         │           (list order, first miss wins)                       │
//! │         ▼                                                               │
//! │  ValidatedTicket { admission, entrant, extras }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first failing check wins; later fields are not inspected.

use tracing::debug;

use crate::error::PricingResult;
use crate::money::Money;
use crate::types::{EntrantType, PricingTable, Rate, TicketRequest};

/// A ticket request whose every reference resolved against the table.
#[derive(Debug, Clone)]
pub struct ValidatedTicket<'a> {
    /// Admission rate for the requested ticket type.
    pub admission: &'a Rate,
    pub entrant: EntrantType,
    extras: Vec<(&'a str, &'a Rate)>,
}

impl<'a> ValidatedTicket<'a> {
    /// Base admission price for the entrant.
    pub fn base_price(&self) -> Money {
        self.admission.price_for(self.entrant)
    }

    /// Resolved add-on rates in request order.
    pub fn extras(&self) -> impl Iterator<Item = (&'a str, &'a Rate)> + '_ {
        self.extras.iter().copied()
    }

    /// Base price plus every add-on priced for the entrant.
    pub fn price(&self) -> Money {
        let entrant = self.entrant;
        self.base_price() + self.extras().map(|(_, rate)| rate.price_for(entrant)).sum::<Money>()
    }
}

/// Validates a ticket request.
///
/// ## Example
/// ```rust
/// use museum_core::{EntrantPrices, PricingTable, Rate, TicketRequest};
/// use museum_core::validation::validate_ticket_request;
///
/// let table = PricingTable::new()
///     .with_admission("general", Rate::new("General Admission", EntrantPrices::from_cents(2000, 3000, 2500)));
///
/// let ok = TicketRequest::new("general", "adult", Vec::<String>::new());
/// assert!(validate_ticket_request(&table, &ok).is_ok());
///
/// let bad = TicketRequest::new("general", "kid", ["movie"]);
/// let err = validate_ticket_request(&table, &bad).unwrap_err();
/// assert_eq!(err.to_string(), "Entrant type 'kid' cannot be found.");
/// ```
pub fn validate_ticket_request<'a>(
    table: &'a PricingTable,
    request: &'a TicketRequest,
) -> PricingResult<ValidatedTicket<'a>> {
    let admission = table.admission(&request.ticket_type)?;
    let entrant: EntrantType = request.entrant_type.parse()?;

    let extras = request
        .extras
        .iter()
        .map(|name| table.extra(name).map(|rate| (name.as_str(), rate)))
        .collect::<PricingResult<Vec<_>>>()?;

    debug!(
        ticket_type = %request.ticket_type,
        entrant = %entrant,
        extras = request.extras.len(),
        "Ticket request validated"
    );

    Ok(ValidatedTicket {
        admission,
        entrant,
        extras,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReferenceKind;
    use crate::types::EntrantPrices;

    fn table() -> PricingTable {
        PricingTable::new()
            .with_admission(
                "general",
                Rate::new("General Admission", EntrantPrices::from_cents(2000, 3000, 2500)),
            )
            .with_extra("movie", Rate::new("Movie Access", EntrantPrices::from_cents(1000, 1000, 1000)))
            .with_extra("terrace", Rate::new("Terrace Access", EntrantPrices::from_cents(500, 1000, 1000)))
    }

    #[test]
    fn test_ticket_type_checked_first() {
        let table = table();
        let request = TicketRequest::new("discount", "kid", ["balloons"]);
        let err = validate_ticket_request(&table, &request).unwrap_err();
        assert_eq!(err.kind(), ReferenceKind::TicketType);
        assert_eq!(err.value(), "discount");
    }

    #[test]
    fn test_entrant_checked_before_extras() {
        let table = table();
        let request = TicketRequest::new("general", "kid", ["balloons"]);
        let err = validate_ticket_request(&table, &request).unwrap_err();
        assert_eq!(err.kind(), ReferenceKind::EntrantType);
    }

    #[test]
    fn test_first_unknown_extra_reported() {
        let table = table();
        let request = TicketRequest::new("general", "adult", ["movie", "balloons", "parking"]);
        let err = validate_ticket_request(&table, &request).unwrap_err();
        assert_eq!(err.to_string(), "Extra type 'balloons' cannot be found.");
    }

    #[test]
    fn test_validated_ticket_resolves_in_order() {
        let table = table();
        let request = TicketRequest::new("general", "child", ["terrace", "movie"]);
        let ticket = validate_ticket_request(&table, &request).unwrap();

        assert_eq!(ticket.entrant, EntrantType::Child);
        assert_eq!(ticket.base_price().cents(), 2000);
        let names: Vec<_> = ticket.extras().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["terrace", "movie"]);
        assert_eq!(ticket.price().cents(), 3500);
    }
}
