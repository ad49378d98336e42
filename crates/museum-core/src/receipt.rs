//! # Receipt Builder
//!
//! Prices a batch of ticket requests and renders the purchase receipt.
//!
//! ## Receipt Layout
//! ```text
//! Thank you for visiting the Dinosaur Museum!
//! -------------------------------------------
//! Adult General Admission: $50.00 (Movie Access, Terrace Access)
//! Senior General Admission: $35.00 (Terrace Access)
//! -------------------------------------------
//! TOTAL: $85.00
//! ```
//!
//! The separator is as long as the header. There is no trailing newline.
//!
//! ## All-or-Nothing
//! Every request is priced before anything is rendered. The first request that
//! fails validation decides the result; no partial receipt is ever produced.

use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::error::PricingResult;
use crate::money::Money;
use crate::pricing::calculate_ticket_price;
use crate::types::{PricingTable, TicketRequest};

/// Header printed when no museum name is configured.
pub const DEFAULT_HEADER: &str = "Thank you for visiting the Dinosaur Museum!";

/// Builds the header line for a named museum.
///
/// ```rust
/// use museum_core::receipt::{header_for, DEFAULT_HEADER};
///
/// assert_eq!(header_for("Dinosaur Museum"), DEFAULT_HEADER);
/// ```
pub fn header_for(museum_name: &str) -> String {
    format!("Thank you for visiting the {}!", museum_name)
}

/// Uppercases the first character and leaves the rest untouched.
///
/// `"terrace"` becomes `"Terrace"`, `"night tour"` becomes `"Night tour"`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Receipt Line
// =============================================================================

/// One purchased ticket, already priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub entrant_type: String,
    pub ticket_type: String,
    pub price: Money,
    pub extras: Vec<String>,
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} Admission: {}",
            capitalize(&self.entrant_type),
            capitalize(&self.ticket_type),
            self.price
        )?;

        if !self.extras.is_empty() {
            let extras = self
                .extras
                .iter()
                .map(|extra| format!("{} Access", capitalize(extra)))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " ({})", extras)?;
        }

        Ok(())
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A fully priced purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    header: String,
    lines: Vec<ReceiptLine>,
    total: Money,
}

impl Receipt {
    /// Prices every request, stopping at the first invalid one.
    ///
    /// ## Example
    /// ```rust
    /// use museum_core::{EntrantPrices, PricingTable, Rate, Receipt, TicketRequest};
    ///
    /// let table = PricingTable::new()
    ///     .with_admission("general", Rate::new("General Admission", EntrantPrices::from_cents(2000, 3000, 2500)));
    ///
    /// let receipt = Receipt::from_purchases(&table, &[TicketRequest::new("general", "adult", Vec::<String>::new())]).unwrap();
    /// assert_eq!(receipt.total().cents(), 3000);
    /// assert!(receipt.to_string().ends_with("TOTAL: $30.00"));
    /// ```
    pub fn from_purchases(table: &PricingTable, purchases: &[TicketRequest]) -> PricingResult<Self> {
        let lines = purchases
            .iter()
            .map(|request| {
                calculate_ticket_price(table, request).map(|price| ReceiptLine {
                    entrant_type: request.entrant_type.clone(),
                    ticket_type: request.ticket_type.clone(),
                    price,
                    extras: request.extras.clone(),
                })
            })
            .collect::<PricingResult<Vec<_>>>()?;

        let total: Money = lines.iter().map(|line| line.price).sum();

        info!(tickets = lines.len(), total_cents = total.cents(), "Purchase priced");

        Ok(Receipt {
            header: DEFAULT_HEADER.to_string(),
            lines,
            total,
        })
    }

    /// Replaces the header line.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Sum of every line.
    pub fn total(&self) -> Money {
        self.total
    }

    fn separator(&self) -> String {
        "-".repeat(self.header.chars().count())
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = self.separator();

        writeln!(f, "{}", self.header)?;
        writeln!(f, "{}", separator)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", separator)?;
        write!(f, "TOTAL: {}", self.total)
    }
}

/// Prices a purchase and renders the receipt with the default header.
///
/// Returns the first request's pricing error if any request is invalid.
pub fn purchase_tickets(table: &PricingTable, purchases: &[TicketRequest]) -> PricingResult<String> {
    let receipt = Receipt::from_purchases(table, purchases)?;
    debug!(lines = receipt.lines().len(), "Rendering receipt");
    Ok(receipt.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
