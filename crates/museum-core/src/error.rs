//! # Error Types
//!
//! Domain error types for museum-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  museum-core errors (this file)                                        │
//! │  └── PricingError     - A request names something the table lacks      │
//! │        └── ReferenceNotFound { kind, value }                           │
//! │              kind: TicketType | EntrantType | Extra                    │
//! │                                                                         │
//! │  museum-config errors (separate crate)                                 │
//! │  └── ConfigError      - Config / rate file loading failures            │
//! │                                                                         │
//! │  Flow: PricingError → ConfigError (when a loader prices) → binary      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rendered message is what a cashier sees, e.g.
//! `Entrant type 'kid' cannot be found.`

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Reference Kind
// =============================================================================

/// Which part of a ticket request failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Top-level admission type (`general`, `membership`).
    TicketType,
    /// Visitor class (`child`, `adult`, `senior`).
    EntrantType,
    /// Add-on listed under `extras`.
    Extra,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::TicketType => write!(f, "Ticket type"),
            ReferenceKind::EntrantType => write!(f, "Entrant type"),
            ReferenceKind::Extra => write!(f, "Extra type"),
        }
    }
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors raised while pricing a ticket request.
///
/// ## When This Occurs
/// - Ticket type is not in the rate table (or is the reserved `extras` key)
/// - Entrant type is not one of child/adult/senior
/// - An add-on is not listed under `extras`
///
/// Only the first failing reference is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("{kind} '{value}' cannot be found.")]
    ReferenceNotFound { kind: ReferenceKind, value: String },
}

impl PricingError {
    /// Builds a not-found error for the given kind and offending value.
    pub fn not_found(kind: ReferenceKind, value: impl Into<String>) -> Self {
        PricingError::ReferenceNotFound {
            kind,
            value: value.into(),
        }
    }

    /// The kind of reference that failed to resolve.
    pub fn kind(&self) -> ReferenceKind {
        match self {
            PricingError::ReferenceNotFound { kind, .. } => *kind,
        }
    }

    /// The offending value, exactly as supplied in the request.
    pub fn value(&self) -> &str {
        match self {
            PricingError::ReferenceNotFound { value, .. } => value,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PricingError::not_found(ReferenceKind::TicketType, "discount");
        assert_eq!(err.to_string(), "Ticket type 'discount' cannot be found.");

        let err = PricingError::not_found(ReferenceKind::EntrantType, "kid");
        assert_eq!(err.to_string(), "Entrant type 'kid' cannot be found.");

        let err = PricingError::not_found(ReferenceKind::Extra, "balloons");
        assert_eq!(err.to_string(), "Extra type 'balloons' cannot be found.");
    }

    #[test]
    fn test_reference_kind_json() {
        assert_eq!(
            serde_json::to_value(ReferenceKind::TicketType).unwrap(),
            serde_json::json!("ticket_type")
        );
        assert_eq!(
            serde_json::to_value(ReferenceKind::EntrantType).unwrap(),
            serde_json::json!("entrant_type")
        );

        let kind: ReferenceKind = serde_json::from_str("\"extra\"").unwrap();
        assert_eq!(kind, ReferenceKind::Extra);
        assert!(serde_json::from_str::<ReferenceKind>("\"add_on\"").is_err());
    }

    #[test]
    fn test_accessors() {
        let err = PricingError::not_found(ReferenceKind::Extra, "gift shop");
        assert_eq!(err.kind(), ReferenceKind::Extra);
        assert_eq!(err.value(), "gift shop");
    }
}
