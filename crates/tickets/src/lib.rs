//! Ticket purchase rules (the box office rulebook).
//!
//! This crate contains the business rules for ticket purchases, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no logging). Given
//! a set of requested line items it decides whether the purchase is legal
//! and, for legal purchases, derives the amount to charge and the seats to
//! reserve.

pub mod purchase;

pub use purchase::{
    MAX_TICKETS_PER_PURCHASE, PurchaseTotals, TicketCategory, TicketRequest, purchase_totals,
    validate_account, validate_requests,
};
