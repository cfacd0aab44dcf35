//! Purchase orchestration: validate, price, then dispatch to the payment and
//! seat-reservation collaborators.
//!
//! The rulebook itself lives in `boxoffice-tickets`; this crate wires it to
//! the two outbound collaborators and owns the service-level logging.

pub mod gateway;
pub mod service;

pub use gateway::{PaymentGateway, SeatReservation, TracingPaymentGateway, TracingSeatReservation};
pub use service::{PurchaseReceipt, PurchaseService};
