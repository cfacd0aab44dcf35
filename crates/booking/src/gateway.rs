//! Outbound collaborator interfaces.
//!
//! Both collaborators are external black boxes: synchronous, always
//! successful, and invoked only after a purchase has fully validated.
//! Resilience (retries, compensation) is explicitly not this layer's job.

use boxoffice_core::AccountId;

/// Takes payment for a purchase.
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` (whole currency units) to the given account.
    fn make_payment(&self, account_id: AccountId, amount: u64);
}

/// Reserves physical seats for a purchase.
pub trait SeatReservation: Send + Sync {
    /// Reserve `seat_count` seats for the given account.
    fn reserve_seats(&self, account_id: AccountId, seat_count: u32);
}

/// Production stand-in for the external payment provider: emits a structured
/// log line and succeeds, matching the provider's always-succeeds contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPaymentGateway;

impl PaymentGateway for TracingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        tracing::info!(%account_id, amount, "payment taken");
    }
}

/// Production stand-in for the external seat-reservation system.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSeatReservation;

impl SeatReservation for TracingSeatReservation {
    fn reserve_seats(&self, account_id: AccountId, seat_count: u32) {
        tracing::info!(%account_id, seat_count, "seats reserved");
    }
}
