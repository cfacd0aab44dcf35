use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_core::{AccountId, DomainResult, PurchaseId};
use boxoffice_tickets::{TicketRequest, purchase_totals, validate_account, validate_requests};

use crate::gateway::{PaymentGateway, SeatReservation};

/// Receipt for a dispatched purchase.
///
/// `purchase_id` and `occurred_at` are diagnostics minted per attempt; the
/// accept/reject outcome and both totals are pure functions of the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub purchase_id: PurchaseId,
    pub account_id: AccountId,
    /// Amount charged, in whole currency units.
    pub total_amount: u64,
    /// Seats reserved (infant tickets occupy none).
    pub seats_reserved: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Front-desk purchase service.
///
/// Each call is a self-contained attempt: validate the account, validate the
/// line items, derive the totals, then dispatch payment followed by seat
/// reservation. On any rejection neither collaborator is invoked — that is a
/// hard invariant, enforced by construction (dispatch sits after the `?`s).
pub struct PurchaseService {
    payments: Arc<dyn PaymentGateway>,
    reservations: Arc<dyn SeatReservation>,
}

impl PurchaseService {
    pub fn new(payments: Arc<dyn PaymentGateway>, reservations: Arc<dyn SeatReservation>) -> Self {
        Self {
            payments,
            reservations,
        }
    }

    /// Attempt a purchase for `account_id` with the given line items.
    ///
    /// Validation stages run in order and stop at the first violation; the
    /// calculation runs only for fully validated input. Collaborators are
    /// called exactly once each, payment before reservation, and only on
    /// success.
    pub fn attempt_purchase(
        &self,
        account_id: Option<AccountId>,
        requests: &[TicketRequest],
    ) -> DomainResult<PurchaseReceipt> {
        let account_id = validate_account(account_id).inspect_err(|e| {
            tracing::debug!(error = %e, "purchase rejected");
        })?;

        validate_requests(requests).inspect_err(|e| {
            tracing::debug!(%account_id, error = %e, "purchase rejected");
        })?;

        let totals = purchase_totals(requests);

        self.payments.make_payment(account_id, totals.amount);
        self.reservations.reserve_seats(account_id, totals.seats);

        let receipt = PurchaseReceipt {
            purchase_id: PurchaseId::new(),
            account_id,
            total_amount: totals.amount,
            seats_reserved: totals.seats,
            occurred_at: Utc::now(),
        };

        tracing::info!(
            purchase_id = %receipt.purchase_id,
            %account_id,
            amount = receipt.total_amount,
            seats = receipt.seats_reserved,
            "purchase dispatched"
        );

        Ok(receipt)
    }
}
