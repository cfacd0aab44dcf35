use serde::{Deserialize, Serialize};

use boxoffice_core::{AccountId, DomainError, DomainResult, ValueObject};

/// Upper bound on tickets in a single purchase.
///
/// Counts **tickets**, not seats: infants hold a ticket even though they
/// occupy no seat, so they count toward this limit.
pub const MAX_TICKETS_PER_PURCHASE: i64 = 25;

/// Ticket category. Closed set; pricing and seating are fixed attributes,
/// not behavior, so a plain enum with lookup methods is all that's needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// Price of a single ticket, in whole currency units.
    pub fn unit_price(&self) -> u64 {
        match self {
            TicketCategory::Adult => 25,
            TicketCategory::Child => 15,
            TicketCategory::Infant => 0,
        }
    }

    /// Whether a ticket of this category occupies a physical seat.
    /// Infants sit on an adult's lap.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }
}

impl core::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            TicketCategory::Adult => "adult",
            TicketCategory::Child => "child",
            TicketCategory::Infant => "infant",
        };
        f.write_str(s)
    }
}

/// Requested line item: category + quantity.
///
/// Quantity is stored as given; a non-positive value is representable and is
/// rejected by [`validate_requests`] before any side effect occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketRequest {
    pub category: TicketCategory,
    pub quantity: i64,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, quantity: i64) -> Self {
        Self { category, quantity }
    }
}

impl ValueObject for TicketRequest {}

/// Outcome of the purchase calculation: amount to charge and seats to reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTotals {
    /// Total price in whole currency units.
    pub amount: u64,
    /// Physical seats to reserve (infant tickets excluded).
    pub seats: u32,
}

impl ValueObject for PurchaseTotals {}

/// Validate the purchasing account.
///
/// Runs first and independently of the line items: an absent or non-positive
/// identifier rejects the purchase no matter what was requested.
pub fn validate_account(account_id: Option<AccountId>) -> DomainResult<AccountId> {
    let account_id =
        account_id.ok_or_else(|| DomainError::invalid_purchase("account id is required"))?;

    if !account_id.is_positive() {
        return Err(DomainError::invalid_purchase("account id must be positive"));
    }

    Ok(account_id)
}

/// Validate the requested line items against the purchase rules.
///
/// Rules, in evaluation order; the first violation aborts the attempt:
///
/// 1. at least one line item must be present;
/// 2. every line item must carry a positive quantity (checked before any
///    aggregate rule — one malformed item invalidates the whole request);
/// 3. child and infant tickets require at least one adult ticket;
/// 4. no more than [`MAX_TICKETS_PER_PURCHASE`] tickets in total, infants
///    included;
/// 5. infants cannot outnumber adults (each infant needs a distinct lap).
pub fn validate_requests(requests: &[TicketRequest]) -> DomainResult<()> {
    if requests.is_empty() {
        return Err(DomainError::invalid_purchase(
            "at least one ticket must be requested",
        ));
    }

    let mut adults: i64 = 0;
    let mut children: i64 = 0;
    let mut infants: i64 = 0;
    let mut total: i64 = 0;

    for request in requests {
        if request.quantity <= 0 {
            return Err(DomainError::invalid_purchase(format!(
                "ticket quantity must be positive (got {} for {})",
                request.quantity, request.category
            )));
        }

        total = total.checked_add(request.quantity).ok_or_else(|| {
            DomainError::invalid_purchase(format!(
                "a purchase is limited to {MAX_TICKETS_PER_PURCHASE} tickets"
            ))
        })?;

        // Each per-category sum is bounded by `total`, so once the checked
        // add succeeds the plain adds below cannot overflow.
        match request.category {
            TicketCategory::Adult => adults += request.quantity,
            TicketCategory::Child => children += request.quantity,
            TicketCategory::Infant => infants += request.quantity,
        }
    }

    if adults == 0 && (children > 0 || infants > 0) {
        return Err(DomainError::invalid_purchase(
            "child and infant tickets require at least one adult ticket",
        ));
    }

    if total > MAX_TICKETS_PER_PURCHASE {
        return Err(DomainError::invalid_purchase(format!(
            "a purchase is limited to {MAX_TICKETS_PER_PURCHASE} tickets (got {total})"
        )));
    }

    if infants > adults {
        return Err(DomainError::invalid_purchase(
            "infants cannot outnumber adults",
        ));
    }

    Ok(())
}

/// Derive the totals for a set of line items that already passed
/// [`validate_requests`].
///
/// Price and seat count are independent sums: each walks the full sequence
/// on its own, and neither depends on counters kept during validation.
/// Line-item order never affects the result.
pub fn purchase_totals(requests: &[TicketRequest]) -> PurchaseTotals {
    debug_assert!(
        requests.iter().all(|r| r.quantity > 0),
        "purchase_totals requires validated quantities"
    );

    let amount: u64 = requests
        .iter()
        .map(|r| r.quantity as u64 * r.category.unit_price())
        .sum();

    let seats: u32 = requests
        .iter()
        .filter(|r| r.category.occupies_seat())
        .map(|r| r.quantity as u32)
        .sum();

    PurchaseTotals { amount, seats }
}
