use serde::Deserialize;

use boxoffice_core::AccountId;
use boxoffice_tickets::{TicketCategory, TicketRequest};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /purchases`.
///
/// `account_id` may be absent or null — that is a representable request the
/// domain rejects, not a deserialization error. An unknown `category` never
/// reaches the domain: serde rejects it at the boundary, which is where
/// "missing/unknown category" lives once the enum is closed.
#[derive(Debug, Deserialize)]
pub struct PurchaseRequestBody {
    pub account_id: Option<i64>,
    #[serde(default)]
    pub tickets: Vec<TicketLineBody>,
}

#[derive(Debug, Deserialize)]
pub struct TicketLineBody {
    pub category: TicketCategory,
    pub quantity: i64,
}

impl PurchaseRequestBody {
    pub fn account_id(&self) -> Option<AccountId> {
        self.account_id.map(AccountId::new)
    }

    pub fn ticket_requests(&self) -> Vec<TicketRequest> {
        self.tickets
            .iter()
            .map(|t| TicketRequest::new(t.category, t.quantity))
            .collect()
    }
}
