use std::sync::Arc;

use boxoffice_booking::{PurchaseService, TracingPaymentGateway, TracingSeatReservation};

/// Shared application services handed to the handlers.
pub struct AppServices {
    pub purchases: PurchaseService,
}

/// Wire the purchase service against the production collaborators.
///
/// Both collaborators are external always-succeeding black boxes; here they
/// are represented by their tracing stand-ins.
pub fn build_services() -> AppServices {
    let purchases = PurchaseService::new(
        Arc::new(TracingPaymentGateway),
        Arc::new(TracingSeatReservation),
    );

    AppServices { purchases }
}
