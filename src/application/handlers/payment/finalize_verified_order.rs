//! FinalizeVerifiedOrderHandler - Command handler for settling an order after payment verification.

use std::sync::Arc;

use crate::domain::payment::VerifiedPayment;
use crate::ports::{FinalizedOrder, OrderFinalizationError, OrderFinalizer};

/// Command to finalize an order with a verified payment.
///
/// Can only be built from a `VerifiedPayment`, so an unverified
/// confirmation never reaches the finalizer.
#[derive(Debug, Clone)]
pub struct FinalizeVerifiedOrderCommand {
    pub payment: VerifiedPayment,
}

/// Handler that records a verified payment against its order.
pub struct FinalizeVerifiedOrderHandler {
    finalizer: Arc<dyn OrderFinalizer>,
}

impl FinalizeVerifiedOrderHandler {
    pub fn new(finalizer: Arc<dyn OrderFinalizer>) -> Self {
        Self { finalizer }
    }

    pub async fn handle(
        &self,
        cmd: FinalizeVerifiedOrderCommand,
    ) -> Result<FinalizedOrder, OrderFinalizationError> {
        let order = self.finalizer.finalize(&cmd.payment).await?;

        tracing::info!(
            order_id = %order.order_reference,
            payment_id = %order.payment_reference,
            "order finalized"
        );

        Ok(order)
    }
}
