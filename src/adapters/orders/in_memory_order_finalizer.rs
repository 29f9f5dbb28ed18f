//! In-memory implementation of OrderFinalizer for development and testing.
//!
//! Keeps paid orders in a map keyed by Razorpay order id. Order persistence
//! lives outside this service; this adapter lets the gate run end to end
//! without a database.
//!
//! # Usage
//!
//! ```ignore
//! use lush_lilac::adapters::orders::InMemoryOrderFinalizer;
//!
//! // Accept any order id
//! let finalizer = InMemoryOrderFinalizer::new();
//! // Only accept orders that were created first
//! let finalizer = InMemoryOrderFinalizer::with_pending_orders(["order_ABC123"]);
//! ```

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::payment::VerifiedPayment;
use crate::ports::{FinalizedOrder, OrderFinalizationError, OrderFinalizer};

/// In-memory OrderFinalizer.
#[derive(Debug, Default)]
pub struct InMemoryOrderFinalizer {
    /// Orders awaiting payment; consulted only when `require_known_orders` is set.
    pending: RwLock<HashSet<String>>,
    /// Paid orders by order id.
    finalized: RwLock<HashMap<String, FinalizedOrder>>,
    require_known_orders: bool,
}

impl InMemoryOrderFinalizer {
    /// Creates a finalizer that accepts any order id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a finalizer that only accepts the listed pending orders.
    pub fn with_pending_orders<I, S>(orders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pending: RwLock::new(orders.into_iter().map(Into::into).collect()),
            finalized: RwLock::new(HashMap::new()),
            require_known_orders: true,
        }
    }

    /// Registers a pending order.
    pub async fn add_pending_order(&self, order_reference: impl Into<String>) {
        self.pending.write().await.insert(order_reference.into());
    }

    // === Test Helpers ===

    /// Returns the finalized record for an order, if any.
    pub async fn get(&self, order_reference: &str) -> Option<FinalizedOrder> {
        self.finalized.read().await.get(order_reference).cloned()
    }

    /// Number of finalized orders.
    pub async fn finalized_count(&self) -> usize {
        self.finalized.read().await.len()
    }
}

#[async_trait]
impl OrderFinalizer for InMemoryOrderFinalizer {
    async fn finalize(
        &self,
        payment: &VerifiedPayment,
    ) -> Result<FinalizedOrder, OrderFinalizationError> {
        let order_reference = payment.order_reference();
        let mut finalized = self.finalized.write().await;

        if let Some(existing) = finalized.get(order_reference) {
            if existing.payment_reference == payment.payment_reference() {
                return Ok(existing.clone());
            }
            return Err(OrderFinalizationError::AlreadyPaid {
                order_reference: order_reference.to_string(),
            });
        }

        if self.require_known_orders && !self.pending.read().await.contains(order_reference) {
            return Err(OrderFinalizationError::OrderNotFound(
                order_reference.to_string(),
            ));
        }

        let record = FinalizedOrder {
            order_reference: order_reference.to_string(),
            payment_reference: payment.payment_reference().to_string(),
            finalized_at: Utc::now(),
        };
        finalized.insert(order_reference.to_string(), record.clone());
        self.pending.write().await.remove(order_reference);

        Ok(record)
    }
}
