//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Order Ports
//!
//! - `OrderFinalizer` - Records a verified payment against its order

mod order_finalizer;

pub use order_finalizer::{FinalizedOrder, OrderFinalizationError, OrderFinalizer};
