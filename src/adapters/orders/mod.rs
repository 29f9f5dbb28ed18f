//! Order adapters - implementations of order-related ports.
//!
//! - `InMemoryOrderFinalizer` - Development/testing store for paid orders

mod in_memory_order_finalizer;

pub use in_memory_order_finalizer::InMemoryOrderFinalizer;
