//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes, handlers and the payment signature gate
//! - `orders` - Order finalization stores

pub mod http;
pub mod orders;

pub use orders::InMemoryOrderFinalizer;
