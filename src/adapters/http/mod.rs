//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod app;
pub mod middleware;
pub mod payment;

// Re-export key types for convenience
pub use app::app_router;
pub use payment::payment_router;
pub use payment::PaymentAppState;
