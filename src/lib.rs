//! Lush Lilac - Payment Verification Service
//!
//! This crate hosts the Razorpay payment signature gate that guards order
//! finalization for the Lush Lilac storefront.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
