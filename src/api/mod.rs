//! API Client
//!
//! HTTP access to the forecast backend.

pub mod client;

pub use client::*;
