//! Common utilities module
//!
//! Shared helpers for the forwarder and handlers.

pub mod client_builder;

pub use client_builder::build_http_client;
