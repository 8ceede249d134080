//! Upstream module - client for the mail-service REST API

pub mod client;

pub use client::{UpstreamClient, UpstreamReply};
