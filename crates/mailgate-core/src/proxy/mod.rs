//! Proxy module - read-only forwarding gateway
//!
//! Every route maps 1:1 to an upstream path of the same shape. A request is
//! authenticated by the credential middleware, forwarded once, and the
//! upstream status + JSON body are relayed unchanged.

pub mod common;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod upstream;


pub use routes::{RouteSpec, UpstreamPath, ROUTES};
pub use server::{build_gateway_router, GatewayState};
pub use upstream::{UpstreamClient, UpstreamReply};
