//! UI-facing endpoints and the dispatch layer

pub mod base;
pub mod bridge;
pub mod builtin;
pub mod registry;

pub use base::{error_payload, Endpoint, EndpointCall, EndpointExample, EndpointExecutor};
pub use bridge::{handle_line, serve, BridgeRequest, BridgeResponse};
pub use registry::{EndpointFactory, EndpointRegistry};
