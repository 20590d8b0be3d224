//! Infrastructure layer: the reqwest-backed gateway and the site's wire details.

pub mod dto;
pub mod endpoint;
pub mod http;

pub use http::{GatewayConfig, ReqwestChatGateway};
