//! HTTP implementation of the `ChatGateway` trait.

pub mod config;
mod reqwest_gateway;

pub use config::GatewayConfig;
pub use reqwest_gateway::ReqwestChatGateway;
