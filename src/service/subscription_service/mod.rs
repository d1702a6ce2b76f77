mod dto;
mod subscription_service;
mod subscription_state_machine;

pub use dto::SubscriptionServiceConfig;
pub use subscription_service::*;
