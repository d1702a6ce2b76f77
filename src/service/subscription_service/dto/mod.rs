mod subscription_service_config;

pub use subscription_service_config::*;
