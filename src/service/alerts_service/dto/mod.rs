mod alert_permission;
mod alerts_service_config;
mod command_alert_platform_config;

pub use alert_permission::*;
pub use alerts_service_config::*;
pub use command_alert_platform_config::*;
