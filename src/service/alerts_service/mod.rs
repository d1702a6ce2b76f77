mod alert_platform;
mod alerts_service;
mod alerts_service_impl;
mod command_alert_platform;
mod dto;
mod error;

pub use alert_platform::*;
pub use alerts_service::*;
pub use alerts_service_impl::*;
pub use command_alert_platform::*;
pub use dto::{AlertPermission, AlertsServiceConfig, CommandAlertPlatformConfig};
pub use error::*;
