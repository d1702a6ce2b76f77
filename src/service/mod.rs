pub mod alerts_service;
pub mod new_items_detector;
pub mod notifications_service;
pub mod read_state;
pub mod subscription_service;
