use super::{NotificationCategory, NotificationPriority};

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub title: String,
    pub body: String,
    pub priority: NotificationPriority,
    pub category: NotificationCategory,
}
