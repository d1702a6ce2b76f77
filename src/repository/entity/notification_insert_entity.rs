use crate::dto::{NotificationCategory, NotificationPriority, NotificationStatus};
use bson::DateTime;
use serde::Serialize;

#[derive(Serialize)]
pub struct NotificationInsertEntity<'a> {
    pub title: &'a str,
    pub body: &'a str,

    pub created_at: DateTime,
    pub created_by: &'a str,

    pub status: NotificationStatus,
    pub priority: NotificationPriority,
    pub category: NotificationCategory,

    pub users_who_read: [&'a str; 0],
}
