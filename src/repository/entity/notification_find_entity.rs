use crate::dto::{Notification, NotificationCategory, NotificationPriority, NotificationStatus};
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct NotificationFindEntity {
    pub _id: ObjectId,

    pub title: String,
    pub body: String,

    pub created_at: DateTime,
    pub created_by: String,

    pub status: NotificationStatus,
    pub priority: NotificationPriority,
    pub category: NotificationCategory,

    #[serde(default)]
    pub users_who_read: Vec<String>,
}

impl From<NotificationFindEntity> for Notification {
    fn from(value: NotificationFindEntity) -> Self {
        Self {
            id: value._id,
            title: value.title,
            body: value.body,
            created_at: value.created_at.into(),
            created_by: value.created_by,
            status: value.status,
            priority: value.priority,
            category: value.category,
            users_who_read: value.users_who_read.into_iter().collect(),
        }
    }
}
