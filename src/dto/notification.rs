use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationCategory {
    Info,
    Warning,
    Alert,
    Maintenance,
}

///
/// Broadcast message as observed in the most recent snapshot.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ObjectId,
    pub title: String,
    pub body: String,
    pub created_at: OffsetDateTime,
    pub created_by: String,
    pub status: NotificationStatus,
    pub priority: NotificationPriority,
    pub category: NotificationCategory,
    pub users_who_read: HashSet<String>,
}

impl Notification {
    pub fn is_active(&self) -> bool {
        self.status == NotificationStatus::Active
    }

    pub fn is_read_by(&self, user_id: &str) -> bool {
        self.users_who_read.contains(user_id)
    }
}
