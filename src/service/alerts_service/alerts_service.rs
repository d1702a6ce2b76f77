use crate::dto::{Notification, User};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertsService: Send + Sync {
    ///
    /// Alerts user about notifications that appeared in the latest snapshot.
    ///
    /// Notifications already read by the user are ignored.
    /// At most one sound and one system notification are produced per call,
    /// the system notification shows the most recent unread notification.
    ///
    async fn dispatch(&self, new_notifications: Vec<Notification>, user: &User);
}
