use super::Notification;

///
/// State published by the subscription service after every processed snapshot.
///
#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    /// Active notifications, newest first
    pub notifications: Vec<Notification>,

    /// Subset of `notifications` the current user has not read
    pub unread: Vec<Notification>,

    /// True until the first snapshot of the session arrives or the session fails
    pub loading: bool,

    pub is_admin: bool,
}

impl NotificationsState {
    pub fn find(&self, id: &bson::oid::ObjectId) -> Option<&Notification> {
        self.notifications
            .iter()
            .find(|notification| notification.id == *id)
    }
}
