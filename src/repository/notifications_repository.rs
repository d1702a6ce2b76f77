use super::Error;
use crate::dto::{NewNotification, Notification, NotificationStatus};
use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::stream::BoxStream;
use time::OffsetDateTime;

///
/// Stream of complete snapshots of the notifications collection.
/// Every item supersedes the previous one.
///
pub type NotificationsSnapshots = BoxStream<'static, Result<Vec<Notification>, Error>>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Opens live query over all notifications.
    /// Snapshots are sorted descending by creation date and are not filtered by status.
    ///
    /// Dropping the stream detaches the listener.
    ///
    async fn watch(&self) -> Result<NotificationsSnapshots, Error>;

    ///
    /// Inserts new active notification with empty read-set
    ///
    async fn insert(
        &self,
        notification: &NewNotification,
        created_at: OffsetDateTime,
        created_by: &str,
    ) -> Result<ObjectId, Error>;

    ///
    /// Adds user to the read-set. Adding user that is already there changes nothing.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when notification does not exist
    ///
    async fn add_reader(&self, id: ObjectId, user_id: &str) -> Result<(), Error>;

    ///
    /// Removes user from the read-set
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when notification does not exist
    ///
    async fn remove_reader(&self, id: ObjectId, user_id: &str) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when notification does not exist
    ///
    async fn update_status(&self, id: ObjectId, status: NotificationStatus) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentDeleted] when notification does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<(), Error>;
}
