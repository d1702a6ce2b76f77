use crate::{dto::NewNotification, error::Error};
use async_trait::async_trait;
use bson::oid::ObjectId;

///
/// Writes to the notifications store.
///
/// None of the operations update local state,
/// their effects arrive with the next snapshot of the subscription.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Creates active notification authored by the current user.
    ///
    /// ### Returns
    /// ID of created notification
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when there is no current user
    /// - [Error::StoreUnavailable] when store is not configured
    /// - [Error::Validation] when title or body is blank
    ///
    async fn create_notification(&self, notification: NewNotification)
        -> Result<ObjectId, Error>;

    ///
    /// Adds current user to readers of the notification.
    /// Notification unknown to the current snapshot is ignored.
    /// Failures are only logged.
    ///
    async fn mark_read(&self, id: ObjectId);

    ///
    /// Removes current user from readers of the notification.
    /// Notification unknown to the current snapshot is ignored.
    /// Failures are only logged.
    ///
    async fn unmark_read(&self, id: ObjectId);

    ///
    /// Hides notification without deleting it.
    /// Failures are only logged.
    ///
    async fn deactivate(&self, id: ObjectId);

    ///
    /// Deletes notification permanently.
    /// Deleting notification that does not exist succeeds.
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when there is no current user
    /// - [Error::StoreUnavailable] when store is not configured
    ///
    async fn delete(&self, id: ObjectId) -> Result<(), Error>;
}
