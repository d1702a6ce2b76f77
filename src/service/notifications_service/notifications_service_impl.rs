use super::NotificationsService;
use crate::{
    dto::{NewNotification, NotificationStatus, NotificationsState, User},
    error::Error,
    repository::{self, NotificationsRepository},
};
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::watch;

pub struct NotificationsServiceImpl {
    repository: Option<Arc<dyn NotificationsRepository>>,

    user_rx: watch::Receiver<Option<User>>,
    state_rx: watch::Receiver<NotificationsState>,
}

impl NotificationsServiceImpl {
    pub fn new(
        repository: Option<Arc<dyn NotificationsRepository>>,
        user_rx: watch::Receiver<Option<User>>,
        state_rx: watch::Receiver<NotificationsState>,
    ) -> Self {
        Self {
            repository,
            user_rx,
            state_rx,
        }
    }

    fn validate_new_notification(notification: &NewNotification) -> Result<(), Error> {
        if notification.title.trim().is_empty() {
            return Err(Error::Validation("title cannot be blank"));
        }
        if notification.body.trim().is_empty() {
            return Err(Error::Validation("body cannot be blank"));
        }

        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.user_rx.borrow().clone()
    }

    fn require_session(&self) -> Result<(User, &Arc<dyn NotificationsRepository>), Error> {
        let user = self.current_user().ok_or(Error::Unauthenticated)?;
        let repository = self.repository.as_ref().ok_or(Error::StoreUnavailable)?;

        Ok((user, repository))
    }

    ///
    /// Looks notification up in the latest snapshot.
    ///
    /// ### Returns
    /// Whether user has read it or None when it's not in the snapshot
    ///
    fn cached_read_state(&self, id: &ObjectId, user: &User) -> Option<bool> {
        self.state_rx
            .borrow()
            .find(id)
            .map(|notification| notification.is_read_by(&user.id))
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    #[tracing::instrument(
        name = "Create notification",
        skip_all,
        fields(
            priority = %notification.priority,
            category = %notification.category,
        )
    )]
    async fn create_notification(
        &self,
        notification: NewNotification,
    ) -> Result<ObjectId, Error> {
        let (user, repository) = self.require_session()?;

        Self::validate_new_notification(&notification)?;

        tracing::info!("creating notification");

        let id = repository
            .insert(&notification, OffsetDateTime::now_utc(), &user.email)
            .await
            .inspect_err(|err| tracing::warn!(%err, "failed to create notification"))?;

        tracing::info!(%id, "created notification");

        Ok(id)
    }

    #[tracing::instrument(name = "Mark read", skip_all, fields(id = %id))]
    async fn mark_read(&self, id: ObjectId) {
        let Ok((user, repository)) = self.require_session() else {
            tracing::debug!("no session, ignoring");
            return;
        };

        match self.cached_read_state(&id, &user) {
            None => {
                tracing::debug!("notification not in current snapshot, ignoring");
                return;
            }
            Some(true) => {
                tracing::trace!("notification already read");
                return;
            }
            Some(false) => {}
        }

        match repository.add_reader(id, &user.id).await {
            Ok(()) => tracing::info!("marked notification as read"),
            Err(err) => tracing::warn!(%err, "failed to mark notification as read"),
        }
    }

    #[tracing::instrument(name = "Unmark read", skip_all, fields(id = %id))]
    async fn unmark_read(&self, id: ObjectId) {
        let Ok((user, repository)) = self.require_session() else {
            tracing::debug!("no session, ignoring");
            return;
        };

        match self.cached_read_state(&id, &user) {
            None => {
                tracing::debug!("notification not in current snapshot, ignoring");
                return;
            }
            Some(false) => {
                tracing::trace!("notification not read");
                return;
            }
            Some(true) => {}
        }

        match repository.remove_reader(id, &user.id).await {
            Ok(()) => tracing::info!("unmarked notification as read"),
            Err(err) => tracing::warn!(%err, "failed to unmark notification as read"),
        }
    }

    #[tracing::instrument(name = "Deactivate", skip_all, fields(id = %id))]
    async fn deactivate(&self, id: ObjectId) {
        let Ok((_, repository)) = self.require_session() else {
            tracing::debug!("no session, ignoring");
            return;
        };

        match repository
            .update_status(id, NotificationStatus::Inactive)
            .await
        {
            Ok(()) => tracing::info!("deactivated notification"),
            Err(err) => tracing::warn!(%err, "failed to deactivate notification"),
        }
    }

    #[tracing::instrument(name = "Delete", skip_all, fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> Result<(), Error> {
        let (_, repository) = self.require_session()?;

        match repository.delete(id).await {
            Ok(()) => {
                tracing::info!("deleted notification");
                Ok(())
            }
            Err(repository::Error::NoDocumentDeleted) => {
                tracing::info!("notification already deleted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "failed to delete notification");
                Err(Error::Database(err))
            }
        }
    }
}
