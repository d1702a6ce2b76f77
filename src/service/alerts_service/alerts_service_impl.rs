use super::{AlertPermission, AlertPlatform, AlertsService, AlertsServiceConfig};
use crate::{
    dto::{Notification, User},
    service::read_state,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct AlertsServiceImpl {
    config: AlertsServiceConfig,
    platform: Arc<dyn AlertPlatform>,
}

impl AlertsServiceImpl {
    pub fn new(config: AlertsServiceConfig, platform: Arc<dyn AlertPlatform>) -> Self {
        Self { config, platform }
    }

    fn play_sound(&self) {
        match self.platform.play_sound(&self.config.sound_url) {
            Ok(()) => tracing::trace!("sound started"),
            Err(err) => tracing::warn!(%err, "failed to play sound"),
        }
    }

    async fn show_notification(&self, notification: &Notification) {
        let permission = match self.platform.permission().await {
            AlertPermission::Default => {
                tracing::debug!("requesting permission");
                self.platform.request_permission().await
            }
            permission => permission,
        };

        match permission {
            AlertPermission::Granted => {
                self.platform
                    .show_notification(&notification.title, &notification.body)
                    .await;
                tracing::trace!("system notification shown");
            }
            permission => {
                tracing::debug!(%permission, "system notification not allowed");
            }
        }
    }
}

#[async_trait]
impl AlertsService for AlertsServiceImpl {
    #[tracing::instrument(
        name = "Alerts",
        skip_all,
        fields(
            user_id = user.id.as_str(),
            new = new_notifications.len(),
        )
    )]
    async fn dispatch(&self, new_notifications: Vec<Notification>, user: &User) {
        let new_unread = new_notifications
            .iter()
            .filter(|notification| !read_state::is_read(notification, Some(user)))
            .collect::<Vec<_>>();

        let Some(most_recent) = new_unread
            .iter()
            .max_by_key(|notification| notification.created_at)
        else {
            tracing::trace!("no new unread notifications");
            return;
        };

        tracing::info!(
            new_unread = new_unread.len(),
            most_recent = %most_recent.id,
            "alerting about new unread notifications"
        );

        self.play_sound();
        self.show_notification(most_recent).await;
    }
}
