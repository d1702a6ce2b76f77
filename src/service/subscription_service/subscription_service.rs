use super::{subscription_state_machine::SubscriptionStateMachine, SubscriptionServiceConfig};
use crate::{
    dto::{NotificationsState, User},
    repository::NotificationsRepository,
    service::alerts_service::AlertsService,
};
use std::sync::Arc;
use tokio::{
    sync::{watch, Mutex, Notify},
    task::JoinHandle,
};

///
/// Keeps exactly one live subscription to the notifications store
/// for the currently authenticated user.
///
/// Subscription follows `user_rx`: login subscribes, logout unsubscribes
/// and change of the user replaces subscription.
/// When store is missing or fails, session degrades to an empty list
/// until the user changes.
///
pub struct SubscriptionService {
    state_rx: watch::Receiver<NotificationsState>,

    task_handle: Mutex<Option<JoinHandle<()>>>,
    close_notify: Arc<Notify>,
}

impl SubscriptionService {
    pub fn new(
        config: SubscriptionServiceConfig,
        repository: Option<Arc<dyn NotificationsRepository>>,
        alerts_service: Arc<dyn AlertsService>,
        user_rx: watch::Receiver<Option<User>>,
    ) -> Self {
        let (state_tx, state_rx) = watch::channel(NotificationsState::default());

        let state_machine =
            SubscriptionStateMachine::new(config, repository, alerts_service, user_rx, state_tx);

        let close_notify = Arc::new(Notify::new());
        let close_notify_clone = Arc::clone(&close_notify);
        let task_handle = tokio::spawn(async move {
            state_machine.run(close_notify_clone).await;
        });

        Self {
            state_rx,
            task_handle: Mutex::new(Some(task_handle)),
            close_notify,
        }
    }

    ///
    /// Receiver of the state published after every processed snapshot
    ///
    pub fn state(&self) -> watch::Receiver<NotificationsState> {
        self.state_rx.clone()
    }

    ///
    /// Detaches listener and stops the service.
    /// Calling it again does nothing.
    ///
    pub async fn close(&self) {
        let Some(task_handle) = self.task_handle.lock().await.take() else {
            tracing::debug!("subscription service already closed");
            return;
        };

        tracing::info!("closing subscription service");

        self.close_notify.notify_one();

        match task_handle.await {
            Ok(()) => tracing::info!("subscription service closed"),
            Err(err) => tracing::error!(%err, "subscription task failed"),
        }
    }
}
