use super::SubscriptionServiceConfig;
use crate::{
    dto::{Notification, NotificationsState, User},
    repository::{NotificationsRepository, NotificationsSnapshots},
    service::{
        alerts_service::AlertsService,
        new_items_detector::{detect_new_items, DetectedItems, SeenIds},
        read_state,
    },
};
use futures::StreamExt;
use std::sync::Arc;
use tokio::{
    sync::{
        watch::{self, error::RecvError},
        Notify,
    },
    task::JoinHandle,
};

pub struct SubscriptionStateMachine {
    config: SubscriptionServiceConfig,

    repository: Option<Arc<dyn NotificationsRepository>>,
    alerts_service: Arc<dyn AlertsService>,

    user_rx: watch::Receiver<Option<User>>,
    state_tx: watch::Sender<NotificationsState>,

    /// User of the current session
    user: Option<User>,

    /// Alerts of the current session, aborted when the session ends
    alert_tasks: Vec<JoinHandle<()>>,

    snapshots: Option<NotificationsSnapshots>,
    seen: SeenIds,

    state: State,
}

impl SubscriptionStateMachine {
    pub fn new(
        config: SubscriptionServiceConfig,
        repository: Option<Arc<dyn NotificationsRepository>>,
        alerts_service: Arc<dyn AlertsService>,
        user_rx: watch::Receiver<Option<User>>,
        state_tx: watch::Sender<NotificationsState>,
    ) -> Self {
        Self {
            config,
            repository,
            alerts_service,
            user_rx,
            state_tx,
            user: None,
            alert_tasks: Vec::new(),
            snapshots: None,
            seen: SeenIds::new(),
            state: State::Unsubscribed,
        }
    }

    ///
    /// Infinite loop that follows authenticated user.
    /// Loop can be stopped by using notify.
    ///
    #[tracing::instrument(name = "Subscription", skip_all)]
    pub async fn run(mut self, stop: Arc<Notify>) {
        tracing::info!("state machine started");

        let user = self.user_rx.borrow_and_update().clone();
        self.start_session(user);

        tokio::select! {
            biased;

            _ = stop.notified() => {}

            _ = async { loop {
                match self.state {
                    State::Unsubscribed => {
                        tracing::debug!("state: Unsubscribed");
                        self.unsubscribed_state().await;
                    }
                    State::Subscribing => {
                        tracing::debug!("state: Subscribing");
                        self.subscribing_state().await;
                    }
                    State::Subscribed => {
                        tracing::trace!("state: Subscribed");
                        self.subscribed_state().await;
                    }
                }
            }} => {}
        }

        self.unsubscribe();
        self.user = None;
        self.state_tx.send_replace(NotificationsState::default());

        tracing::info!("state machine finished");
    }

    async fn unsubscribed_state(&mut self) {
        if self.user_rx.changed().await.is_err() {
            tracing::info!("authentication closed, waiting for shutdown");
            std::future::pending::<()>().await;
        }

        let user = self.user_rx.borrow_and_update().clone();
        self.switch_user(user);
    }

    async fn subscribing_state(&mut self) {
        let Some(repository) = self.repository.clone() else {
            tracing::warn!("notifications store unavailable");
            self.fail();
            return;
        };

        tokio::select! {
            biased;

            changed = self.user_rx.changed() => {
                self.user_changed(changed);
            }
            result = repository.watch() => match result {
                Ok(snapshots) => {
                    tracing::info!("subscribed to notifications");
                    self.snapshots = Some(snapshots);
                    self.state = State::Subscribed;
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to subscribe to notifications");
                    self.fail();
                }
            }
        }
    }

    async fn subscribed_state(&mut self) {
        let Some(snapshots) = self.snapshots.as_mut() else {
            self.state = State::Unsubscribed;
            return;
        };

        tokio::select! {
            biased;

            changed = self.user_rx.changed() => {
                self.user_changed(changed);
            }
            snapshot = snapshots.next() => match snapshot {
                Some(Ok(snapshot)) => self.process_snapshot(snapshot),
                Some(Err(err)) => {
                    tracing::warn!(%err, "notifications subscription failed");
                    self.fail();
                }
                None => {
                    tracing::warn!("notifications subscription closed by store");
                    self.fail();
                }
            }
        }
    }

    ///
    /// Publishes the snapshot and starts alerting in the background,
    /// loop is free to handle user changes while alert is pending
    ///
    fn process_snapshot(&mut self, snapshot: Vec<Notification>) {
        let Some(user) = self.user.clone() else {
            return;
        };

        let notifications = snapshot
            .into_iter()
            .filter(Notification::is_active)
            .collect::<Vec<_>>();

        let previous = std::mem::take(&mut self.seen);
        let DetectedItems { new, seen } = detect_new_items(previous, &notifications);
        tracing::debug!(
            active = notifications.len(),
            new = new.len(),
            "processing snapshot"
        );
        tracing::trace!(
            new_ids = ?new.iter().map(|n| n.id.to_hex()).collect::<Vec<_>>(),
            seen_ids = seen.len(),
            "snapshot delta"
        );

        let new = new.into_iter().cloned().collect::<Vec<_>>();
        self.seen = seen;

        let unread = read_state::unread(&notifications, Some(&user));
        let state = NotificationsState {
            notifications,
            unread,
            loading: false,
            is_admin: self.is_admin(),
        };
        self.publish(state);

        self.spawn_alert(new, user);
    }

    fn spawn_alert(&mut self, new_notifications: Vec<Notification>, user: User) {
        self.alert_tasks.retain(|task| !task.is_finished());

        let alerts_service = Arc::clone(&self.alerts_service);
        let task = tokio::spawn(async move {
            alerts_service.dispatch(new_notifications, &user).await;
        });
        self.alert_tasks.push(task);
    }

    fn user_changed(&mut self, changed: Result<(), RecvError>) {
        match changed {
            Ok(()) => {
                let user = self.user_rx.borrow_and_update().clone();
                self.switch_user(user);
            }
            Err(_) => {
                tracing::info!("authentication closed");
                self.start_session(None);
            }
        }
    }

    fn switch_user(&mut self, user: Option<User>) {
        if user == self.user {
            tracing::trace!("user unchanged");
            return;
        }

        self.start_session(user);
    }

    ///
    /// Ends previous session before anything of the new one is published
    ///
    fn start_session(&mut self, user: Option<User>) {
        self.unsubscribe();
        self.user = user;

        match &self.user {
            Some(user) => tracing::info!(user_id = user.id.as_str(), "session started"),
            None => tracing::info!("no authenticated user"),
        }

        let state = NotificationsState {
            loading: self.user.is_some(),
            is_admin: self.is_admin(),
            ..Default::default()
        };
        self.publish(state);

        self.state = match self.user {
            Some(_) => State::Subscribing,
            None => State::Unsubscribed,
        };
    }

    ///
    /// Session stays without notifications until user changes
    ///
    fn fail(&mut self) {
        self.unsubscribe();

        let state = NotificationsState {
            is_admin: self.is_admin(),
            ..Default::default()
        };
        self.publish(state);

        self.state = State::Unsubscribed;
    }

    fn unsubscribe(&mut self) {
        self.seen = SeenIds::new();

        for task in self.alert_tasks.drain(..) {
            if !task.is_finished() {
                tracing::debug!("aborting pending alert");
                task.abort();
            }
        }

        if self.snapshots.take().is_some() {
            tracing::info!("listener detached");
        }
    }

    fn publish(&self, state: NotificationsState) {
        tracing::trace!(
            notifications = state.notifications.len(),
            unread = state.unread.len(),
            loading = state.loading,
            "publishing state"
        );
        self.state_tx.send_replace(state);
    }

    fn is_admin(&self) -> bool {
        match (&self.user, &self.config.admin_email) {
            (Some(user), Some(admin_email)) => user.email == *admin_email,
            _ => false,
        }
    }
}

enum State {
    Unsubscribed,
    Subscribing,
    Subscribed,
}
