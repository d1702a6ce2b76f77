use crate::dto::User;
use tokio::sync::watch;

///
/// Holds currently authenticated user and notifies subscribers when it changes.
///
pub struct AuthSession {
    user_tx: watch::Sender<Option<User>>,
}

impl AuthSession {
    pub fn new() -> Self {
        let (user_tx, _) = watch::channel(None);

        Self { user_tx }
    }

    pub fn login(&self, user: User) {
        tracing::info!(user_id = user.id.as_str(), "user logged in");
        self.user_tx.send_replace(Some(user));
    }

    pub fn logout(&self) {
        tracing::info!("user logged out");
        self.user_tx.send_replace(None);
    }

    pub fn current_user(&self) -> Option<User> {
        self.user_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user_tx.subscribe()
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}
