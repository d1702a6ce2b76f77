use super::{AlertPermission, PlaybackError};
use async_trait::async_trait;

///
/// Sound and system notification facilities of the platform the client runs on.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertPlatform: Send + Sync {
    ///
    /// Starts playing sound and returns without waiting for playback to finish.
    ///
    /// ### Errors
    /// - [PlaybackError] when playback could not be started
    ///
    fn play_sound(&self, url: &str) -> Result<(), PlaybackError>;

    async fn permission(&self) -> AlertPermission;

    ///
    /// Asks user for permission to show system notifications
    ///
    async fn request_permission(&self) -> AlertPermission;

    async fn show_notification(&self, title: &str, body: &str);
}
