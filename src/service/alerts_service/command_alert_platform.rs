use super::{AlertPermission, AlertPlatform, CommandAlertPlatformConfig, PlaybackError};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::{process::Command, sync::Mutex};

///
/// [AlertPlatform] that delegates to external programs,
/// e.g. `mpv --no-video` for sound and `notify-send` for system notifications.
///
pub struct CommandAlertPlatform {
    config: CommandAlertPlatformConfig,
    permission: Mutex<AlertPermission>,
}

impl CommandAlertPlatform {
    pub fn new(config: CommandAlertPlatformConfig) -> Self {
        let permission = Mutex::new(config.permission);

        Self { config, permission }
    }

    ///
    /// Splits command line on whitespace, quoting is not supported
    ///
    fn command(command_line: &str) -> Option<Command> {
        let mut parts = command_line.split_whitespace();
        let mut command = Command::new(parts.next()?);
        command
            .args(parts)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        Some(command)
    }

    ///
    /// Notifier that cannot even be started will never show anything
    ///
    async fn probe_notifier(&self) -> AlertPermission {
        let Some(mut command) = Self::command(&self.config.desktop_notifier) else {
            return AlertPermission::Denied;
        };

        match command.arg("--version").status().await {
            Ok(status) if status.success() => AlertPermission::Granted,
            Ok(status) => {
                tracing::debug!(%status, "notifier probe failed");
                AlertPermission::Denied
            }
            Err(err) => {
                tracing::debug!(%err, "notifier not available");
                AlertPermission::Denied
            }
        }
    }
}

#[async_trait]
impl AlertPlatform for CommandAlertPlatform {
    fn play_sound(&self, url: &str) -> Result<(), PlaybackError> {
        let mut command =
            Self::command(&self.config.sound_player).ok_or(PlaybackError::EmptyCommand)?;
        let mut child = command.arg(url).spawn()?;

        // Player runs detached, task only reaps it
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => tracing::trace!("sound played"),
                Ok(status) => tracing::warn!(%status, "sound player failed"),
                Err(err) => tracing::warn!(%err, "failed to wait for sound player"),
            }
        });

        Ok(())
    }

    async fn permission(&self) -> AlertPermission {
        *self.permission.lock().await
    }

    async fn request_permission(&self) -> AlertPermission {
        let mut permission = self.permission.lock().await;
        if *permission == AlertPermission::Default {
            *permission = self.probe_notifier().await;
            tracing::info!(permission = %*permission, "system notifications permission resolved");
        }

        *permission
    }

    async fn show_notification(&self, title: &str, body: &str) {
        let Some(mut command) = Self::command(&self.config.desktop_notifier) else {
            tracing::warn!("desktop notifier command is empty");
            return;
        };

        if let Some(icon) = &self.config.icon {
            command.arg("--icon").arg(icon);
        }

        match command.arg(title).arg(body).status().await {
            Ok(status) if status.success() => tracing::trace!("notification shown"),
            Ok(status) => tracing::warn!(%status, "desktop notifier failed"),
            Err(err) => tracing::warn!(%err, "failed to run desktop notifier"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn command_split_on_whitespace() {
        let command = CommandAlertPlatform::command("  mpv   --no-video\t--volume=50 ").unwrap();

        let command = command.as_std();
        assert_eq!(command.get_program(), OsStr::new("mpv"));
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            vec![OsStr::new("--no-video"), OsStr::new("--volume=50")]
        );
    }

    #[test]
    fn command_blank() {
        assert!(CommandAlertPlatform::command(" \t ").is_none());
    }

    #[tokio::test]
    async fn play_sound_player_started() {
        let platform = create_platform("true", "true", AlertPermission::Granted);

        let result = platform.play_sound("https://example.com/sound.mp3");

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn play_sound_player_missing() {
        let platform = create_platform(
            "player-that-does-not-exist-2f9c",
            "true",
            AlertPermission::Granted,
        );

        let result = platform.play_sound("https://example.com/sound.mp3");

        assert!(matches!(result, Err(PlaybackError::Spawn(_))));
    }

    #[tokio::test]
    async fn play_sound_empty_command() {
        let platform = create_platform("   ", "true", AlertPermission::Granted);

        let result = platform.play_sound("https://example.com/sound.mp3");

        assert!(matches!(result, Err(PlaybackError::EmptyCommand)));
    }

    #[tokio::test]
    async fn request_permission_keeps_decision() {
        let platform = create_platform("true", "false", AlertPermission::Granted);

        let permission = platform.request_permission().await;

        assert_eq!(permission, AlertPermission::Granted);
    }

    #[tokio::test]
    async fn request_permission_default_notifier_available() {
        let platform = create_platform("true", "true", AlertPermission::Default);

        let permission = platform.request_permission().await;

        assert_eq!(permission, AlertPermission::Granted);
        assert_eq!(platform.permission().await, AlertPermission::Granted);
    }

    #[tokio::test]
    async fn request_permission_default_notifier_missing() {
        let platform = create_platform(
            "true",
            "notifier-that-does-not-exist-8a1d",
            AlertPermission::Default,
        );

        let permission = platform.request_permission().await;

        assert_eq!(permission, AlertPermission::Denied);
        assert_eq!(platform.permission().await, AlertPermission::Denied);
    }

    fn create_platform(
        sound_player: &str,
        desktop_notifier: &str,
        permission: AlertPermission,
    ) -> CommandAlertPlatform {
        CommandAlertPlatform::new(CommandAlertPlatformConfig {
            sound_player: sound_player.to_string(),
            desktop_notifier: desktop_notifier.to_string(),
            icon: None,
            permission,
        })
    }
}
