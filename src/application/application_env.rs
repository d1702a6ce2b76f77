use crate::{dto::User, service::alerts_service::AlertPermission};
use anyhow::anyhow;
use std::str::FromStr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    /// Notifications store is unavailable when not set
    pub db_connection_string: Option<String>,
    pub db_name: String,

    pub admin_email: Option<String>,

    pub sound_url: String,
    pub sound_player: String,
    pub desktop_notifier: String,
    pub alert_icon: Option<String>,
    pub alert_permission: AlertPermission,

    /// User logged in at startup
    pub user: Option<User>,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("BACKOFFICE_NOTIFICATIONS_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("BACKOFFICE_NOTIFICATIONS_LOG_FILENAME")?;
        let db_connection_string =
            Self::optional_env_var("BACKOFFICE_NOTIFICATIONS_DB_CONNECTION_STRING");
        let db_name = Self::env_var("BACKOFFICE_NOTIFICATIONS_DB_NAME")?;
        let admin_email = Self::optional_env_var("BACKOFFICE_NOTIFICATIONS_ADMIN_EMAIL");
        let sound_url = Self::env_var("BACKOFFICE_NOTIFICATIONS_SOUND_URL")?;
        let sound_player = Self::env_var("BACKOFFICE_NOTIFICATIONS_SOUND_PLAYER")?;
        let desktop_notifier = Self::env_var("BACKOFFICE_NOTIFICATIONS_DESKTOP_NOTIFIER")?;
        let alert_icon = Self::optional_env_var("BACKOFFICE_NOTIFICATIONS_ALERT_ICON");
        let alert_permission =
            AlertPermission::from_str(&Self::env_var("BACKOFFICE_NOTIFICATIONS_ALERT_PERMISSION")?)
                .map_err(|_| {
                    anyhow!(
                        "BACKOFFICE_NOTIFICATIONS_ALERT_PERMISSION must be one of: granted, denied, default"
                    )
                })?;

        let user = match (
            Self::optional_env_var("BACKOFFICE_NOTIFICATIONS_USER_ID"),
            Self::optional_env_var("BACKOFFICE_NOTIFICATIONS_USER_EMAIL"),
        ) {
            (Some(id), Some(email)) => Some(User { id, email }),
            (None, None) => None,
            _ => anyhow::bail!(
                "BACKOFFICE_NOTIFICATIONS_USER_ID and BACKOFFICE_NOTIFICATIONS_USER_EMAIL must be set together"
            ),
        };

        Ok(Self {
            log_directory,
            log_filename,
            db_connection_string,
            db_name,
            admin_email,
            sound_url,
            sound_player,
            desktop_notifier,
            alert_icon,
            alert_permission,
            user,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}
