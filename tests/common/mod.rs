#![allow(dead_code)]

use backoffice_notifications::{
    application::ApplicationEnv, dto::NotificationsState,
    service::alerts_service::AlertPermission,
};
use std::{sync::Once, time::Duration};
use tokio::sync::watch;
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub const REQUIRED_ENV: [(&str, &str); 7] = [
    ("BACKOFFICE_NOTIFICATIONS_LOG_DIRECTORY", "logs"),
    ("BACKOFFICE_NOTIFICATIONS_LOG_FILENAME", "backoffice-notifications.log"),
    ("BACKOFFICE_NOTIFICATIONS_DB_NAME", "backoffice"),
    ("BACKOFFICE_NOTIFICATIONS_SOUND_URL", "sounds/notification.mp3"),
    ("BACKOFFICE_NOTIFICATIONS_SOUND_PLAYER", "paplay"),
    ("BACKOFFICE_NOTIFICATIONS_DESKTOP_NOTIFIER", "notify-send"),
    ("BACKOFFICE_NOTIFICATIONS_ALERT_PERMISSION", "default"),
];

pub const OPTIONAL_ENV: [&str; 5] = [
    "BACKOFFICE_NOTIFICATIONS_DB_CONNECTION_STRING",
    "BACKOFFICE_NOTIFICATIONS_ADMIN_EMAIL",
    "BACKOFFICE_NOTIFICATIONS_ALERT_ICON",
    "BACKOFFICE_NOTIFICATIONS_USER_ID",
    "BACKOFFICE_NOTIFICATIONS_USER_EMAIL",
];

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn db_connection_string() -> String {
    std::env::var("BACKOFFICE_NOTIFICATIONS_DB_CONNECTION_STRING").unwrap()
}

/// Replaces process environment with minimal valid configuration
pub fn set_required_env() {
    for (name, value) in REQUIRED_ENV {
        std::env::set_var(name, value);
    }
    for name in OPTIONAL_ENV {
        std::env::remove_var(name);
    }
}

/// Configuration with a fresh database name and alert commands that do nothing
pub fn create_test_env(admin_email: Option<&str>) -> ApplicationEnv {
    ApplicationEnv {
        log_directory: "logs".to_string(),
        log_filename: "test.log".to_string(),
        db_connection_string: std::env::var("BACKOFFICE_NOTIFICATIONS_DB_CONNECTION_STRING").ok(),
        db_name: format!("test_{}", Uuid::new_v4()),
        admin_email: admin_email.map(str::to_string),
        sound_url: "sounds/notification.mp3".to_string(),
        sound_player: "true".to_string(),
        desktop_notifier: "true".to_string(),
        alert_icon: None,
        alert_permission: AlertPermission::Denied,
        user: None,
    }
}

pub async fn destroy_test_database(env: &ApplicationEnv) {
    let client = mongodb::Client::with_uri_str(db_connection_string())
        .await
        .unwrap();
    let _ = client.database(&env.db_name).drop().await;
    client.shutdown().await;
}

pub async fn wait_for_state(
    state_rx: &mut watch::Receiver<NotificationsState>,
    predicate: impl FnMut(&NotificationsState) -> bool,
) -> NotificationsState {
    tokio::time::timeout(Duration::from_secs(10), state_rx.wait_for(predicate))
        .await
        .expect("state not reached in time")
        .unwrap()
        .clone()
}
