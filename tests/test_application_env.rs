mod common;

use backoffice_notifications::{
    application::ApplicationEnv, dto::User, service::alerts_service::AlertPermission,
};
use serial_test::serial;

#[test]
#[serial]
fn minimal_configuration() {
    common::set_required_env();

    let env = ApplicationEnv::parse().unwrap();

    assert_eq!(env.db_name, "backoffice");
    assert_eq!(env.sound_player, "paplay");
    assert_eq!(env.alert_permission, AlertPermission::Default);
    assert!(env.db_connection_string.is_none());
    assert!(env.admin_email.is_none());
    assert!(env.alert_icon.is_none());
    assert!(env.user.is_none());
}

#[test]
#[serial]
fn full_configuration() {
    common::set_required_env();
    std::env::set_var(
        "BACKOFFICE_NOTIFICATIONS_DB_CONNECTION_STRING",
        "mongodb://localhost:27017",
    );
    std::env::set_var("BACKOFFICE_NOTIFICATIONS_ADMIN_EMAIL", "admin@company.com");
    std::env::set_var("BACKOFFICE_NOTIFICATIONS_ALERT_ICON", "icons/bell.png");
    std::env::set_var("BACKOFFICE_NOTIFICATIONS_ALERT_PERMISSION", "granted");
    std::env::set_var("BACKOFFICE_NOTIFICATIONS_USER_ID", "user-1");
    std::env::set_var("BACKOFFICE_NOTIFICATIONS_USER_EMAIL", "user@company.com");

    let env = ApplicationEnv::parse().unwrap();

    assert_eq!(
        env.db_connection_string.as_deref(),
        Some("mongodb://localhost:27017")
    );
    assert_eq!(env.admin_email.as_deref(), Some("admin@company.com"));
    assert_eq!(env.alert_icon.as_deref(), Some("icons/bell.png"));
    assert_eq!(env.alert_permission, AlertPermission::Granted);
    assert_eq!(
        env.user,
        Some(User {
            id: "user-1".to_string(),
            email: "user@company.com".to_string(),
        })
    );
}

#[test]
#[serial]
fn missing_required_variable() {
    common::set_required_env();
    std::env::remove_var("BACKOFFICE_NOTIFICATIONS_SOUND_URL");

    let result = ApplicationEnv::parse();

    assert!(result.is_err());
}

#[test]
#[serial]
fn invalid_alert_permission() {
    common::set_required_env();
    std::env::set_var("BACKOFFICE_NOTIFICATIONS_ALERT_PERMISSION", "maybe");

    let result = ApplicationEnv::parse();

    assert!(result.is_err());
}

#[test]
#[serial]
fn user_id_without_email() {
    common::set_required_env();
    std::env::set_var("BACKOFFICE_NOTIFICATIONS_USER_ID", "user-1");

    let result = ApplicationEnv::parse();

    assert!(result.is_err());
}

#[test]
#[serial]
fn empty_optional_variable_is_missing() {
    common::set_required_env();
    std::env::set_var("BACKOFFICE_NOTIFICATIONS_DB_CONNECTION_STRING", "");
    std::env::set_var("BACKOFFICE_NOTIFICATIONS_ADMIN_EMAIL", "");

    let env = ApplicationEnv::parse().unwrap();

    assert!(env.db_connection_string.is_none());
    assert!(env.admin_email.is_none());
}
