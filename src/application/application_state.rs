use super::ApplicationEnv;
use crate::{
    auth::AuthSession,
    repository::{NotificationsRepository, NotificationsRepositoryImpl},
    service::{
        alerts_service::{
            AlertsServiceConfig, AlertsServiceImpl, CommandAlertPlatform,
            CommandAlertPlatformConfig,
        },
        notifications_service::{NotificationsService, NotificationsServiceImpl},
        subscription_service::{SubscriptionService, SubscriptionServiceConfig},
    },
};
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub auth_session: Arc<AuthSession>,
    pub notifications_service: Arc<dyn NotificationsService>,
    pub subscription_service: Arc<SubscriptionService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Option<Client>,
    pub subscription_service: Arc<SubscriptionService>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    let (db_client, repository) = match &env.db_connection_string {
        Some(db_connection_string) => {
            tracing::info!("connecting to database");
            let db_client_options = ClientOptions::parse(db_connection_string).await?;
            let db_client = Client::with_options(db_client_options)?;
            let db = db_client.database(&env.db_name);

            tracing::info!("creating repositories");
            let repository = match NotificationsRepositoryImpl::new(db).await {
                Ok(repository) => {
                    Some(Arc::new(repository) as Arc<dyn NotificationsRepository>)
                }
                Err(err) => {
                    tracing::error!(%err, "notifications store unreachable");
                    None
                }
            };

            (Some(db_client), repository)
        }
        None => {
            tracing::warn!("database not configured, notifications disabled");
            (None, None)
        }
    };

    tracing::info!("creating services");
    let auth_session = AuthSession::new();
    let auth_session = Arc::new(auth_session);

    let config = CommandAlertPlatformConfig {
        sound_player: env.sound_player.clone(),
        desktop_notifier: env.desktop_notifier.clone(),
        icon: env.alert_icon.clone(),
        permission: env.alert_permission,
    };
    let alert_platform = CommandAlertPlatform::new(config);
    let alert_platform = Arc::new(alert_platform);

    let config = AlertsServiceConfig {
        sound_url: env.sound_url.clone(),
    };
    let alerts_service = AlertsServiceImpl::new(config, alert_platform);
    let alerts_service = Arc::new(alerts_service);

    let config = SubscriptionServiceConfig {
        admin_email: env.admin_email.clone(),
    };
    let subscription_service = SubscriptionService::new(
        config,
        repository.clone(),
        alerts_service,
        auth_session.subscribe(),
    );
    let subscription_service = Arc::new(subscription_service);

    let notifications_service = NotificationsServiceImpl::new(
        repository,
        auth_session.subscribe(),
        subscription_service.state(),
    );
    let notifications_service = Arc::new(notifications_service);

    Ok((
        ApplicationState {
            auth_session,
            notifications_service,
            subscription_service: Arc::clone(&subscription_service),
        },
        ApplicationStateToClose {
            db_client,
            subscription_service,
        },
    ))
}
