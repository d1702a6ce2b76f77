use backoffice_notifications::{
    application::{self, ApplicationEnv, ApplicationState},
    dto::NotificationsState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    let _tracing_guard = application::setup_tracing(&env)?;

    let (state, state_to_close) = application::create_state(&env).await?;

    if let Some(user) = env.user.clone() {
        state.auth_session.login(user);
    }

    tokio::select! {
        _ = report_state(state) => {},
        _ = application::shutdown_signal() => {},
    }

    application::close(state_to_close).await;

    Ok(())
}

async fn report_state(state: ApplicationState) {
    let mut state_rx = state.subscription_service.state();
    loop {
        log_state(&state_rx.borrow_and_update());
        if state_rx.changed().await.is_err() {
            break;
        }
    }
    tracing::warn!("notifications state publisher closed");
    std::future::pending::<()>().await;
}

fn log_state(state: &NotificationsState) {
    tracing::info!(
        notifications = state.notifications.len(),
        unread = state.unread.len(),
        loading = state.loading,
        is_admin = state.is_admin,
        "notifications state"
    );
}
