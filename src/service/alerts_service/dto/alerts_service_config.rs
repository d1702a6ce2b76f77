pub struct AlertsServiceConfig {
    pub sound_url: String,
}
