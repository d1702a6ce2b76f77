pub struct SubscriptionServiceConfig {
    /// Users with this email get administrator flag in published state
    pub admin_email: Option<String>,
}
