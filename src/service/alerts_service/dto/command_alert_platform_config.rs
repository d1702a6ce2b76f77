use super::AlertPermission;

///
/// Command lines are split on whitespace without any shell quoting,
/// so neither the program path nor its arguments may contain spaces.
///
pub struct CommandAlertPlatformConfig {
    /// Command line of the player, sound url is appended as the last argument
    pub sound_player: String,

    /// Command line of the notifier, called with `title` and `body` arguments
    pub desktop_notifier: String,

    pub icon: Option<String>,

    pub permission: AlertPermission,
}
