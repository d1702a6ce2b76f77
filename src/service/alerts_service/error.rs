#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("sound player command is empty")]
    EmptyCommand,

    #[error("failed to start sound player: {0}")]
    Spawn(#[from] std::io::Error),
}
