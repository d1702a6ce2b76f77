mod new_notification;
mod notification;
mod notifications_state;
mod user;

pub use new_notification::*;
pub use notification::*;
pub use notifications_state::*;
pub use user::*;
