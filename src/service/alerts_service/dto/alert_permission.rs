use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AlertPermission {
    Granted,
    Denied,

    /// User has not decided yet, permission has to be requested
    Default,
}
