use super::SeenIds;
use crate::dto::Notification;

pub struct DetectedItems<'a> {
    /// Notifications of the snapshot that were absent in the previous one
    pub new: Vec<&'a Notification>,

    /// Replaces previous [SeenIds] for the next comparison
    pub seen: SeenIds,
}

///
/// Compares snapshot with identifiers seen in the previous snapshot.
///
/// Ids missing from the snapshot are dropped from the returned [SeenIds],
/// so deleted or deactivated notifications never accumulate.
/// With empty `previous` every notification is new.
///
pub fn detect_new_items(previous: SeenIds, snapshot: &[Notification]) -> DetectedItems<'_> {
    let new = snapshot
        .iter()
        .filter(|notification| !previous.contains(&notification.id))
        .collect();
    let seen = snapshot.iter().collect();

    DetectedItems { new, seen }
}
