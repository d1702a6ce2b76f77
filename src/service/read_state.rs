use crate::dto::{Notification, User};

///
/// Checks whether user has read the notification.
/// Missing user never has read anything.
///
pub fn is_read(notification: &Notification, user: Option<&User>) -> bool {
    user.is_some_and(|user| notification.is_read_by(&user.id))
}

///
/// Returns notifications the user has not read yet, preserving order.
///
pub fn unread<'a, I>(notifications: I, user: Option<&User>) -> Vec<Notification>
where
    I: IntoIterator<Item = &'a Notification>,
{
    notifications
        .into_iter()
        .filter(|notification| !is_read(notification, user))
        .cloned()
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::{NotificationCategory, NotificationPriority, NotificationStatus};
    use bson::oid::ObjectId;
    use time::OffsetDateTime;

    fn create_notification(readers: &[&str]) -> Notification {
        Notification {
            id: ObjectId::new(),
            title: "Backup concluído".to_string(),
            body: "Backup noturno finalizado".to_string(),
            created_at: OffsetDateTime::now_utc(),
            created_by: "admin@admin".to_string(),
            status: NotificationStatus::Active,
            priority: NotificationPriority::Low,
            category: NotificationCategory::Info,
            users_who_read: readers.iter().map(|reader| reader.to_string()).collect(),
        }
    }

    fn create_user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@backoffice"),
        }
    }

    #[test]
    fn is_read_user_in_read_set() {
        let notification = create_notification(&["user-1", "user-2"]);

        assert!(is_read(&notification, Some(&create_user("user-2"))));
    }

    #[test]
    fn is_read_user_not_in_read_set() {
        let notification = create_notification(&["user-1"]);

        assert!(!is_read(&notification, Some(&create_user("user-3"))));
    }

    #[test]
    fn is_read_missing_user() {
        let notification = create_notification(&["user-1"]);

        assert!(!is_read(&notification, None));
    }

    #[test]
    fn unread_keeps_order() {
        let first = create_notification(&[]);
        let read = create_notification(&["user-1"]);
        let last = create_notification(&["user-2"]);
        let notifications = vec![first.clone(), read, last.clone()];

        let unread = unread(&notifications, Some(&create_user("user-1")));

        assert_eq!(unread, vec![first, last]);
    }
}
