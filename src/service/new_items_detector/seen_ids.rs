use crate::dto::Notification;
use bson::oid::ObjectId;
use std::collections::HashSet;

///
/// Identifiers present in the most recently processed snapshot.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenIds(HashSet<ObjectId>);

impl SeenIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a Notification> for SeenIds {
    fn from_iter<T: IntoIterator<Item = &'a Notification>>(iter: T) -> Self {
        Self(iter.into_iter().map(|notification| notification.id).collect())
    }
}
