use super::{
    entity::{NotificationFindEntity, NotificationInsertEntity},
    Error, NotificationsRepository, NotificationsSnapshots,
};
use crate::dto::{NewNotification, Notification, NotificationStatus};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures::{future, stream, StreamExt, TryStreamExt};
use mongodb::{error::ErrorKind, options::IndexOptions, Collection, Database, IndexModel};
use std::sync::Arc;
use time::OffsetDateTime;

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_CREATED_AT: &str = "index_created_at";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == NOTIFICATIONS) {
            tracing::debug!(collection = NOTIFICATIONS, "creating collection");
            database.create_collection(NOTIFICATIONS).await?;
        }

        let collection = database.collection::<Document>(NOTIFICATIONS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_CREATED_AT.to_string()) {
            Self::create_created_at_index(&collection).await?;
            tracing::debug!(
                collection = NOTIFICATIONS,
                index = INDEX_NAME_CREATED_AT,
                "created index"
            );
        }

        Ok(Self { database })
    }

    async fn create_created_at_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "created_at": -1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_CREATED_AT.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    async fn find_all(
        collection: &Collection<NotificationFindEntity>,
    ) -> Result<Vec<Notification>, Error> {
        let notifications = collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?
            .map_ok(Notification::from)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(notifications)
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn watch(&self) -> Result<NotificationsSnapshots, Error> {
        // Change stream is opened before the initial query so that
        // no write can slip in between them unnoticed
        let change_stream = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .watch()
            .await?;

        let collection = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS);
        let initial_snapshot = Self::find_all(&collection).await?;

        let snapshots = change_stream.map_err(Error::from).and_then(move |event| {
            let collection = collection.clone();
            async move {
                tracing::trace!(operation = ?event.operation_type, "notifications changed");
                Self::find_all(&collection).await
            }
        });

        let stream = stream::once(future::ready(Ok(initial_snapshot)))
            .chain(snapshots)
            .boxed();

        Ok(stream)
    }

    async fn insert(
        &self,
        notification: &NewNotification,
        created_at: OffsetDateTime,
        created_by: &str,
    ) -> Result<ObjectId, Error> {
        let insert_entity = NotificationInsertEntity {
            title: &notification.title,
            body: &notification.body,
            created_at: DateTime::from(created_at),
            created_by,
            status: NotificationStatus::Active,
            priority: notification.priority,
            category: notification.category,
            users_who_read: [],
        };

        let insert_result = self
            .database
            .collection::<NotificationInsertEntity>(NOTIFICATIONS)
            .insert_one(&insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(id)
    }

    async fn add_reader(&self, id: ObjectId, user_id: &str) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$addToSet": {
                        "users_who_read": user_id,
                    }
                },
            )
            .await?;

        // matched_count instead of modified_count because adding
        // user that already read notification doesn't count as modification
        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn remove_reader(&self, id: ObjectId, user_id: &str) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$pull": {
                        "users_who_read": user_id,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn update_status(&self, id: ObjectId, status: NotificationStatus) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "status": status.to_string(),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<(), Error> {
        let delete_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .delete_one(doc! {
                "_id": id,
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentDeleted),
        }
    }
}
