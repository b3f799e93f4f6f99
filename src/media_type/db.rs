use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{bson, Database};

use crate::database::MongoMediaTypeStore;
use crate::error::Error;

use super::{MediaType, MediaTypeId};

pub async fn initialize(_db: &Database) -> Result<(), Error> {
    Ok(())
}

#[async_trait]
pub trait MediaTypeStore {
    async fn insert_media_type(&self, media_type: &MediaType) -> Result<(), Error>;

    async fn fetch_media_types(&self) -> Result<Vec<MediaType>, Error>;

    async fn fetch_media_type_by_id(
        &self,
        media_type_id: MediaTypeId,
    ) -> Result<Option<MediaType>, Error>;

    async fn update_media_type(&self, media_type: MediaType) -> Result<MediaType, Error>;

    async fn delete_media_type(&self, media_type_id: MediaTypeId) -> Result<(), Error>;
}

#[async_trait]
impl MediaTypeStore for MongoMediaTypeStore {
    #[tracing::instrument(skip(self))]
    async fn insert_media_type(&self, media_type: &MediaType) -> Result<(), Error> {
        self.insert_one(media_type, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_media_types(&self) -> Result<Vec<MediaType>, Error> {
        let media_types: Vec<MediaType> =
            self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(media_types)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_media_type_by_id(
        &self,
        media_type_id: MediaTypeId,
    ) -> Result<Option<MediaType>, Error> {
        let media_type: Option<MediaType> = self
            .find_one(bson::doc! { "_id": media_type_id }, None)
            .await?;

        Ok(media_type)
    }

    #[tracing::instrument(skip(self))]
    async fn update_media_type(&self, mut media_type: MediaType) -> Result<MediaType, Error> {
        let now = Utc::now();
        let new_modified_at = bson::DateTime::from_chrono(now);

        let result = self
            .update_one(
                bson::doc! { "_id": media_type.id },
                bson::doc! { "$set": {
                    "name": media_type.name.as_str(),
                    "modified_at": new_modified_at,
                } },
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return Err(Error::MediaTypeNotFound {
                media_type_id: media_type.id,
            });
        }

        media_type.modified_at = now;

        Ok(media_type)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_media_type(&self, media_type_id: MediaTypeId) -> Result<(), Error> {
        let result = self
            .delete_one(bson::doc! { "_id": media_type_id }, None)
            .await?;

        if result.deleted_count == 0 {
            return Err(Error::MediaTypeNotFound { media_type_id });
        }

        Ok(())
    }
}
